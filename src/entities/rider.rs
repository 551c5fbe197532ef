use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{missing_field_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rider {
    pub name: String,
    pub number: String,
    pub longitude: f64,
    pub latitude: f64,
    pub requested_at: DateTime<Utc>,
}

impl Rider {
    pub fn new(name: &str, number: &str, longitude: f64, latitude: f64) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(missing_field_error("name"));
        }

        if number.trim().is_empty() {
            return Err(missing_field_error("number"));
        }

        Ok(Self {
            name: name.into(),
            number: number.into(),
            longitude,
            latitude,
            requested_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        assert!(Rider::new("", "+18001234567", 0.0, 0.0).is_err());
        assert!(Rider::new("Jane Doe", "  ", 0.0, 0.0).is_err());
        assert!(Rider::new("Jane Doe", "+18001234567", 0.0, 0.0).is_ok());
    }
}
