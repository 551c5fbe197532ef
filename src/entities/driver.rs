use serde::{Deserialize, Serialize};

use crate::error::{missing_field_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
}

impl Driver {
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(missing_field_error("name"));
        }

        Ok(Self { name: name.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        assert!(Driver::new("").is_err());
        assert!(Driver::new("John Doe").is_ok());
    }
}
