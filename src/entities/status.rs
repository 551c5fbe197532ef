use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{invalid_status_error, Error};

/// The single process-wide trip lifecycle value shared by the rider and
/// driver views. Serialized as the exact PascalCase variant names the mobile
/// clients listen for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Neutral,
    Searching,
    FoundRide,
    Arrived,
    OnTrip,
    EndedTrip,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Neutral,
        Status::Searching,
        Status::FoundRide,
        Status::Arrived,
        Status::OnTrip,
        Status::EndedTrip,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Searching => "Searching",
            Self::FoundRide => "FoundRide",
            Self::Arrived => "Arrived",
            Self::OnTrip => "OnTrip",
            Self::EndedTrip => "EndedTrip",
        }
    }

    /// Both of these tear the rider and driver out of the shared state.
    pub fn clears_participants(&self) -> bool {
        matches!(self, Self::Neutral | Self::EndedTrip)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Neutral" => Ok(Self::Neutral),
            "Searching" => Ok(Self::Searching),
            "FoundRide" => Ok(Self::FoundRide),
            "Arrived" => Ok(Self::Arrived),
            "OnTrip" => Ok(Self::OnTrip),
            "EndedTrip" => Ok(Self::EndedTrip),
            _ => Err(invalid_status_error(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_status() {
        for status in Status::ALL {
            assert_eq!(status.name().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "Flying".parse::<Status>().unwrap_err();
        assert_eq!(err.code, 102);

        assert!("searching".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn serializes_as_pascal_case_names() {
        for status in Status::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.name().into()));
        }
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(Status::default(), Status::Neutral);
    }

    #[test]
    fn only_terminal_statuses_clear_participants() {
        assert!(Status::Neutral.clears_participants());
        assert!(Status::EndedTrip.clears_participants());

        assert!(!Status::Searching.clears_participants());
        assert!(!Status::FoundRide.clears_participants());
        assert!(!Status::Arrived.clears_participants());
        assert!(!Status::OnTrip.clears_participants());
    }
}
