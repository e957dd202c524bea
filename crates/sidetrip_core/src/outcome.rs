use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attraction::Attraction;
use crate::geopoint::GeoPoint;

/// Status strings the mapping provider reports for directions and
/// nearby-search responses. A response arrives with exactly one of
/// these; the request itself succeeding at the transport level says
/// nothing about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Ok,
    ZeroResults,
    NotFound,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl ProviderStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProviderStatus::Ok)
    }

    pub fn from_wire(status: &str) -> Self {
        match status {
            "OK" => ProviderStatus::Ok,
            "ZERO_RESULTS" => ProviderStatus::ZeroResults,
            "NOT_FOUND" => ProviderStatus::NotFound,
            "OVER_QUERY_LIMIT" => ProviderStatus::OverQueryLimit,
            "REQUEST_DENIED" => ProviderStatus::RequestDenied,
            "INVALID_REQUEST" => ProviderStatus::InvalidRequest,
            "UNKNOWN_ERROR" => ProviderStatus::UnknownError,
            other => ProviderStatus::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            ProviderStatus::Ok => "OK",
            ProviderStatus::ZeroResults => "ZERO_RESULTS",
            ProviderStatus::NotFound => "NOT_FOUND",
            ProviderStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ProviderStatus::RequestDenied => "REQUEST_DENIED",
            ProviderStatus::InvalidRequest => "INVALID_REQUEST",
            ProviderStatus::UnknownError => "UNKNOWN_ERROR",
            ProviderStatus::Other(status) => status,
        }
    }
}

impl Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for ProviderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ProviderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(ProviderStatus::from_wire(&status))
    }
}

/// What the panel consumes from a directions response: the provider
/// status, the first leg's distance of the first route and that route's
/// overview path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOutcome {
    pub status: ProviderStatus,
    pub distance_meters: Option<f64>,
    pub overview_path: Vec<GeoPoint>,
}

/// One nearby-search result set for a single selected waypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyOutcome {
    pub status: ProviderStatus,
    pub places: Vec<Attraction>,
}

#[cfg(test)]
mod tests {
    use super::ProviderStatus;

    #[test]
    fn wire_round_trip() {
        for status in [
            "OK",
            "ZERO_RESULTS",
            "NOT_FOUND",
            "OVER_QUERY_LIMIT",
            "REQUEST_DENIED",
            "INVALID_REQUEST",
            "UNKNOWN_ERROR",
        ] {
            assert_eq!(ProviderStatus::from_wire(status).as_wire(), status);
        }
    }

    #[test]
    fn unknown_status_strings_are_preserved() {
        let status = ProviderStatus::from_wire("MAX_WAYPOINTS_EXCEEDED");

        assert!(!status.is_ok());
        assert_eq!(status.as_wire(), "MAX_WAYPOINTS_EXCEEDED");
    }

    #[test]
    fn serializes_as_wire_string() {
        let json = serde_json::to_string(&ProviderStatus::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");

        let back: ProviderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProviderStatus::NotFound);
    }
}
