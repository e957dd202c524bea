use serde::Serialize;
use thiserror::Error;

use crate::outcome::ProviderStatus;

#[derive(Debug, Error, PartialEq)]
pub enum PanelError {
    #[error("Please enter both source and destination.")]
    MissingEndpoints,
}

/// User-facing notice raised by a completed route request. Not an error:
/// the exchange with the provider worked, the provider just did not
/// return a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PanelNotice {
    RouteFailed(ProviderStatus),
}

impl std::fmt::Display for PanelNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelNotice::RouteFailed(status) => {
                write!(f, "Directions request failed due to {status}")
            }
        }
    }
}
