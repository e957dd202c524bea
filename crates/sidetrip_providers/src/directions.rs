use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sidetrip_core::geopoint::GeoPoint;
use sidetrip_core::outcome::{ProviderStatus, RouteOutcome};

use crate::google::GoogleDirectionsClient;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
                TravelMode::Walking => "walking",
                TravelMode::Bicycling => "bicycling",
                TravelMode::Transit => "transit",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Leg distance in meters
    pub distance_meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub legs: Vec<RouteLeg>,
    /// Decoded overview path, ordered start to end
    pub overview_path: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub status: ProviderStatus,
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// Collapses to what the panel consumes: the first leg of the first
    /// route, plus that route's overview path.
    pub fn into_outcome(self) -> RouteOutcome {
        let first_route = self.routes.into_iter().next();
        let (distance_meters, overview_path) = match first_route {
            Some(route) => (
                route.legs.first().map(|leg| leg.distance_meters),
                route.overview_path,
            ),
            None => (None, Vec::new()),
        };

        RouteOutcome {
            status: self.status,
            distance_meters,
            overview_path,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub enum DirectionsProvider {
    GoogleApi { mode: TravelMode },
    /// Canned response, for offline runs and tests
    Fixture { response: DirectionsResponse },
}

pub struct DirectionsClient {
    google: GoogleDirectionsClient,
}

impl DirectionsClient {
    pub fn new(google: GoogleDirectionsClient) -> Self {
        Self { google }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(GoogleDirectionsClient::from_env()?))
    }

    pub async fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        provider: &DirectionsProvider,
    ) -> anyhow::Result<DirectionsResponse> {
        match provider {
            DirectionsProvider::GoogleApi { mode } => Ok(self
                .google
                .fetch_route(origin, destination, *mode)
                .await?),
            DirectionsProvider::Fixture { response } => Ok(response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use sidetrip_core::geopoint::GeoPoint;
    use sidetrip_core::outcome::ProviderStatus;

    use super::{
        DirectionsClient, DirectionsProvider, DirectionsResponse, DirectionsRoute, RouteLeg,
        TravelMode,
    };
    use crate::google::{GoogleClientParams, GoogleDirectionsClient};

    fn response() -> DirectionsResponse {
        DirectionsResponse {
            status: ProviderStatus::Ok,
            routes: vec![
                DirectionsRoute {
                    legs: vec![
                        RouteLeg {
                            distance_meters: 12345.0,
                        },
                        RouteLeg {
                            distance_meters: 999.0,
                        },
                    ],
                    overview_path: vec![GeoPoint::new(40.7, -74.0), GeoPoint::new(40.8, -73.9)],
                },
                DirectionsRoute {
                    legs: vec![RouteLeg {
                        distance_meters: 50000.0,
                    }],
                    overview_path: vec![],
                },
            ],
        }
    }

    #[test]
    fn outcome_takes_first_leg_of_first_route() {
        let outcome = response().into_outcome();

        assert_eq!(outcome.status, ProviderStatus::Ok);
        assert_eq!(outcome.distance_meters, Some(12345.0));
        assert_eq!(outcome.overview_path.len(), 2);
    }

    #[test]
    fn outcome_of_empty_response_is_empty() {
        let outcome = DirectionsResponse {
            status: ProviderStatus::ZeroResults,
            routes: vec![],
        }
        .into_outcome();

        assert_eq!(outcome.status, ProviderStatus::ZeroResults);
        assert_eq!(outcome.distance_meters, None);
        assert!(outcome.overview_path.is_empty());
    }

    #[test]
    fn travel_mode_wire_names() {
        assert_eq!(TravelMode::Driving.to_string(), "driving");
        assert_eq!(TravelMode::Transit.to_string(), "transit");
    }

    #[tokio::test]
    async fn fixture_provider_returns_canned_response() {
        let client = DirectionsClient::new(GoogleDirectionsClient::new(GoogleClientParams {
            api_key: "unused".to_string(),
        }));
        let provider = DirectionsProvider::Fixture {
            response: response(),
        };

        let fetched = client
            .fetch_route("New York", "Boston", &provider)
            .await
            .unwrap();

        assert_eq!(fetched, response());
    }
}
