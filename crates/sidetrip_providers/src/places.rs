use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sidetrip_core::attraction::Attraction;
use sidetrip_core::geopoint::GeoPoint;
use sidetrip_core::outcome::{NearbyOutcome, ProviderStatus};

use crate::google::GooglePlacesClient;

/// Search radius around a selected waypoint, in meters.
pub const NEARBY_SEARCH_RADIUS_M: u32 = 5000;

pub const TOURIST_ATTRACTION_CATEGORY: &str = "tourist_attraction";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    Prominence,
    Distance,
}

impl Display for RankBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RankBy::Prominence => "prominence",
                RankBy::Distance => "distance",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySearchResponse {
    pub status: ProviderStatus,
    pub places: Vec<Attraction>,
}

impl NearbySearchResponse {
    pub fn into_outcome(self) -> NearbyOutcome {
        NearbyOutcome {
            status: self.status,
            places: self.places,
        }
    }

    pub fn empty(status: ProviderStatus) -> Self {
        NearbySearchResponse {
            status,
            places: Vec::new(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub enum PlacesProvider {
    GoogleApi,
    /// Canned result sets keyed by search location (exact coordinate
    /// equality), for offline runs and tests
    Fixture {
        responses: Vec<(GeoPoint, NearbySearchResponse)>,
    },
}

pub struct PlacesClient {
    google: GooglePlacesClient,
}

impl PlacesClient {
    pub fn new(google: GooglePlacesClient) -> Self {
        Self { google }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(GooglePlacesClient::from_env()?))
    }

    /// One independent nearby query for one selected waypoint: tourist
    /// attractions within 5 km, ranked by prominence.
    pub async fn fetch_nearby(
        &self,
        location: GeoPoint,
        provider: &PlacesProvider,
    ) -> anyhow::Result<NearbySearchResponse> {
        match provider {
            PlacesProvider::GoogleApi => Ok(self
                .google
                .nearby_search(
                    location,
                    NEARBY_SEARCH_RADIUS_M,
                    TOURIST_ATTRACTION_CATEGORY,
                    RankBy::Prominence,
                )
                .await?),
            PlacesProvider::Fixture { responses } => Ok(responses
                .iter()
                .find(|(fixture_location, _)| *fixture_location == location)
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| {
                    NearbySearchResponse::empty(ProviderStatus::ZeroResults)
                })),
        }
    }
}

#[cfg(test)]
mod tests {
    use sidetrip_core::attraction::Attraction;
    use sidetrip_core::geopoint::GeoPoint;
    use sidetrip_core::outcome::ProviderStatus;

    use super::{NearbySearchResponse, PlacesClient, PlacesProvider, RankBy};
    use crate::google::{GoogleClientParams, GooglePlacesClient};

    fn client() -> PlacesClient {
        PlacesClient::new(GooglePlacesClient::new(GoogleClientParams {
            api_key: "unused".to_string(),
        }))
    }

    fn fixture(location: GeoPoint) -> PlacesProvider {
        PlacesProvider::Fixture {
            responses: vec![(
                location,
                NearbySearchResponse {
                    status: ProviderStatus::Ok,
                    places: vec![Attraction {
                        place_id: "abc".to_string(),
                        name: "Liberty Tower".to_string(),
                        location,
                        rating_count: 120,
                        vicinity: None,
                    }],
                },
            )],
        }
    }

    #[tokio::test]
    async fn fixture_lookup_matches_exact_location() {
        let location = GeoPoint::new(40.5, -73.5);

        let response = client()
            .fetch_nearby(location, &fixture(location))
            .await
            .unwrap();

        assert_eq!(response.status, ProviderStatus::Ok);
        assert_eq!(response.places.len(), 1);
    }

    #[tokio::test]
    async fn fixture_miss_yields_zero_results() {
        let response = client()
            .fetch_nearby(GeoPoint::new(41.0, -72.0), &fixture(GeoPoint::new(40.5, -73.5)))
            .await
            .unwrap();

        assert_eq!(response.status, ProviderStatus::ZeroResults);
        assert!(response.places.is_empty());
    }

    #[test]
    fn rank_by_wire_names() {
        assert_eq!(RankBy::Prominence.to_string(), "prominence");
        assert_eq!(RankBy::Distance.to_string(), "distance");
    }
}
