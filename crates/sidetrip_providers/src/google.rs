use anyhow::Context;
use serde::Deserialize;
use sidetrip_core::attraction::Attraction;
use sidetrip_core::geopoint::GeoPoint;
use sidetrip_core::outcome::ProviderStatus;
use thiserror::Error;
use tracing::debug;

use crate::directions::{DirectionsResponse, DirectionsRoute, RouteLeg, TravelMode};
use crate::places::{NearbySearchResponse, RankBy};
use crate::polyline::{PolylineError, decode_polyline};

pub const GOOGLE_DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const GOOGLE_NEARBY_SEARCH_API_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

pub const GOOGLE_API_KEY_ENV_VAR: &str = "SIDETRIP_GOOGLE_API_KEY";

#[derive(Debug, Error)]
pub enum GoogleApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Malformed overview polyline: {0}")]
    Polyline(#[from] PolylineError),
}

#[derive(Clone)]
pub struct GoogleClientParams {
    pub api_key: String,
}

impl GoogleClientParams {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var(GOOGLE_API_KEY_ENV_VAR)
            .with_context(|| format!("{GOOGLE_API_KEY_ENV_VAR} is not set"))?;
        Ok(GoogleClientParams { api_key })
    }
}

pub struct GoogleDirectionsClient {
    params: GoogleClientParams,
    client: reqwest::Client,
}

impl GoogleDirectionsClient {
    pub fn new(params: GoogleClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(GoogleClientParams::from_env()?))
    }

    pub async fn fetch_route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<DirectionsResponse, GoogleApiError> {
        let mode = mode.to_string();
        let response = self
            .client
            .get(GOOGLE_DIRECTIONS_API_URL)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
                ("key", self.params.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GoogleApiError::Api { status, message });
        }

        let body = response.text().await?;
        let wire: WireDirectionsResponse = serde_json::from_str(&body)?;

        debug!(
            "GoogleDirectionsApi: status {}, {} route(s)",
            wire.status,
            wire.routes.len()
        );

        let mut routes = Vec::with_capacity(wire.routes.len());
        for route in wire.routes {
            routes.push(DirectionsRoute {
                legs: route
                    .legs
                    .into_iter()
                    .map(|leg| RouteLeg {
                        distance_meters: leg.distance.value,
                    })
                    .collect(),
                overview_path: decode_polyline(&route.overview_polyline.points)?,
            });
        }

        Ok(DirectionsResponse {
            status: ProviderStatus::from_wire(&wire.status),
            routes,
        })
    }
}

pub struct GooglePlacesClient {
    params: GoogleClientParams,
    client: reqwest::Client,
}

impl GooglePlacesClient {
    pub fn new(params: GoogleClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(GoogleClientParams::from_env()?))
    }

    pub async fn nearby_search(
        &self,
        location: GeoPoint,
        radius_m: u32,
        category: &str,
        rank_by: RankBy,
    ) -> Result<NearbySearchResponse, GoogleApiError> {
        let location_param = format!("{},{}", location.lat, location.lng);
        let radius_param = radius_m.to_string();
        let rank_by = rank_by.to_string();

        let response = self
            .client
            .get(GOOGLE_NEARBY_SEARCH_API_URL)
            .query(&[
                ("location", location_param.as_str()),
                ("radius", radius_param.as_str()),
                ("type", category),
                ("rankby", rank_by.as_str()),
                ("key", self.params.api_key.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GoogleApiError::Api { status, message });
        }

        let body = response.text().await?;
        let wire: WireNearbyResponse = serde_json::from_str(&body)?;

        debug!(
            "GooglePlacesApi: status {}, {} result(s)",
            wire.status,
            wire.results.len()
        );

        Ok(NearbySearchResponse {
            status: ProviderStatus::from_wire(&wire.status),
            places: wire.results.into_iter().map(WirePlace::into_place).collect(),
        })
    }
}

#[derive(Deserialize)]
struct WireDirectionsResponse {
    status: String,

    #[serde(default)]
    routes: Vec<WireRoute>,
}

#[derive(Deserialize)]
struct WireRoute {
    #[serde(default)]
    legs: Vec<WireLeg>,

    overview_polyline: WirePolyline,
}

#[derive(Deserialize)]
struct WireLeg {
    distance: WireDistance,
}

#[derive(Deserialize)]
struct WireDistance {
    /// Meters
    value: f64,
}

#[derive(Deserialize)]
struct WirePolyline {
    points: String,
}

#[derive(Deserialize)]
struct WireNearbyResponse {
    status: String,

    #[serde(default)]
    results: Vec<WirePlace>,
}

#[derive(Deserialize)]
struct WirePlace {
    place_id: String,
    name: String,
    geometry: WireGeometry,

    #[serde(default)]
    user_ratings_total: Option<u32>,

    #[serde(default)]
    vicinity: Option<String>,
}

impl WirePlace {
    fn into_place(self) -> Attraction {
        Attraction {
            place_id: self.place_id,
            name: self.name,
            location: GeoPoint {
                lat: self.geometry.location.lat,
                lng: self.geometry.location.lng,
            },
            // missing rating count ranks last
            rating_count: self.user_ratings_total.unwrap_or(0),
            vicinity: self.vicinity,
        }
    }
}

#[derive(Deserialize)]
struct WireGeometry {
    location: WireLatLng,
}

#[derive(Deserialize)]
struct WireLatLng {
    lat: f64,
    lng: f64,
}
