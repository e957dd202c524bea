use serde::{Deserialize, Serialize};

use crate::attraction::Attraction;
use crate::geopoint::GeoPoint;

pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 40.730610,
    lng: -73.935242,
};

pub const DEFAULT_ZOOM: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoWindow {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub title: String,
    pub position: GeoPoint,
    pub info: InfoWindow,
}

impl Marker {
    /// One marker per kept place: titled with its name, popup showing
    /// name and vicinity.
    pub fn for_attraction(attraction: &Attraction) -> Self {
        Marker {
            title: attraction.name.clone(),
            position: attraction.location,
            info: InfoWindow {
                heading: attraction.name.clone(),
                body: attraction.vicinity.clone().unwrap_or_default(),
            },
        }
    }
}

/// Owned stand-in for the provider's map widget: center, zoom, the
/// rendered route overlay and the marker layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    route_path: Option<Vec<GeoPoint>>,
    markers: Vec<Marker>,
}

impl Default for MapView {
    fn default() -> Self {
        MapView {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            route_path: None,
            markers: Vec::new(),
        }
    }
}

impl MapView {
    pub fn set_route_path(&mut self, path: Vec<GeoPoint>) {
        self.route_path = Some(path);
    }

    pub fn route_path(&self) -> Option<&[GeoPoint]> {
        self.route_path.as_deref()
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}
