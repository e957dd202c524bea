use serde::{Deserialize, Serialize};

const EARTH_RADIUS: f64 = 6_371_000.0;

/// Geographic coordinate in degrees. Equality is exact (bitwise on both
/// fields): waypoint selection is keyed on it and must never merge two
/// distinct path points that happen to be close.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
    }
}

impl Eq for GeoPoint {}

impl std::hash::Hash for GeoPoint {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.lat.to_bits());
        state.write_u64(self.lng.to_bits());
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<geo_types::Point> for GeoPoint {
    fn from(point: geo_types::Point) -> Self {
        GeoPoint {
            lat: point.y(),
            lng: point.x(),
        }
    }
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let lat2 = other.lat.to_radians();
        let lng2 = other.lng.to_radians();

        let dlat = lat2 - lat1;
        let dlng = lng2 - lng1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }
}

#[cfg(test)]
mod tests {
    use super::GeoPoint;

    #[test]
    fn equality_is_exact() {
        let a = GeoPoint::new(40.730610, -73.935242);
        let b = GeoPoint::new(40.730610, -73.935242);
        let nudged = GeoPoint::new(40.730610 + 1e-12, -73.935242);

        assert_eq!(a, b);
        assert_ne!(a, nudged);
    }

    #[test]
    fn haversine_nyc_to_philadelphia() {
        let nyc = GeoPoint::new(40.7128, -74.0060);
        let philly = GeoPoint::new(39.9526, -75.1652);

        let distance = nyc.haversine_distance(&philly);

        // roughly 130 km as the crow flies
        assert!((120_000.0..140_000.0).contains(&distance));
    }

    #[test]
    fn geo_types_conversion_is_lng_lat() {
        let point = GeoPoint::new(40.0, -73.0);
        let geo: geo_types::Point = (&point).into();

        assert_eq!(geo.x(), -73.0);
        assert_eq!(geo.y(), 40.0);
        assert_eq!(GeoPoint::from(geo), point);
    }
}
