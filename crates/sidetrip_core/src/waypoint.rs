use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// How many sampled candidates survive the popularity ranking.
pub const MAX_WAYPOINTS: usize = 10;

pub const MIN_POPULARITY: u8 = 1;
pub const MAX_POPULARITY: u8 = 10;

/// A sampled point along a computed route. Popularity is a synthetic
/// ranking score, drawn uniformly per sample; it only decides which
/// candidates are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub location: GeoPoint,
    pub popularity: u8,
}

/// Maps every overview-path point to a labelled waypoint, ranks by
/// popularity (descending, ties keep path order) and keeps the top
/// [`MAX_WAYPOINTS`].
pub fn sample_waypoints<R: Rng>(overview_path: &[GeoPoint], rng: &mut R) -> Vec<Waypoint> {
    let mut waypoints: Vec<Waypoint> = overview_path
        .iter()
        .enumerate()
        .map(|(idx, point)| Waypoint {
            name: format!("Waypoint {}", idx + 1),
            location: *point,
            popularity: rng.random_range(MIN_POPULARITY..=MAX_POPULARITY),
        })
        .collect();

    waypoints.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    waypoints.truncate(MAX_WAYPOINTS);
    waypoints
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::{MAX_WAYPOINTS, sample_waypoints};
    use crate::geopoint::GeoPoint;
    use crate::test_utils::MockRng;

    fn path(len: usize) -> Vec<GeoPoint> {
        (0..len)
            .map(|i| GeoPoint::new(40.0 + i as f64 * 0.01, -73.0))
            .collect()
    }

    #[test]
    fn keeps_top_ten_sorted_by_popularity() {
        let mut rng = SmallRng::seed_from_u64(2427121);
        let waypoints = sample_waypoints(&path(40), &mut rng);

        assert_eq!(waypoints.len(), MAX_WAYPOINTS);
        for pair in waypoints.windows(2) {
            assert!(pair[0].popularity >= pair[1].popularity);
        }
        for waypoint in &waypoints {
            assert!((1..=10).contains(&waypoint.popularity));
        }
    }

    #[test]
    fn short_path_keeps_every_point() {
        let mut rng = SmallRng::seed_from_u64(7);
        let waypoints = sample_waypoints(&path(4), &mut rng);

        assert_eq!(waypoints.len(), 4);
    }

    #[test]
    fn ties_keep_path_order() {
        // a constant rng stream makes every popularity equal, so the
        // ranking must fall back to path order
        let mut rng = MockRng::new(vec![0]);
        let waypoints = sample_waypoints(&path(12), &mut rng);

        assert_eq!(waypoints.len(), MAX_WAYPOINTS);
        let names: Vec<&str> = waypoints.iter().map(|w| w.name.as_str()).collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("Waypoint {i}")).collect();
        assert_eq!(names, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn empty_path_yields_no_waypoints() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(sample_waypoints(&[], &mut rng).is_empty());
    }
}
