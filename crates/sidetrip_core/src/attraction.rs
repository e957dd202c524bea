use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// How many places survive the rating ranking per nearby search.
pub const TOP_ATTRACTIONS_PER_WAYPOINT: usize = 3;

/// Place record at the provider boundary. A missing rating count on the
/// wire becomes 0 here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub place_id: String,
    pub name: String,
    pub location: GeoPoint,
    pub rating_count: u32,
    pub vicinity: Option<String>,
}

/// Ranks places descending by rating count (ties keep input order) and
/// keeps the top [`TOP_ATTRACTIONS_PER_WAYPOINT`].
pub fn top_by_rating(mut places: Vec<Attraction>) -> Vec<Attraction> {
    places.sort_by(|a, b| b.rating_count.cmp(&a.rating_count));
    places.truncate(TOP_ATTRACTIONS_PER_WAYPOINT);
    places
}

/// Accumulated attractions for the current selection, keyed by place id.
/// Nearby searches of one burst complete in arbitrary order; keying by
/// identity makes the final content independent of that order and
/// collapses duplicate places from overlapping search radii.
#[derive(Debug, Default, Clone)]
pub struct AttractionSet {
    entries: FxHashMap<String, Attraction>,
}

impl AttractionSet {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns false if a place with the same id was already present.
    pub fn insert(&mut self, attraction: Attraction) -> bool {
        if self.entries.contains_key(&attraction.place_id) {
            return false;
        }
        self.entries.insert(attraction.place_id.clone(), attraction);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attraction> {
        self.entries.values()
    }

    /// Deterministic rendering order: rating count descending, then
    /// place id.
    pub fn to_view(&self) -> Vec<Attraction> {
        let mut view: Vec<Attraction> = self.entries.values().cloned().collect();
        view.sort_by(|a, b| {
            b.rating_count
                .cmp(&a.rating_count)
                .then_with(|| a.place_id.cmp(&b.place_id))
        });
        view
    }
}

#[cfg(test)]
mod tests {
    use super::{Attraction, AttractionSet, top_by_rating};
    use crate::geopoint::GeoPoint;

    fn place(id: &str, rating_count: u32) -> Attraction {
        Attraction {
            place_id: id.to_string(),
            name: format!("Place {id}"),
            location: GeoPoint::new(40.0, -73.0),
            rating_count,
            vicinity: Some("Somewhere, NY".to_string()),
        }
    }

    #[test]
    fn keeps_three_highest_by_rating_count() {
        let places = vec![
            place("a", 10),
            place("b", 50),
            place("c", 5),
            place("d", 200),
            place("e", 1),
        ];

        let kept = top_by_rating(places);

        let counts: Vec<u32> = kept.iter().map(|p| p.rating_count).collect();
        assert_eq!(counts, vec![200, 50, 10]);
    }

    #[test]
    fn rating_ties_keep_input_order() {
        let places = vec![place("a", 7), place("b", 7), place("c", 7), place("d", 7)];

        let kept = top_by_rating(places);

        let ids: Vec<&str> = kept.iter().map(|p| p.place_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn set_collapses_duplicate_place_ids() {
        let mut set = AttractionSet::default();

        assert!(set.insert(place("a", 10)));
        assert!(!set.insert(place("a", 99)));
        assert_eq!(set.len(), 1);
        // first insertion wins
        assert_eq!(set.iter().next().map(|p| p.rating_count), Some(10));
    }

    #[test]
    fn view_order_is_deterministic() {
        let mut set = AttractionSet::default();
        set.insert(place("b", 10));
        set.insert(place("a", 10));
        set.insert(place("c", 50));

        let ids: Vec<String> = set.to_view().into_iter().map(|p| p.place_id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
