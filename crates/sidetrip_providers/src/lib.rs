pub mod directions;
pub mod google;
pub mod places;
pub mod polyline;
