pub mod attraction;
pub mod error;
pub mod geopoint;
pub mod map_view;
pub mod outcome;
pub mod panel;
pub mod waypoint;

#[cfg(test)]
pub mod test_utils;
