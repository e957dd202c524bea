use rand::Rng;
use tracing::debug;

use crate::attraction::{AttractionSet, top_by_rating};
use crate::error::{PanelError, PanelNotice};
use crate::geopoint::GeoPoint;
use crate::map_view::{MapView, Marker};
use crate::outcome::{NearbyOutcome, RouteOutcome};
use crate::waypoint::{Waypoint, sample_waypoints};

/// Handed out by [`TripPanel::begin_route_request`]; a directions
/// response may only be applied under the ticket of the request that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTicket {
    generation: u64,
}

/// Same guard for one attraction-search burst. In-flight nearby
/// searches are never cancelled; a result arriving after the selection
/// changed again carries a stale ticket and is dropped at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

/// One attraction-search burst: the ticket plus the snapshot of
/// selected locations to query, one independent nearby search each.
#[derive(Debug, Clone)]
pub struct SearchBurst {
    pub ticket: SearchTicket,
    pub locations: Vec<GeoPoint>,
}

/// Session-scoped state of the route panel: one map view, the last
/// requested route, the sampled waypoints, the user's selection and the
/// attractions accumulated for it.
#[derive(Debug, Default)]
pub struct TripPanel {
    map: MapView,
    source: String,
    destination: String,
    distance_text: String,
    route_found: bool,
    waypoints: Vec<Waypoint>,
    selected: Vec<Waypoint>,
    attractions: AttractionSet,
    sidebar_open: bool,
    last_notice: Option<PanelNotice>,
    route_generation: u64,
    search_generation: u64,
}

impl TripPanel {
    pub fn new() -> Self {
        TripPanel::default()
    }

    /// Front half of a route request: validates the endpoints, clears
    /// the accumulated attractions and hands out the ticket for the
    /// provider call. With empty input no ticket is issued and no
    /// provider call may happen.
    pub fn begin_route_request(
        &mut self,
        source: &str,
        destination: &str,
    ) -> Result<RouteTicket, PanelError> {
        if source.is_empty() || destination.is_empty() {
            return Err(PanelError::MissingEndpoints);
        }

        self.source = source.to_owned();
        self.destination = destination.to_owned();
        self.attractions.clear();
        self.map.clear_markers();
        // supersede any in-flight burst so it cannot repopulate the set
        self.search_generation += 1;

        self.route_generation += 1;
        Ok(RouteTicket {
            generation: self.route_generation,
        })
    }

    /// Back half of a route request. A stale ticket mutates nothing. On
    /// a successful status the route is rendered, the distance derived
    /// and a fresh waypoint list sampled; a failed status raises a
    /// notice and derives no waypoints. The selection survives either
    /// way.
    pub fn apply_route_outcome<R: Rng>(
        &mut self,
        ticket: &RouteTicket,
        outcome: &RouteOutcome,
        rng: &mut R,
    ) -> Option<PanelNotice> {
        if ticket.generation != self.route_generation {
            debug!(
                ticket = ticket.generation,
                current = self.route_generation,
                "dropping stale directions response"
            );
            return None;
        }

        if outcome.status.is_ok() {
            self.route_found = true;
            self.map.set_route_path(outcome.overview_path.clone());
            if let Some(meters) = outcome.distance_meters {
                self.distance_text = format_route_distance(meters);
            }
            self.waypoints = sample_waypoints(&outcome.overview_path, rng);
            self.last_notice = None;
            None
        } else {
            let notice = PanelNotice::RouteFailed(outcome.status.clone());
            self.waypoints.clear();
            self.last_notice = Some(notice.clone());
            Some(notice)
        }
    }

    /// Toggles a waypoint in or out of the selection, matching by
    /// coordinate equality only, then opens a new search burst for the
    /// whole selection.
    pub fn toggle_waypoint(&mut self, waypoint: &Waypoint) -> SearchBurst {
        match self
            .selected
            .iter()
            .position(|selected| selected.location == waypoint.location)
        {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(waypoint.clone()),
        }

        self.begin_attraction_search()
    }

    /// Opens a burst: supersedes any in-flight one, clears the
    /// accumulated attractions and markers, snapshots the selection.
    pub fn begin_attraction_search(&mut self) -> SearchBurst {
        self.search_generation += 1;
        self.attractions.clear();
        self.map.clear_markers();

        SearchBurst {
            ticket: SearchTicket {
                generation: self.search_generation,
            },
            locations: self.selected.iter().map(|w| w.location).collect(),
        }
    }

    /// Applies one nearby-search result set under its burst ticket.
    /// Keeps the top places by rating count and merges them into the
    /// attraction set; a place already present (overlapping radii)
    /// gets no second marker. Returns how many places were added.
    pub fn apply_nearby_outcome(&mut self, ticket: &SearchTicket, outcome: NearbyOutcome) -> usize {
        if ticket.generation != self.search_generation {
            debug!(
                ticket = ticket.generation,
                current = self.search_generation,
                "dropping nearby results for a superseded selection"
            );
            return 0;
        }

        if !outcome.status.is_ok() {
            // places failures are silent, the waypoint just gets no markers
            debug!(status = %outcome.status, "nearby search returned no usable results");
            return 0;
        }

        let mut added = 0;
        for place in top_by_rating(outcome.places) {
            let marker = Marker::for_attraction(&place);
            if self.attractions.insert(place) {
                self.map.add_marker(marker);
                added += 1;
            }
        }
        added
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn find_waypoint(&self, location: &GeoPoint) -> Option<&Waypoint> {
        self.waypoints
            .iter()
            .find(|waypoint| waypoint.location == *location)
            .or_else(|| {
                // a selected entry may no longer be listed after a re-route;
                // it must still be deselectable
                self.selected
                    .iter()
                    .find(|waypoint| waypoint.location == *location)
            })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance_text(&self) -> &str {
        &self.distance_text
    }

    pub fn route_found(&self) -> bool {
        self.route_found
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn selected_waypoints(&self) -> &[Waypoint] {
        &self.selected
    }

    pub fn attractions(&self) -> &AttractionSet {
        &self.attractions
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn last_notice(&self) -> Option<&PanelNotice> {
        self.last_notice.as_ref()
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }
}

/// Route distance for display: kilometers with two decimals,
/// round-half-up, unit suffix. 12345 m becomes "12.35 km".
pub fn format_route_distance(meters: f64) -> String {
    let centi_km = (meters / 10.0).round();
    format!("{:.2} km", centi_km / 100.0)
}
