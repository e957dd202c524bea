use fxhash::FxHashMap;
use parking_lot::RwLock;
use sidetrip_core::panel::TripPanel;
use sidetrip_providers::directions::{DirectionsClient, DirectionsProvider};
use sidetrip_providers::places::{PlacesClient, PlacesProvider};
use uuid::Uuid;

/// One `TripPanel` per session; a session covers one view lifetime of
/// the map panel. Panels are dropped with the process, nothing is
/// persisted.
pub struct AppState {
    pub panels: RwLock<FxHashMap<Uuid, TripPanel>>,
    pub directions: DirectionsClient,
    pub places: PlacesClient,
    pub directions_provider: DirectionsProvider,
    pub places_provider: PlacesProvider,
}

impl AppState {
    pub fn new(
        directions: DirectionsClient,
        places: PlacesClient,
        directions_provider: DirectionsProvider,
        places_provider: PlacesProvider,
    ) -> Self {
        AppState {
            panels: RwLock::new(FxHashMap::default()),
            directions,
            places,
            directions_provider,
            places_provider,
        }
    }
}
