use anyhow::bail;
use clap::Args;
use comfy_table::Table;
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sidetrip_core::panel::TripPanel;
use sidetrip_providers::directions::{DirectionsClient, DirectionsProvider, TravelMode};
use sidetrip_providers::places::{PlacesClient, PlacesProvider};
use tracing::debug;

#[derive(Args)]
pub struct RouteArgs {
    /// Route origin, an address or place name
    #[arg(long)]
    pub from: String,

    /// Route destination
    #[arg(long)]
    pub to: String,

    /// 1-based waypoint table indices to select for attraction scouting
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<usize>,
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let directions = DirectionsClient::from_env()?;
    let places = PlacesClient::from_env()?;

    let mut panel = TripPanel::new();
    let ticket = panel.begin_route_request(&args.from, &args.to)?;

    let response = directions
        .fetch_route(
            &args.from,
            &args.to,
            &DirectionsProvider::GoogleApi {
                mode: TravelMode::Driving,
            },
        )
        .await?;

    let mut rng = SmallRng::from_os_rng();
    if let Some(notice) = panel.apply_route_outcome(&ticket, &response.into_outcome(), &mut rng) {
        bail!("{notice}");
    }

    println!("Route distance: {}", panel.distance_text());
    print_waypoints(&panel);

    if args.select.is_empty() {
        return Ok(());
    }

    // toggle one by one like the panel does; only the burst opened by
    // the last toggle may apply results
    let mut burst = None;
    for index in &args.select {
        let Some(waypoint) = index
            .checked_sub(1)
            .and_then(|i| panel.waypoints().get(i))
            .cloned()
        else {
            bail!(
                "No waypoint {index}; the table lists {} entries",
                panel.waypoints().len()
            );
        };
        burst = Some(panel.toggle_waypoint(&waypoint));
    }
    let Some(burst) = burst else {
        return Ok(());
    };

    let provider = PlacesProvider::GoogleApi;
    let loading_bar = ProgressBar::new(burst.locations.len() as u64);
    let mut outcomes = Vec::with_capacity(burst.locations.len());
    for location in &burst.locations {
        outcomes.push(places.fetch_nearby(*location, &provider).await);
        loading_bar.inc(1);
    }
    loading_bar.finish_and_clear();

    for outcome in outcomes {
        match outcome {
            Ok(response) => {
                panel.apply_nearby_outcome(&burst.ticket, response.into_outcome());
            }
            // a failed nearby search just yields no attractions
            Err(error) => debug!("nearby search failed: {error:#}"),
        }
    }

    print_attractions(&panel);

    Ok(())
}

fn print_waypoints(panel: &TripPanel) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Popularity", "Lat", "Lng"]);
    for (index, waypoint) in panel.waypoints().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            waypoint.name.clone(),
            waypoint.popularity.to_string(),
            format!("{:.5}", waypoint.location.lat),
            format!("{:.5}", waypoint.location.lng),
        ]);
    }
    println!("{table}");
}

fn print_attractions(panel: &TripPanel) {
    if panel.attractions().is_empty() {
        println!("No attractions found for the selected waypoints.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Ratings", "Vicinity"]);
    for attraction in panel.attractions().to_view() {
        table.add_row(vec![
            attraction.name,
            attraction.rating_count.to_string(),
            attraction.vicinity.unwrap_or_default(),
        ]);
    }
    println!("{table}");
}
