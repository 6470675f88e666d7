use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_planner::config::ServerConfig;
use metro_planner::network::Network;
use metro_planner::sample::{self, ANKARA_SCENARIOS};
use metro_planner::web::{AppState, create_router};

/// Print the least-transfers and fastest routes of each sample scenario.
fn print_scenarios(network: &Network) {
    println!("=== Sample Scenarios ===");
    for (idx, scenario) in ANKARA_SCENARIOS.iter().enumerate() {
        println!();
        println!("{}. {}:", idx + 1, scenario.title);

        match network.find_least_transfers(scenario.from, scenario.to) {
            Ok(Some(route)) => println!("Route with the least transfers: {route}"),
            Ok(None) => println!("No route found"),
            Err(e) => error!(error = %e, "least-transfers query failed"),
        }

        match network.find_fastest_route(scenario.from, scenario.to) {
            Ok(Some(route)) => println!(
                "Fastest route ({} minutes): {route}",
                route.total_minutes()
            ),
            Ok(None) => println!("No route found"),
            Err(e) => error!(error = %e, "fastest-route query failed"),
        }
    }
    println!();
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the configured network, or fall back to the sample
    let network = match &config.network_file {
        Some(path) => sample::load_network(path).expect("Failed to load network file"),
        None => {
            let network = sample::ankara_network().expect("Sample network is valid");
            print_scenarios(&network);
            network
        }
    };
    info!(
        stations = network.station_count(),
        connections = network.connection_count(),
        "network ready"
    );

    let app = create_router(AppState::new(network));

    let addr = config.bind_addr;
    println!("Metro Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                          - Health check");
    println!("  GET  /stations                        - List stations");
    println!("  POST /stations                        - Register a station");
    println!("  POST /connections                     - Connect two stations");
    println!("  GET  /lines                           - Stations grouped by line");
    println!("  GET  /network                         - Export the network as JSON");
    println!("  GET  /route/least-transfers?from=&to= - Route with fewest transfers");
    println!("  GET  /route/fastest?from=&to=         - Fastest route");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
