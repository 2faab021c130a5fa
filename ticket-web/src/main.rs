use tracing_subscriber::EnvFilter;

use ticket_web::backend::{BackendClient, BackendConfig};
use ticket_web::config::AppConfig;
use ticket_web::notify::Notifier;
use ticket_web::stations::{MockStationApi, StationApi, StationStore};
use ticket_web::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticket_web=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let notifier = Notifier::new();

    // A fixture file swaps in the mock station source, for development
    // without a running backend.
    match std::env::var("TICKET_STATION_FIXTURE") {
        Ok(path) => {
            let mock = MockStationApi::from_file(&path).expect("Failed to load station fixture");
            serve(config, StationStore::new(mock, notifier.clone()), notifier).await;
        }
        Err(_) => {
            let backend_config = BackendConfig::new(&config.backend_base_url)
                .with_timeout_secs(config.request_timeout_secs);
            let backend =
                BackendClient::new(backend_config).expect("Failed to create backend client");
            serve(config, StationStore::new(backend, notifier.clone()), notifier).await;
        }
    }
}

async fn serve<C: StationApi>(config: AppConfig, stations: StationStore<C>, notifier: Notifier) {
    // Initial catalog load. A failure is not fatal: the store keeps its
    // placeholder and the failure surfaces as a notification.
    println!("Fetching stations...");
    stations.fetch().await;
    println!("Loaded {} stations", stations.len().await);

    // Refresh the catalog periodically in the background.
    let refresh_interval = config.refresh_interval();
    let stations_refresh = stations.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            stations_refresh.fetch().await;
        }
    });

    let addr = config.listen_addr;
    let static_dir = config.static_dir.clone();
    let state = AppState::new(stations, notifier, config);
    let app = create_router(state, &static_dir);

    println!("Train Ticket front end listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                - Health check");
    println!("  GET  /api/stations          - Station catalog");
    println!("  GET  /api/stations/search   - Search stations by name");
    println!("  GET  /api/stations/lookup   - Resolve a station by id or name");
    println!("  POST /api/stations/refresh  - Refresh the catalog now");
    println!("  GET  /api/notifications     - Drain pending notifications");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
