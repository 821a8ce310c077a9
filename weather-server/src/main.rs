use std::sync::Arc;

use tracing::{info, warn};

use weather_server::config::AppConfig;
use weather_server::data::WeatherData;
use weather_server::logging;
use weather_server::noaa::{MockSource, NoaaClient, RemoteStationSource};
use weather_server::store::SqliteStationStore;
use weather_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    logging::init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Remote source: mock files if WX_MOCK_DIR is set, otherwise the live feed
    let source: Arc<dyn RemoteStationSource> = match &config.mock_dir {
        Some(dir) => {
            warn!(dir = %dir.display(), "serving feed documents from mock directory");
            let mock = MockSource::new(dir).expect("Failed to load mock data");
            info!(
                observations = mock.available_observations().await.len(),
                "loaded mock data"
            );
            Arc::new(mock)
        }
        None => Arc::new(NoaaClient::new(config.noaa()).expect("Failed to create NOAA client")),
    };

    let store = SqliteStationStore::open(&config.database).expect("Failed to open station store");
    info!(path = %config.database.display(), "opened station store");

    let state = AppState::new(WeatherData::new(source, Arc::new(store)));
    let app = create_router(state);

    let addr = config.bind;
    info!("Weather station browser listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health                       - Health check");
    info!("  GET  /api/states                   - States in the NOAA index");
    info!("  GET  /api/states/known             - States in the local store");
    info!("  GET  /api/stations?state=NY        - Stations in a state");
    info!("  GET  /api/observation?station=KNYC - Current conditions");
    info!("  POST /api/refresh                  - Refetch every known state");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
