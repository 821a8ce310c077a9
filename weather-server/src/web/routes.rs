//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::data::DataError;

use super::dto::*;
use super::model::WeatherModel;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/stations", get(stations_page))
        .route("/observation", get(observation_page))
        .route("/refresh", post(refresh_page))
        .route("/api/states", get(api_states))
        .route("/api/states/known", get(api_known_states))
        .route("/api/stations", get(api_stations))
        .route("/api/observation", get(api_observation))
        .route("/api/refresh", post(api_refresh))
        .fallback(not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// A fresh page model with the state selector filled in.
async fn page_model(state: &AppState) -> WeatherModel {
    match state.state_choices().await {
        Ok(states) => WeatherModel::new(states.into_vec()),
        Err(e) => {
            let mut model = WeatherModel::new(Vec::new());
            model.message = Some(e.to_string());
            model
        }
    }
}

/// Render the station browser, with the status of the step that built it.
fn render_page(model: WeatherModel, result: Result<(), DataError>) -> Response {
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(e) => status_for(e),
    };
    match (IndexTemplate { model }).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {}", e),
        }
        .into_response(),
    }
}

/// Station browser with only the state selector.
async fn index_page(State(state): State<AppState>) -> Response {
    let model = page_model(&state).await;
    render_page(model, Ok(()))
}

/// Load the stations of the selected state.
async fn stations_page(
    State(state): State<AppState>,
    Query(req): Query<StationsQuery>,
) -> Response {
    let mut model = page_model(&state).await;
    let result = model.load(&state.data, &req.state).await;
    render_page(model, result)
}

/// Show the current conditions at the selected station.
async fn observation_page(
    State(state): State<AppState>,
    Query(req): Query<ObservationQuery>,
) -> Response {
    let mut model = page_model(&state).await;

    if let Some(selected) = req.state.as_deref().filter(|s| !s.trim().is_empty())
        && let Err(e) = model.load(&state.data, selected).await
    {
        return render_page(model, Err(e));
    }

    let result = model.get(&state.data, &req.station).await;
    render_page(model, result)
}

/// Rebuild local data and show the summary.
async fn refresh_page(State(state): State<AppState>) -> Response {
    let mut model = page_model(&state).await;
    let result = model.refresh(&state.data).await;
    render_page(model, result)
}

async fn not_found_page() -> Response {
    let template = ErrorTemplate {
        title: "Not found".to_string(),
        message: "There is no such page.".to_string(),
    };
    match template.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {}", e),
        }
        .into_response(),
    }
}

/// Every state in the feed's station index.
async fn api_states(State(state): State<AppState>) -> Result<Json<StatesResponse>, AppError> {
    let states = state.data.states().load_all_states().await?;
    Ok(Json(StatesResponse {
        states: states.into_vec(),
    }))
}

/// States with stations in the local store.
async fn api_known_states(
    State(state): State<AppState>,
) -> Result<Json<StatesResponse>, AppError> {
    let states = state.data.states().known_states()?;
    Ok(Json(StatesResponse {
        states: states.into_vec(),
    }))
}

async fn api_stations(
    State(state): State<AppState>,
    Query(req): Query<StationsQuery>,
) -> Result<Json<StationsResponse>, AppError> {
    let stations = state.data.catalog().get_stations(&req.state).await?;
    Ok(Json(StationsResponse {
        state: req.state.trim().to_string(),
        stations: stations.iter().map(StationResult::from_station).collect(),
    }))
}

async fn api_observation(
    State(state): State<AppState>,
    Query(req): Query<ObservationQuery>,
) -> Result<Json<ObservationResponse>, AppError> {
    let observation = state
        .data
        .observations()
        .get_observation(&req.station)
        .await?;

    Ok(Json(ObservationResponse {
        station_id: req.station.trim().to_string(),
        report: observation
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        observation: observation.as_ref().map(ObservationResult::from_observation),
    }))
}

async fn api_refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, AppError> {
    let report = state.data.refresher().refresh_all().await?;
    Ok(Json(RefreshResponse::from_report(&report)))
}

fn status_for(e: &DataError) -> StatusCode {
    match e {
        DataError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        DataError::NotFound { .. } => StatusCode::NOT_FOUND,
        DataError::DataAccess { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DataError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
    Unavailable { message: String },
}

impl From<DataError> for AppError {
    fn from(e: DataError) -> Self {
        let message = e.to_string();
        match e {
            DataError::InvalidArgument { .. } => AppError::BadRequest { message },
            DataError::NotFound { .. } => AppError::NotFound { message },
            DataError::DataAccess { .. } => AppError::Internal { message },
            DataError::Cancelled => AppError::Unavailable { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, "{}", message);

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
