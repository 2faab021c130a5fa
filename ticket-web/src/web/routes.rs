//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::stations::StationApi;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<C: StationApi>(state: AppState<C>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page::<C>))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations::<C>))
        .route("/api/stations/search", get(search_stations::<C>))
        .route("/api/stations/lookup", get(lookup_station::<C>))
        .route("/api/stations/refresh", post(refresh_stations::<C>))
        .route("/api/notifications", get(drain_notifications::<C>))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the current station catalog.
async fn index_page<C: StationApi>(State(state): State<AppState<C>>) -> impl IntoResponse {
    let template = IndexTemplate {
        locale: state.config.locale.clone(),
        stations: state.stations.raw_data().await,
    };

    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Full station list.
async fn list_stations<C: StationApi>(
    State(state): State<AppState<C>>,
) -> Json<StationsResponse> {
    Json(StationsResponse {
        stations: state.stations.raw_data().await,
    })
}

/// Search stations by name substring.
async fn search_stations<C: StationApi>(
    State(state): State<AppState<C>>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationsResponse> {
    let limit = req.limit.unwrap_or(10).min(50);

    Json(StationsResponse {
        stations: state.stations.search(&req.q, limit).await,
    })
}

/// Resolve a station by id or by name.
async fn lookup_station<C: StationApi>(
    State(state): State<AppState<C>>,
    Query(req): Query<StationLookupRequest>,
) -> Result<Json<StationLookupResponse>, AppError> {
    match req {
        StationLookupRequest { id: Some(id), .. } => {
            let name = state
                .stations
                .name_of(id)
                .await
                .ok_or_else(|| AppError::NotFound {
                    message: format!("no station with id {id}"),
                })?;
            Ok(Json(StationLookupResponse { id, name }))
        }
        StationLookupRequest {
            name: Some(name), ..
        } => {
            let id = state
                .stations
                .id_of(&name)
                .await
                .ok_or_else(|| AppError::NotFound {
                    message: format!("no station named {name:?}"),
                })?;
            Ok(Json(StationLookupResponse { id, name }))
        }
        _ => Err(AppError::BadRequest {
            message: "expected an id or name query parameter".to_string(),
        }),
    }
}

/// Trigger an on-demand catalog refresh.
///
/// Fetch failures are not reported here; they surface through the
/// notification feed like any other fetch failure.
async fn refresh_stations<C: StationApi>(
    State(state): State<AppState<C>>,
) -> Json<RefreshResponse> {
    state.stations.fetch().await;

    Json(RefreshResponse {
        stations: state.stations.len().await,
    })
}

/// Drain pending notifications, oldest first.
async fn drain_notifications<C: StationApi>(
    State(state): State<AppState<C>>,
) -> Json<NotificationsResponse> {
    Json(NotificationsResponse {
        notifications: state.notifier.drain().await,
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
