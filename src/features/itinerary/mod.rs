use crate::AppState;
use crate::domain::RouteToken;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

// itinerary input component: the dropdown sources for the dashboard
pub fn itinerary_router() -> Router<AppState> {
    Router::new()
        .route("/get_depDay", get(get_departure_days_handler))
        .route("/get_Orig_s", get(get_origins_handler))
        .route("/get_Dest_s/{origin}", get(get_destinations_handler))
}

async fn get_departure_days_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<i64>>, StatusCode> {
    let days = state.repo.departure_days().await.map_err(|e| {
        eprintln!("Failed to load departure days: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(days))
}

async fn get_origins_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let origins = state.repo.origins().await.map_err(|e| {
        eprintln!("Failed to load origin codes: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(origins))
}

async fn get_destinations_handler(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let origin = RouteToken::parse(&origin).map_err(|_| StatusCode::BAD_REQUEST)?;

    let destinations = state
        .repo
        .destinations_for_origin(&origin)
        .await
        .map_err(|e| {
            eprintln!("Failed to load destinations for {}: {}", origin, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(destinations))
}
