use crate::AppState;
use crate::domain::RouteToken;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct OriginParams {
    #[serde(rename = "Orig_s")]
    orig_s: String,
}

#[derive(Deserialize)]
struct DestinationParams {
    #[serde(rename = "Dest_s")]
    dest_s: String,
}

// map component: resolves the selected codes against the map table.
// the frontend expects a one-element array (the original backend returned the
// raw row tuple) and a 404 when the code has no map entry.
pub fn map_router() -> Router<AppState> {
    Router::new()
        .route("/get_map_orig", get(get_map_origin_handler))
        .route("/get_map_dest", get(get_map_destination_handler))
}

async fn get_map_origin_handler(
    State(state): State<AppState>,
    Query(params): Query<OriginParams>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let origin = RouteToken::parse(&params.orig_s).map_err(|_| StatusCode::BAD_REQUEST)?;

    let code = state.repo.map_origin(&origin).await.map_err(|e| {
        eprintln!("Failed to load map origin for {}: {}", origin, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match code {
        Some(code) => Ok(Json(vec![code])),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn get_map_destination_handler(
    State(state): State<AppState>,
    Query(params): Query<DestinationParams>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let destination = RouteToken::parse(&params.dest_s).map_err(|_| StatusCode::BAD_REQUEST)?;

    let code = state.repo.map_destination(&destination).await.map_err(|e| {
        eprintln!("Failed to load map destination for {}: {}", destination, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match code {
        Some(code) => Ok(Json(vec![code])),
        None => Err(StatusCode::NOT_FOUND),
    }
}
