use crate::AppState;
use crate::features::RouteParams;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};

// market share pie component: every share value for the selected route
pub fn market_router() -> Router<AppState> {
    Router::new().route("/get_market_share", get(get_market_share_handler))
}

async fn get_market_share_handler(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<Vec<f64>>, StatusCode> {
    let route = params.route_key().map_err(|_| StatusCode::BAD_REQUEST)?;

    let shares = state.repo.market_shares(&route).await.map_err(|e| {
        eprintln!("Failed to load market shares: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(shares))
}
