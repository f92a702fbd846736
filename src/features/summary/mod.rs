pub mod model;

use crate::AppState;
use crate::domain::{RouteDetails, RouteForecast};
use crate::features::RouteParams;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use model::{JsonForecast, JsonRouteDetails};

// result and other-info components: the forecast and routing details of the
// strongest option on the selected route. the frontend expects an array with
// at most one object, so "no such route" is an empty array rather than a 404.
pub fn summary_router() -> Router<AppState> {
    Router::new()
        .route("/results", get(get_results_handler))
        .route("/other", get(get_other_info_handler))
}

async fn get_results_handler(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<Vec<JsonForecast>>, StatusCode> {
    let route = params.route_key().map_err(|_| StatusCode::BAD_REQUEST)?;

    let forecast = state.repo.best_forecast(&route).await.map_err(|e| {
        eprintln!("Failed to load route forecast: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let results = forecast.iter().map(forecast_to_json).collect();

    Ok(Json(results))
}

async fn get_other_info_handler(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<Vec<JsonRouteDetails>>, StatusCode> {
    let route = params.route_key().map_err(|_| StatusCode::BAD_REQUEST)?;

    let details = state.repo.best_route_details(&route).await.map_err(|e| {
        eprintln!("Failed to load route details: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let other_info = details.iter().map(details_to_json).collect();

    Ok(Json(other_info))
}

fn forecast_to_json(forecast: &RouteForecast) -> JsonForecast {
    JsonForecast {
        tot_pax: forecast.tot_pax,
        accuracy: forecast.accuracy,
    }
}

fn details_to_json(details: &RouteDetails) -> JsonRouteDetails {
    JsonRouteDetails {
        detour: details.detour,
        stops: details.stops,
        distance: details.real_dist,
    }
}
