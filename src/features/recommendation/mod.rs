pub mod model;

use crate::AppState;
use crate::domain::ClassifiedOption;
use crate::domain::classify::classify_options;
use crate::features::RouteParams;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use model::JsonRecommendation;

// recommendation component: the route's options ranked by market share, the
// top 3 labelled Create and the rest Cancel
pub fn recommendation_router() -> Router<AppState> {
    Router::new().route("/get_recommendation", get(get_recommendation_handler))
}

async fn get_recommendation_handler(
    State(state): State<AppState>,
    Query(params): Query<RouteParams>,
) -> Result<Json<Vec<JsonRecommendation>>, StatusCode> {
    let route = params.route_key().map_err(|_| StatusCode::BAD_REQUEST)?;

    let options = state.repo.options_for_route(&route).await.map_err(|e| {
        eprintln!("Failed to load options for recommendation: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    // an unknown route simply has no options, which classifies to []
    let classified = classify_options(options);

    let recommendations = classified
        .iter()
        .map(classified_option_to_json)
        .collect();

    Ok(Json(recommendations))
}

fn classified_option_to_json(option: &ClassifiedOption) -> JsonRecommendation {
    JsonRecommendation {
        dep_hours: option.dep_hour,
        arr_hours: option.arr_hour,
        elapsed_time: option.elapsed_time,
        option: option.decision.to_string(),
    }
}
