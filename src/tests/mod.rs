pub mod unit_classifier_ranking;
pub mod unit_route_tokens;
