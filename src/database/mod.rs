use crate::domain::{
    ItineraryOption, ItineraryRecord, RouteDetails, RouteForecast, RouteKey, RouteToken,
};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// the query collaborator behind every endpoint. sqlx::Pool is thread safe, so
// implementations can be shared across handlers behind an Arc.
// an Err from any method means the store could not be reached or the query
// failed; "no matching rows" is an Ok with an empty Vec or None, never an Err.
// db specific implementations live in "sqlite.rs", future: "postgres.rs"
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    async fn departure_days(&self) -> Result<Vec<i64>>;
    async fn origins(&self) -> Result<Vec<String>>;
    async fn destinations_for_origin(&self, origin: &RouteToken) -> Result<Vec<String>>;

    async fn map_origin(&self, origin: &RouteToken) -> Result<Option<String>>;
    async fn map_destination(&self, destination: &RouteToken) -> Result<Option<String>>;

    async fn market_shares(&self, route: &RouteKey) -> Result<Vec<f64>>;

    // the unordered option set the classifier ranks
    async fn options_for_route(&self, route: &RouteKey) -> Result<Vec<ItineraryOption>>;

    async fn best_forecast(&self, route: &RouteKey) -> Result<Option<RouteForecast>>;
    async fn best_route_details(&self, route: &RouteKey) -> Result<Option<RouteDetails>>;

    async fn all_records(&self) -> Result<Vec<ItineraryRecord>>;
    async fn record_by_id(&self, id: i64) -> Result<Option<ItineraryRecord>>;
}
