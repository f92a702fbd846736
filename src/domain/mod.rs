pub mod classify;
pub mod itinerary;
pub mod record;
pub mod route;
pub mod summary;

pub use itinerary::{ClassifiedOption, Decision, ItineraryOption};
pub use record::ItineraryRecord;
pub use route::{InvalidToken, RouteKey, RouteToken};
pub use summary::{RouteDetails, RouteForecast};
