pub mod itinerary;
pub mod map;
pub mod market;
pub mod recommendation;
pub mod records;
pub mod summary;

use crate::domain::{InvalidToken, RouteKey};
use serde::Deserialize;

// the dashboard frontend filters every route-scoped component with
// ?Orig_s=DE&Dest_s=US, so the parameter names are part of the wire contract
#[derive(Deserialize)]
pub struct RouteParams {
    #[serde(rename = "Orig_s")]
    pub orig_s: String,
    #[serde(rename = "Dest_s")]
    pub dest_s: String,
}

impl RouteParams {
    pub fn route_key(&self) -> Result<RouteKey, InvalidToken> {
        RouteKey::parse(&self.orig_s, &self.dest_s)
    }
}
