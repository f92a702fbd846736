/// Passenger forecast for the strongest option on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteForecast {
    pub tot_pax: f64,
    pub accuracy: f64,
}

/// Routing details for the strongest option on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDetails {
    pub detour: f64,
    pub stops: i64,
    pub real_dist: f64,
}
