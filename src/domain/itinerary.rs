use derive_more::derive::Display;

/// One itinerary candidate for an origin/destination pair.
/// Hours are opaque numerics straight from the data set, no range is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryOption {
    pub dep_hour: i64,
    pub arr_hour: i64,
    pub elapsed_time: f64,
    pub market_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Decision {
    Create,
    Cancel,
}

/// An option after ranking: the original fields, untouched, plus the decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedOption {
    pub dep_hour: i64,
    pub arr_hour: i64,
    pub elapsed_time: f64,
    pub market_share: f64,
    pub decision: Decision,
}
