/// The full flat itinerary record as loaded from the preprocessed data set.
/// Encoded city ids (orig/dest/con1/con2) sit alongside the string codes that
/// the lookup endpoints filter on.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRecord {
    pub id: i64,
    pub orig: i64,
    pub con1: i64,
    pub con2: i64,
    pub dest: i64,
    pub op_flight1: i64,
    pub op_flight2: i64,
    pub op_flight3: i64,
    pub dep_day: i64,
    pub elapsed_time: f64,
    pub detour: f64,
    pub arr_day: i64,
    pub stops: i64,
    pub paxe: f64,
    pub cluster: f64,
    pub tot_pax: f64,
    pub market_share: f64,
    pub real_dist: f64,
    pub total_time: f64,
    pub connection_time: i64,
    pub dep_hour: i64,
    pub arr_hour: i64,
}
