use serde::{Deserialize, Serialize};

// the flat record as the original data explorer serialized it, mixed-case
// names included
#[derive(Serialize, Deserialize)]
pub struct JsonItineraryRecord {
    pub id: i64,
    #[serde(rename = "Orig")]
    pub orig: i64,
    pub con1: i64,
    pub con2: i64,
    #[serde(rename = "Dest")]
    pub dest: i64,
    pub op_flight1: i64,
    pub op_flight2: i64,
    pub op_flight3: i64,
    #[serde(rename = "depDay")]
    pub dep_day: i64,
    pub elaptime: f64,
    pub detour: f64,
    #[serde(rename = "arrDay")]
    pub arr_day: i64,
    pub stops: i64,
    pub paxe: f64,
    pub cluster: f64,
    #[serde(rename = "TOT_pax")]
    pub tot_pax: f64,
    pub market_share: f64,
    pub real_dist: f64,
    pub total_time: f64,
    pub connection_time: i64,
    pub dep_hour: i64,
    pub arr_hour: i64,
}
