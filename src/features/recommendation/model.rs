use serde::{Deserialize, Serialize};

// field names are the recommendation component's wire contract
#[derive(Serialize, Deserialize)]
pub struct JsonRecommendation {
    #[serde(rename = "Dephours")]
    pub dep_hours: i64,
    #[serde(rename = "Arrhours")]
    pub arr_hours: i64,
    #[serde(rename = "Elptime")]
    pub elapsed_time: f64,
    #[serde(rename = "Option")]
    pub option: String,
}
