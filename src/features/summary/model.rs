use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonForecast {
    #[serde(rename = "TOT_pax")]
    pub tot_pax: f64,
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRouteDetails {
    #[serde(rename = "Detour")]
    pub detour: f64,
    #[serde(rename = "Stops")]
    pub stops: i64,
    #[serde(rename = "Distance")]
    pub distance: f64,
}
