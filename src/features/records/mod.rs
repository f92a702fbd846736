pub mod model;

use crate::AppState;
use crate::domain::ItineraryRecord;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use model::JsonItineraryRecord;

// data explorer endpoints over the raw preprocessed records
pub fn records_router() -> Router<AppState> {
    Router::new()
        .route("/swiss", get(list_records_handler))
        .route("/swiss/{id}", get(get_record_handler))
}

async fn list_records_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonItineraryRecord>>, StatusCode> {
    let records = state.repo.all_records().await.map_err(|e| {
        eprintln!("Failed to load itinerary records: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(records.iter().map(record_to_json).collect()))
}

async fn get_record_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JsonItineraryRecord>, StatusCode> {
    let record = state.repo.record_by_id(id).await.map_err(|e| {
        eprintln!("Failed to load itinerary record {}: {}", id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match record {
        Some(record) => Ok(Json(record_to_json(&record))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

fn record_to_json(record: &ItineraryRecord) -> JsonItineraryRecord {
    JsonItineraryRecord {
        id: record.id,
        orig: record.orig,
        con1: record.con1,
        con2: record.con2,
        dest: record.dest,
        op_flight1: record.op_flight1,
        op_flight2: record.op_flight2,
        op_flight3: record.op_flight3,
        dep_day: record.dep_day,
        elaptime: record.elapsed_time,
        detour: record.detour,
        arr_day: record.arr_day,
        stops: record.stops,
        paxe: record.paxe,
        cluster: record.cluster,
        tot_pax: record.tot_pax,
        market_share: record.market_share,
        real_dist: record.real_dist,
        total_time: record.total_time,
        connection_time: record.connection_time,
        dep_hour: record.dep_hour,
        arr_hour: record.arr_hour,
    }
}
