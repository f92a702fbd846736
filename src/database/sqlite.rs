use crate::database::ItineraryRepository;
use crate::domain::{
    ItineraryOption, ItineraryRecord, RouteDetails, RouteForecast, RouteKey, RouteToken,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

// row shapes for sqlx, translated into the pure domain types below.
// column names match the migration schema, so FromRow maps by name.

#[derive(sqlx::FromRow)]
struct OptionRow {
    dep_hour: i64,
    arr_hour: i64,
    elaptime: f64,
    market_share: f64,
}

impl From<OptionRow> for ItineraryOption {
    fn from(row: OptionRow) -> Self {
        ItineraryOption {
            dep_hour: row.dep_hour,
            arr_hour: row.arr_hour,
            elapsed_time: row.elaptime,
            market_share: row.market_share,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ForecastRow {
    tot_pax: f64,
    accuracy: f64,
}

impl From<ForecastRow> for RouteForecast {
    fn from(row: ForecastRow) -> Self {
        RouteForecast {
            tot_pax: row.tot_pax,
            accuracy: row.accuracy,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DetailsRow {
    detour: f64,
    stops: i64,
    real_dist: f64,
}

impl From<DetailsRow> for RouteDetails {
    fn from(row: DetailsRow) -> Self {
        RouteDetails {
            detour: row.detour,
            stops: row.stops,
            real_dist: row.real_dist,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    orig: i64,
    con1: i64,
    con2: i64,
    dest: i64,
    op_flight1: i64,
    op_flight2: i64,
    op_flight3: i64,
    dep_day: i64,
    elaptime: f64,
    detour: f64,
    arr_day: i64,
    stops: i64,
    paxe: f64,
    cluster: f64,
    tot_pax: f64,
    market_share: f64,
    real_dist: f64,
    total_time: f64,
    connection_time: i64,
    dep_hour: i64,
    arr_hour: i64,
}

impl From<RecordRow> for ItineraryRecord {
    fn from(row: RecordRow) -> Self {
        ItineraryRecord {
            id: row.id,
            orig: row.orig,
            con1: row.con1,
            con2: row.con2,
            dest: row.dest,
            op_flight1: row.op_flight1,
            op_flight2: row.op_flight2,
            op_flight3: row.op_flight3,
            dep_day: row.dep_day,
            elapsed_time: row.elaptime,
            detour: row.detour,
            arr_day: row.arr_day,
            stops: row.stops,
            paxe: row.paxe,
            cluster: row.cluster,
            tot_pax: row.tot_pax,
            market_share: row.market_share,
            real_dist: row.real_dist,
            total_time: row.total_time,
            connection_time: row.connection_time,
            dep_hour: row.dep_hour,
            arr_hour: row.arr_hour,
        }
    }
}

const RECORD_COLUMNS: &str = r#"
    id, orig, con1, con2, dest,
    op_flight1, op_flight2, op_flight3,
    dep_day, elaptime, detour, arr_day, stops,
    paxe, cluster, tot_pax, market_share, real_dist,
    total_time, connection_time, dep_hour, arr_hour
"#;

#[async_trait]
impl ItineraryRepository for SqliteRepository {
    async fn departure_days(&self) -> Result<Vec<i64>> {
        sqlx::query_scalar::<_, i64>("SELECT DISTINCT dep_day FROM itinerary_input")
            .fetch_all(&self.pool)
            .await
            .context("Failed to query departure days")
    }

    async fn origins(&self) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT orig_code FROM itinerary_input")
            .fetch_all(&self.pool)
            .await
            .context("Failed to query origin codes")
    }

    async fn destinations_for_origin(&self, origin: &RouteToken) -> Result<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT dest_code FROM itinerary_input WHERE orig_code = ?",
        )
        .bind(origin.as_str())
        .fetch_all(&self.pool)
        .await
        .context(format!("Failed to query destinations for {}", origin))
    }

    async fn map_origin(&self, origin: &RouteToken) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT m.orig_code
            FROM map m
            JOIN itinerary_input ii ON m.itinerary_input_id = ii.id
            WHERE ii.orig_code = ?
            "#,
        )
        .bind(origin.as_str())
        .fetch_optional(&self.pool)
        .await
        .context(format!("Failed to query map origin for {}", origin))
    }

    async fn map_destination(&self, destination: &RouteToken) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT m.dest_code
            FROM map m
            JOIN itinerary_input ii ON m.itinerary_input_id = ii.id
            WHERE ii.dest_code = ?
            "#,
        )
        .bind(destination.as_str())
        .fetch_optional(&self.pool)
        .await
        .context(format!("Failed to query map destination for {}", destination))
    }

    async fn market_shares(&self, route: &RouteKey) -> Result<Vec<f64>> {
        sqlx::query_scalar::<_, f64>(
            r#"
            SELECT ms.market_share
            FROM marketshare ms
            JOIN itinerary_input ii ON ms.itinerary_input_id = ii.id
            WHERE ii.orig_code = ? AND ii.dest_code = ?
            "#,
        )
        .bind(route.origin.as_str())
        .bind(route.destination.as_str())
        .fetch_all(&self.pool)
        .await
        .context("Failed to query market shares")
    }

    async fn options_for_route(&self, route: &RouteKey) -> Result<Vec<ItineraryOption>> {
        // marketshare rows share their ids with recommendation rows, which is
        // how the preprocessed data set links the two tables
        let rows = sqlx::query_as::<_, OptionRow>(
            r#"
            SELECT r.dep_hour, r.arr_hour, r.elaptime, m.market_share
            FROM recommendation r
            JOIN itinerary_input ii ON r.itinerary_input_id = ii.id
            JOIN marketshare m ON m.id = r.id
            WHERE ii.orig_code = ? AND ii.dest_code = ?
            "#,
        )
        .bind(route.origin.as_str())
        .bind(route.destination.as_str())
        .fetch_all(&self.pool)
        .await
        .context("Failed to query itinerary options")?;

        Ok(rows.into_iter().map(ItineraryOption::from).collect())
    }

    async fn best_forecast(&self, route: &RouteKey) -> Result<Option<RouteForecast>> {
        let row = sqlx::query_as::<_, ForecastRow>(
            r#"
            SELECT r.tot_pax, r.accuracy
            FROM result r
            INNER JOIN marketshare m ON r.marketshare_id = m.id
            INNER JOIN itinerary_input i ON r.id = i.id
            WHERE i.orig_code = ? AND i.dest_code = ?
            ORDER BY m.market_share DESC
            LIMIT 1
            "#,
        )
        .bind(route.origin.as_str())
        .bind(route.destination.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to query route forecast")?;

        Ok(row.map(RouteForecast::from))
    }

    async fn best_route_details(&self, route: &RouteKey) -> Result<Option<RouteDetails>> {
        let row = sqlx::query_as::<_, DetailsRow>(
            r#"
            SELECT o.detour, o.stops, o.real_dist
            FROM other_info o
            INNER JOIN marketshare m ON o.marketshare_id = m.id
            INNER JOIN itinerary_input i ON o.id = i.id
            WHERE i.orig_code = ? AND i.dest_code = ?
            ORDER BY m.market_share DESC
            LIMIT 1
            "#,
        )
        .bind(route.origin.as_str())
        .bind(route.destination.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to query route details")?;

        Ok(row.map(RouteDetails::from))
    }

    async fn all_records(&self) -> Result<Vec<ItineraryRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM itinerary_input",
            RECORD_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to query itinerary records")?;

        Ok(rows.into_iter().map(ItineraryRecord::from).collect())
    }

    async fn record_by_id(&self, id: i64) -> Result<Option<ItineraryRecord>> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM itinerary_input WHERE id = ?",
            RECORD_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(format!("Failed to query itinerary record {}", id))?;

        Ok(row.map(ItineraryRecord::from))
    }
}
