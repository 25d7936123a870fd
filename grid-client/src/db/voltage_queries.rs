use sqlx::PgPool;
use time::Date;

use crate::db::FetchError;
use crate::domain::{StationwiseVdi, VdiRow, VoltStats, VoltStatsRow};

const STATIONWISE_VDI: &str = "stationwise VDI";
const VOLTAGE_STATS: &str = "voltage statistics";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StationwiseVdiRow {
    pub station_name: String,
    pub voltage_level: i32,
    pub vdi: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DerivedVoltageRow {
    pub station_name: String,
    pub voltage_level: i32,
    pub max_voltage: f64,
    pub min_voltage: f64,
    pub below_band_percent: f64,
    pub above_band_percent: f64,
}

/// Fetch the per-station voltage deviation index snapshot for the week
/// starting at the given Monday. The warehouse stores VDI per week, so this
/// fetcher keys on the week start instead of a range.
pub async fn fetch_weekly_vdi(pool: &PgPool, week_start: Date) -> Result<StationwiseVdi, FetchError> {
    let rows = sqlx::query_as::<_, StationwiseVdiRow>(
        r#"
        SELECT
            sv.station_name,
            sv.voltage_level,
            sv.vdi
        FROM mis_warehouse.stationwise_vdi sv
        WHERE sv.week_start_date = $1
        ORDER BY sv.station_name
        "#,
    )
    .bind(week_start)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(STATIONWISE_VDI, e))?;

    Ok(vdi_from_rows(rows))
}

/// Fetch per-station voltage statistics aggregated over the range, bucketed
/// into the four report tables by nominal voltage level.
pub async fn fetch_derived_voltage_stats(
    pool: &PgPool,
    start: Date,
    end: Date,
) -> Result<VoltStats, FetchError> {
    let rows = sqlx::query_as::<_, DerivedVoltageRow>(
        r#"
        SELECT
            dv.station_name,
            dv.voltage_level,
            MAX(dv.max_voltage) AS max_voltage,
            MIN(dv.min_voltage) AS min_voltage,
            AVG(dv.below_band_percent) AS below_band_percent,
            AVG(dv.above_band_percent) AS above_band_percent
        FROM mis_warehouse.derived_voltage dv
        WHERE dv.data_date BETWEEN $1 AND $2
        GROUP BY dv.station_name, dv.voltage_level
        ORDER BY dv.voltage_level DESC, dv.station_name
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(VOLTAGE_STATS, e))?;

    Ok(volt_stats_from_rows(rows))
}

pub(crate) fn vdi_from_rows(rows: Vec<StationwiseVdiRow>) -> StationwiseVdi {
    let mut vdi = StationwiseVdi::default();
    for row in rows {
        let display = VdiRow {
            station: row.station_name,
            vdi: format!("{:.2}", row.vdi),
        };
        match row.voltage_level {
            765 => vdi.vdi765_rows.push(display),
            400 => vdi.vdi400_rows.push(display),
            // The report only carries the 765 kV and 400 kV VDI tables.
            _ => {}
        }
    }
    vdi
}

pub(crate) fn volt_stats_from_rows(rows: Vec<DerivedVoltageRow>) -> VoltStats {
    let mut stats = VoltStats::default();
    for row in rows {
        let display = VoltStatsRow {
            station: row.station_name,
            max_voltage: format!("{:.1}", row.max_voltage),
            min_voltage: format!("{:.1}", row.min_voltage),
            below_band_percent: format!("{:.2}", row.below_band_percent),
            above_band_percent: format!("{:.2}", row.above_band_percent),
        };
        match row.voltage_level {
            765 => stats.table1.push(display),
            400 => stats.table2.push(display),
            220 => stats.table3.push(display),
            _ => stats.table4.push(display),
        }
    }
    stats
}
