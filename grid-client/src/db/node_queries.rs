use sqlx::PgPool;
use time::Date;

use crate::db::FetchError;
use crate::domain::{HvNodeInfo, LvNodeInfo};

const HV_NODES: &str = "high voltage nodes";
const LV_NODES: &str = "low voltage nodes";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HvNodeRow {
    pub node_name: String,
    pub voltage_level: i32,
    pub max_voltage: f64,
    pub above_band_hours: f64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LvNodeRow {
    pub node_name: String,
    pub voltage_level: i32,
    pub min_voltage: f64,
    pub below_band_hours: f64,
}

/// Fetch nodes that spent time above their voltage band during the range.
pub async fn fetch_hv_nodes_info(
    pool: &PgPool,
    start: Date,
    end: Date,
) -> Result<Vec<HvNodeInfo>, FetchError> {
    let rows = sqlx::query_as::<_, HvNodeRow>(
        r#"
        SELECT
            np.node_name,
            np.voltage_level,
            MAX(np.max_voltage) AS max_voltage,
            SUM(np.above_band_hours) AS above_band_hours
        FROM mis_warehouse.node_voltage_profile np
        WHERE np.data_date BETWEEN $1 AND $2
        GROUP BY np.node_name, np.voltage_level
        HAVING SUM(np.above_band_hours) > 0
        ORDER BY np.voltage_level DESC, np.node_name
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(HV_NODES, e))?;

    Ok(rows.into_iter().map(hv_node_from_row).collect())
}

/// Fetch nodes that spent time below their voltage band during the range.
pub async fn fetch_lv_nodes_info(
    pool: &PgPool,
    start: Date,
    end: Date,
) -> Result<Vec<LvNodeInfo>, FetchError> {
    let rows = sqlx::query_as::<_, LvNodeRow>(
        r#"
        SELECT
            np.node_name,
            np.voltage_level,
            MIN(np.min_voltage) AS min_voltage,
            SUM(np.below_band_hours) AS below_band_hours
        FROM mis_warehouse.node_voltage_profile np
        WHERE np.data_date BETWEEN $1 AND $2
        GROUP BY np.node_name, np.voltage_level
        HAVING SUM(np.below_band_hours) > 0
        ORDER BY np.voltage_level DESC, np.node_name
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(LV_NODES, e))?;

    Ok(rows.into_iter().map(lv_node_from_row).collect())
}

pub(crate) fn hv_node_from_row(row: HvNodeRow) -> HvNodeInfo {
    HvNodeInfo {
        node: row.node_name,
        voltage_level: row.voltage_level.to_string(),
        max_voltage: format!("{:.1}", row.max_voltage),
        above_band_hours: format!("{:.1}", row.above_band_hours),
    }
}

pub(crate) fn lv_node_from_row(row: LvNodeRow) -> LvNodeInfo {
    LvNodeInfo {
        node: row.node_name,
        voltage_level: row.voltage_level.to_string(),
        min_voltage: format!("{:.1}", row.min_voltage),
        below_band_hours: format!("{:.1}", row.below_band_hours),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hv_node_formats_voltage_and_hours() {
        let node = hv_node_from_row(HvNodeRow {
            node_name: "AGRA".to_string(),
            voltage_level: 765,
            max_voltage: 803.62,
            above_band_hours: 12.56,
        });
        assert_eq!(node.node, "AGRA");
        assert_eq!(node.voltage_level, "765");
        assert_eq!(node.max_voltage, "803.6");
        assert_eq!(node.above_band_hours, "12.6");
    }

    #[test]
    fn lv_node_formats_voltage_and_hours() {
        let node = lv_node_from_row(LvNodeRow {
            node_name: "KANPUR".to_string(),
            voltage_level: 400,
            min_voltage: 372.18,
            below_band_hours: 6.04,
        });
        assert_eq!(node.voltage_level, "400");
        assert_eq!(node.min_voltage, "372.2");
        assert_eq!(node.below_band_hours, "6.0");
    }
}
