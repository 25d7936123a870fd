use sqlx::PgPool;
use time::{Date, PrimitiveDateTime};

use crate::db::FetchError;
use crate::domain::{display_date, display_time, AngleViol, AngleViolSummary, IegcViolMsg};

const IEGC_VIOL_MSGS: &str = "grid code violation messages";
const PAIR_ANGLE_VIOLS: &str = "pair angle violations";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct IegcViolMsgRow {
    pub viol_datetime: PrimitiveDateTime,
    pub message: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PairAngleViolRow {
    pub node_pair: String,
    pub pair_type: String,
    pub viol_count: i64,
    pub max_angle: f64,
}

/// Fetch grid code violation messages recorded inside the report range.
pub async fn fetch_iegc_viol_msgs(
    pool: &PgPool,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
) -> Result<Vec<IegcViolMsg>, FetchError> {
    let rows = sqlx::query_as::<_, IegcViolMsgRow>(
        r#"
        SELECT
            vm.viol_datetime,
            vm.message
        FROM mis_warehouse.iegc_viol_msgs vm
        WHERE vm.viol_datetime BETWEEN $1 AND $2
        ORDER BY vm.viol_datetime
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(IEGC_VIOL_MSGS, e))?;

    Ok(rows.into_iter().map(viol_msg_from_row).collect())
}

/// Fetch angle separation violations aggregated per substation pair over the
/// range, split into wide-area and adjacent pairs.
pub async fn fetch_pair_angle_violations(
    pool: &PgPool,
    start: Date,
    end: Date,
) -> Result<AngleViolSummary, FetchError> {
    let rows = sqlx::query_as::<_, PairAngleViolRow>(
        r#"
        SELECT
            av.node_pair,
            av.pair_type,
            SUM(av.viol_count)::bigint AS viol_count,
            MAX(av.max_angle) AS max_angle
        FROM mis_warehouse.pair_angle_violations av
        WHERE av.data_date BETWEEN $1 AND $2
        GROUP BY av.node_pair, av.pair_type
        ORDER BY av.node_pair
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(PAIR_ANGLE_VIOLS, e))?;

    Ok(angle_summary_from_rows(rows))
}

pub(crate) fn viol_msg_from_row(row: IegcViolMsgRow) -> IegcViolMsg {
    IegcViolMsg {
        viol_date: display_date(row.viol_datetime.date()),
        viol_time: display_time(row.viol_datetime),
        message: row.message,
    }
}

pub(crate) fn angle_summary_from_rows(rows: Vec<PairAngleViolRow>) -> AngleViolSummary {
    let mut summary = AngleViolSummary::default();
    for row in rows {
        let display = AngleViol {
            node_pair: row.node_pair,
            viol_count: row.viol_count.to_string(),
            max_angle: format!("{:.1}", row.max_angle),
        };
        match row.pair_type.as_str() {
            "WIDE" => summary.wide_viols.push(display),
            "ADJACENT" => summary.adj_viols.push(display),
            // Unknown pair classes are not part of the report.
            _ => {}
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn violation_message_splits_date_and_time() {
        let msg = viol_msg_from_row(IegcViolMsgRow {
            viol_datetime: datetime!(2023-01-04 18:42:00),
            message: "Frequency below band for more than 15 minutes".to_string(),
        });
        assert_eq!(msg.viol_date, "04-01-2023");
        assert_eq!(msg.viol_time, "18:42");
    }

    #[test]
    fn angle_violations_split_wide_and_adjacent_pairs() {
        let mk = |pair: &str, pair_type: &str| PairAngleViolRow {
            node_pair: pair.to_string(),
            pair_type: pair_type.to_string(),
            viol_count: 3,
            max_angle: 32.74,
        };
        let summary = angle_summary_from_rows(vec![
            mk("AGRA-GWALIOR", "ADJACENT"),
            mk("AGRA-RAIPUR", "WIDE"),
            mk("AGRA-NOWHERE", "OTHER"),
        ]);
        assert_eq!(summary.wide_viols.len(), 1);
        assert_eq!(summary.wide_viols[0].node_pair, "AGRA-RAIPUR");
        assert_eq!(summary.wide_viols[0].viol_count, "3");
        assert_eq!(summary.wide_viols[0].max_angle, "32.7");
        assert_eq!(summary.adj_viols.len(), 1);
    }
}
