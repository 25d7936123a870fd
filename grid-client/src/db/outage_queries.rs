use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::FetchError;
use crate::domain::{
    compose_reason, display_capacity, display_date, display_time, Outage, STILL_OUT,
};

const GEN_UNIT_OUTAGES: &str = "generating unit outages";
const TRANS_EL_OUTAGES: &str = "transmission element outages";
const LONG_TIME_OUTAGES: &str = "long time unrevived outages";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OutageEventRow {
    pub element_name: String,
    pub owners: Option<String>,
    pub capacity: Option<f64>,
    pub outage_datetime: PrimitiveDateTime,
    pub revived_datetime: Option<PrimitiveDateTime>,
    pub outage_remarks: Option<String>,
    pub reason: Option<String>,
    pub shutdown_tag: Option<String>,
}

/// Fetch major generating unit outages touching the report range: the outage
/// began inside the range, began earlier and is still unrevived, or the range
/// start falls inside the outage interval.
pub async fn fetch_major_gen_unit_outages(
    pool: &PgPool,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
) -> Result<Vec<Outage>, FetchError> {
    let rows = sqlx::query_as::<_, OutageEventRow>(
        r#"
        SELECT
            oe.element_name,
            oe.owners,
            oe.capacity,
            oe.outage_datetime,
            oe.revived_datetime,
            oe.outage_remarks,
            oe.reason,
            oe.shutdown_tag
        FROM mis_warehouse.outage_events oe
        WHERE oe.entity_name = 'GENERATING_UNIT'
          AND (
                (oe.outage_datetime BETWEEN $1 AND $2)
             OR (oe.outage_datetime < $2 AND oe.revived_datetime IS NULL)
             OR ($1 BETWEEN oe.outage_datetime AND oe.revived_datetime)
          )
        ORDER BY oe.outage_datetime
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(GEN_UNIT_OUTAGES, e))?;

    Ok(rows.into_iter().map(outage_from_row).collect())
}

/// Fetch transmission element outages touching the report range, with the same
/// overlap predicate as generating units.
pub async fn fetch_trans_element_outages(
    pool: &PgPool,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
) -> Result<Vec<Outage>, FetchError> {
    let rows = sqlx::query_as::<_, OutageEventRow>(
        r#"
        SELECT
            oe.element_name,
            oe.owners,
            oe.capacity,
            oe.outage_datetime,
            oe.revived_datetime,
            oe.outage_remarks,
            oe.reason,
            oe.shutdown_tag
        FROM mis_warehouse.outage_events oe
        WHERE oe.entity_name = 'TRANSMISSION_ELEMENT'
          AND (
                (oe.outage_datetime BETWEEN $1 AND $2)
             OR (oe.outage_datetime < $2 AND oe.revived_datetime IS NULL)
             OR ($1 BETWEEN oe.outage_datetime AND oe.revived_datetime)
          )
        ORDER BY oe.outage_datetime
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(TRANS_EL_OUTAGES, e))?;

    Ok(rows.into_iter().map(outage_from_row).collect())
}

/// Fetch forced transmission element outages that are still unrevived at the
/// end of the range and have been outstanding for more than six months before
/// its start.
pub async fn fetch_long_time_unrevived_outages(
    pool: &PgPool,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
) -> Result<Vec<Outage>, FetchError> {
    let rows = sqlx::query_as::<_, OutageEventRow>(
        r#"
        SELECT
            oe.element_name,
            oe.owners,
            oe.capacity,
            oe.outage_datetime,
            oe.revived_datetime,
            oe.outage_remarks,
            oe.reason,
            oe.shutdown_tag
        FROM mis_warehouse.outage_events oe
        WHERE oe.entity_name = 'TRANSMISSION_ELEMENT'
          AND oe.shutdown_typename = 'FORCED'
          AND oe.revived_datetime IS NULL
          AND oe.outage_datetime < $1 - INTERVAL '6 months'
          AND oe.outage_datetime <= $2
        ORDER BY oe.outage_datetime
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(LONG_TIME_OUTAGES, e))?;

    Ok(rows.into_iter().map(outage_from_row).collect())
}

pub(crate) fn outage_from_row(row: OutageEventRow) -> Outage {
    let (revival_date, revival_time) = match row.revived_datetime {
        Some(revived) => (display_date(revived.date()), display_time(revived)),
        None => (STILL_OUT.to_string(), STILL_OUT.to_string()),
    };
    Outage {
        unit_name: row.element_name,
        owners: row.owners.unwrap_or_default(),
        capacity: display_capacity(row.capacity),
        outage_date: display_date(row.outage_datetime.date()),
        outage_time: display_time(row.outage_datetime),
        revival_date,
        revival_time,
        reason: compose_reason(
            row.shutdown_tag.as_deref(),
            row.reason.as_deref(),
            row.outage_remarks.as_deref(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn row() -> OutageEventRow {
        OutageEventRow {
            element_name: "STAGE1 UNIT2".to_string(),
            owners: Some("NTPC".to_string()),
            capacity: Some(500.0),
            outage_datetime: datetime!(2023-01-03 14:25:00),
            revived_datetime: Some(datetime!(2023-01-05 09:10:00)),
            outage_remarks: Some("Tube leakage".to_string()),
            reason: Some("Boiler".to_string()),
            shutdown_tag: Some("Outage".to_string()),
        }
    }

    #[test]
    fn revived_outage_formats_both_timestamps() {
        let otg = outage_from_row(row());
        assert_eq!(otg.outage_date, "03-01-2023");
        assert_eq!(otg.outage_time, "14:25");
        assert_eq!(otg.revival_date, "05-01-2023");
        assert_eq!(otg.revival_time, "09:10");
        assert_eq!(otg.capacity, "500");
    }

    #[test]
    fn unrevived_outage_uses_the_still_out_sentinel() {
        let mut r = row();
        r.revived_datetime = None;
        let otg = outage_from_row(r);
        assert_eq!(otg.revival_date, STILL_OUT);
        assert_eq!(otg.revival_time, STILL_OUT);
    }

    #[test]
    fn reason_drops_generic_tag_and_joins_the_rest() {
        let otg = outage_from_row(row());
        assert_eq!(otg.reason, "Boiler / Tube leakage");
    }

    #[test]
    fn missing_owner_becomes_empty_string() {
        let mut r = row();
        r.owners = None;
        assert_eq!(outage_from_row(r).owners, "");
    }
}
