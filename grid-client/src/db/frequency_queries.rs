use sqlx::PgPool;
use time::Date;

use crate::db::FetchError;
use crate::domain::{display_date, FreqProfileRow, FrequencyProfile};

const FREQ_PROFILE: &str = "frequency profile";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DerivedFrequencyRow {
    pub data_date: Date,
    pub max_freq: f64,
    pub min_freq: f64,
    pub avg_freq: f64,
    pub below_band_percent: f64,
    pub above_band_percent: f64,
    pub fdi: f64,
}

/// Fetch the daily derived frequency profile for the range and derive the
/// weekly frequency deviation index from it.
pub async fn fetch_derived_frequency(
    pool: &PgPool,
    start: Date,
    end: Date,
) -> Result<FrequencyProfile, FetchError> {
    let rows = sqlx::query_as::<_, DerivedFrequencyRow>(
        r#"
        SELECT
            df.data_date,
            df.max_freq,
            df.min_freq,
            df.avg_freq,
            df.below_band_percent,
            df.above_band_percent,
            df.fdi
        FROM mis_warehouse.derived_frequency df
        WHERE df.data_date BETWEEN $1 AND $2
        ORDER BY df.data_date
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(|e| FetchError::from_sqlx(FREQ_PROFILE, e))?;

    Ok(freq_profile_from_rows(rows))
}

pub(crate) fn freq_profile_from_rows(rows: Vec<DerivedFrequencyRow>) -> FrequencyProfile {
    // Weekly FDI is the mean of the daily indices; -1.0 marks an empty week.
    let weekly_fdi = if rows.is_empty() {
        -1.0
    } else {
        rows.iter().map(|r| r.fdi).sum::<f64>() / rows.len() as f64
    };
    let rows = rows
        .into_iter()
        .map(|r| FreqProfileRow {
            date: display_date(r.data_date),
            max_freq: format!("{:.2}", r.max_freq),
            min_freq: format!("{:.2}", r.min_freq),
            avg_freq: format!("{:.2}", r.avg_freq),
            below_band_percent: format!("{:.2}", r.below_band_percent),
            above_band_percent: format!("{:.2}", r.above_band_percent),
            fdi: format!("{:.2}", r.fdi),
        })
        .collect();
    FrequencyProfile { rows, weekly_fdi }
}
