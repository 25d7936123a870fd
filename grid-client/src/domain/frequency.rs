use serde::Serialize;

/// One day of the derived frequency profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreqProfileRow {
    pub date: String,
    pub max_freq: String,
    pub min_freq: String,
    pub avg_freq: String,
    pub below_band_percent: String,
    pub above_band_percent: String,
    pub fdi: String,
}

/// Weekly frequency profile: daily rows plus the frequency deviation index
/// derived over the whole week. `weekly_fdi` is -1.0 when the warehouse
/// returned no rows for the range.
#[derive(Debug, Clone)]
pub struct FrequencyProfile {
    pub rows: Vec<FreqProfileRow>,
    pub weekly_fdi: f64,
}
