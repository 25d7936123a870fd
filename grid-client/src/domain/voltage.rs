use serde::Serialize;

/// Per-station voltage deviation index for one week.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VdiRow {
    pub station: String,
    pub vdi: String,
}

/// Weekly VDI split by nominal voltage level.
#[derive(Debug, Clone, Default)]
pub struct StationwiseVdi {
    pub vdi400_rows: Vec<VdiRow>,
    pub vdi765_rows: Vec<VdiRow>,
}

/// Per-station voltage statistics aggregated over the report range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltStatsRow {
    pub station: String,
    pub max_voltage: String,
    pub min_voltage: String,
    pub below_band_percent: String,
    pub above_band_percent: String,
}

/// Voltage statistics bucketed into the four report tables by nominal level:
/// 765 kV, 400 kV, 220 kV, and everything below.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VoltStats {
    pub table1: Vec<VoltStatsRow>,
    pub table2: Vec<VoltStatsRow>,
    pub table3: Vec<VoltStatsRow>,
    pub table4: Vec<VoltStatsRow>,
}
