use serde::Serialize;

/// A node that sustained high voltage during the report range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HvNodeInfo {
    pub node: String,
    pub voltage_level: String,
    pub max_voltage: String,
    pub above_band_hours: String,
}

/// A node that sustained low voltage during the report range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LvNodeInfo {
    pub node: String,
    pub voltage_level: String,
    pub min_voltage: String,
    pub below_band_hours: String,
}
