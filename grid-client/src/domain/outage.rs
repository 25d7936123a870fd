use serde::Serialize;

/// One generating unit or transmission element outage, ready for the report
/// template. Date and time fields are display strings fixed at fetch time;
/// unrevived outages carry the `Still out` sentinel in both revival fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outage {
    pub unit_name: String,
    pub owners: String,
    pub capacity: String,
    pub outage_date: String,
    pub outage_time: String,
    pub revival_date: String,
    pub revival_time: String,
    pub reason: String,
}
