use serde::Serialize;

/// One grid code violation message recorded by the operator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IegcViolMsg {
    pub viol_date: String,
    pub viol_time: String,
    pub message: String,
}

/// Angle separation violation summary for one substation pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleViol {
    pub node_pair: String,
    pub viol_count: String,
    pub max_angle: String,
}

/// Pair angle violations split into wide-area and adjacent pairs.
#[derive(Debug, Clone, Default)]
pub struct AngleViolSummary {
    pub wide_viols: Vec<AngleViol>,
    pub adj_viols: Vec<AngleViol>,
}
