use serde::Serialize;

/// One ICT operating constraint from the latest published snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IctConstraint {
    pub ict: String,
    pub season: String,
    pub description: String,
}

/// One transmission corridor constraint from the latest published snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransConstraint {
    pub corridor: String,
    pub season: String,
    pub description: String,
}
