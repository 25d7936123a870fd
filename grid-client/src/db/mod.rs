pub mod constraint_queries;
pub mod frequency_queries;
pub mod node_queries;
pub mod outage_queries;
pub mod violation_queries;
pub mod voltage_queries;

pub use constraint_queries::{fetch_ict_constraints, fetch_transmission_constraints};
pub use frequency_queries::fetch_derived_frequency;
pub use node_queries::{fetch_hv_nodes_info, fetch_lv_nodes_info};
pub use outage_queries::{
    fetch_long_time_unrevived_outages, fetch_major_gen_unit_outages, fetch_trans_element_outages,
};
pub use violation_queries::{fetch_iegc_viol_msgs, fetch_pair_angle_violations};
pub use voltage_queries::{fetch_derived_voltage_stats, fetch_weekly_vdi};

/// Failure of a single report category fetch. Every variant names the category
/// so the orchestrator can report exactly which section of the report failed.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("{category} fetch failed: {source}")]
    Query {
        category: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{category} result set did not match the expected columns: {source}")]
    SchemaMismatch {
        category: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl FetchError {
    /// Report category this error belongs to.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Query { category, .. } | Self::SchemaMismatch { category, .. } => category,
        }
    }

    /// A result set missing an expected column (or carrying an unexpected
    /// type) is a schema mismatch, not a query failure. It must surface as
    /// its own error rather than degrade to an empty section.
    pub(crate) fn from_sqlx(category: &'static str, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. } => {
                Self::SchemaMismatch { category, source }
            }
            _ => Self::Query { category, source },
        }
    }
}
