pub mod constraint;
pub mod display;
pub mod frequency;
pub mod node;
pub mod outage;
pub mod violation;
pub mod voltage;

pub use constraint::{IctConstraint, TransConstraint};
pub use display::{compose_reason, display_capacity, display_date, display_time, report_date, STILL_OUT};
pub use frequency::{FreqProfileRow, FrequencyProfile};
pub use node::{HvNodeInfo, LvNodeInfo};
pub use outage::Outage;
pub use violation::{AngleViol, AngleViolSummary, IegcViolMsg};
pub use voltage::{StationwiseVdi, VdiRow, VoltStats, VoltStatsRow};
