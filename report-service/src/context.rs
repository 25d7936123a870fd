use serde::Serialize;
use sqlx::PgPool;
use time::macros::time;
use time::{Date, PrimitiveDateTime, Time};

use grid_client::db::{
    constraint_queries, frequency_queries, node_queries, outage_queries, violation_queries,
    voltage_queries,
};
use grid_client::domain::{
    report_date, AngleViol, FreqProfileRow, HvNodeInfo, IctConstraint, IegcViolMsg, LvNodeInfo,
    Outage, TransConstraint, VdiRow, VoltStats,
};

use crate::error::ReportError;
use crate::fin_year;

/// Aggregate context handed to the report template. Field names serialize to
/// the exact placeholder names the template binds, and every list is always
/// present so rendering can never fail on a missing key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    pub start_dt: String,
    pub end_dt: String,
    pub wk_num: u32,
    pub fin_yr: String,
    pub gen_otgs: Vec<Outage>,
    pub trans_otgs: Vec<Outage>,
    pub long_time_otgs: Vec<Outage>,
    pub freq_prof_rows: Vec<FreqProfileRow>,
    pub weekly_fdi: String,
    pub vdi400_rows: Vec<VdiRow>,
    pub vdi765_rows: Vec<VdiRow>,
    pub volt_stats: VoltStats,
    pub viol_msgs: Vec<IegcViolMsg>,
    pub wide_viols: Vec<AngleViol>,
    pub adj_viols: Vec<AngleViol>,
    pub ict_cons: Vec<IctConstraint>,
    pub trans_cons: Vec<TransConstraint>,
    pub hv_nodes: Vec<HvNodeInfo>,
    pub lv_nodes: Vec<LvNodeInfo>,
}

impl ReportContext {
    /// Context with the derived scalars computed and every section empty.
    pub fn new(start: Date, end: Date) -> Self {
        let fin_year = fin_year::fin_year_for_date(start);
        Self {
            start_dt: report_date(start),
            end_dt: report_date(end),
            wk_num: fin_year::week_num_of_fin_year(start),
            fin_yr: fin_year::fin_year_label(fin_year),
            gen_otgs: Vec::new(),
            trans_otgs: Vec::new(),
            long_time_otgs: Vec::new(),
            freq_prof_rows: Vec::new(),
            weekly_fdi: format_fdi(-1.0),
            vdi400_rows: Vec::new(),
            vdi765_rows: Vec::new(),
            volt_stats: VoltStats::default(),
            viol_msgs: Vec::new(),
            wide_viols: Vec::new(),
            adj_viols: Vec::new(),
            ict_cons: Vec::new(),
            trans_cons: Vec::new(),
            hv_nodes: Vec::new(),
            lv_nodes: Vec::new(),
        }
    }
}

fn format_fdi(fdi: f64) -> String {
    format!("{fdi:.2}")
}

/// Assemble the weekly report context by running every category fetch once,
/// in sequence, against the warehouse. The first failing fetch aborts the run
/// with the failing category named; sections are never silently left empty.
pub async fn assemble(pool: &PgPool, start: Date, end: Date) -> Result<ReportContext, ReportError> {
    // Event queries bind the full range, start of day through end of day.
    let start_dt = PrimitiveDateTime::new(start, Time::MIDNIGHT);
    let end_dt = PrimitiveDateTime::new(end, time!(23:59:59));

    let mut cxt = ReportContext::new(start, end);

    cxt.gen_otgs = outage_queries::fetch_major_gen_unit_outages(pool, start_dt, end_dt).await?;
    tracing::info!(rows = cxt.gen_otgs.len(), "fetched generating unit outages");

    cxt.trans_otgs = outage_queries::fetch_trans_element_outages(pool, start_dt, end_dt).await?;
    tracing::info!(rows = cxt.trans_otgs.len(), "fetched transmission element outages");

    cxt.long_time_otgs =
        outage_queries::fetch_long_time_unrevived_outages(pool, start_dt, end_dt).await?;
    tracing::info!(rows = cxt.long_time_otgs.len(), "fetched long time unrevived outages");

    let freq_profile = frequency_queries::fetch_derived_frequency(pool, start, end).await?;
    cxt.weekly_fdi = format_fdi(freq_profile.weekly_fdi);
    cxt.freq_prof_rows = freq_profile.rows;
    tracing::info!(rows = cxt.freq_prof_rows.len(), "fetched frequency profile");

    let vdi = voltage_queries::fetch_weekly_vdi(pool, fin_year::monday_on_or_before(start)).await?;
    cxt.vdi400_rows = vdi.vdi400_rows;
    cxt.vdi765_rows = vdi.vdi765_rows;
    tracing::info!(
        rows_400 = cxt.vdi400_rows.len(),
        rows_765 = cxt.vdi765_rows.len(),
        "fetched stationwise VDI"
    );

    cxt.volt_stats = voltage_queries::fetch_derived_voltage_stats(pool, start, end).await?;
    tracing::info!("fetched voltage statistics");

    cxt.viol_msgs = violation_queries::fetch_iegc_viol_msgs(pool, start_dt, end_dt).await?;
    tracing::info!(rows = cxt.viol_msgs.len(), "fetched grid code violation messages");

    let angle_viols = violation_queries::fetch_pair_angle_violations(pool, start, end).await?;
    cxt.wide_viols = angle_viols.wide_viols;
    cxt.adj_viols = angle_viols.adj_viols;
    tracing::info!(
        wide = cxt.wide_viols.len(),
        adjacent = cxt.adj_viols.len(),
        "fetched pair angle violations"
    );

    cxt.ict_cons = constraint_queries::fetch_ict_constraints(pool).await?;
    tracing::info!(rows = cxt.ict_cons.len(), "fetched ICT constraints");

    cxt.trans_cons = constraint_queries::fetch_transmission_constraints(pool).await?;
    tracing::info!(rows = cxt.trans_cons.len(), "fetched transmission constraints");

    cxt.hv_nodes = node_queries::fetch_hv_nodes_info(pool, start, end).await?;
    tracing::info!(rows = cxt.hv_nodes.len(), "fetched high voltage nodes");

    cxt.lv_nodes = node_queries::fetch_lv_nodes_info(pool, start, end).await?;
    tracing::info!(rows = cxt.lv_nodes.len(), "fetched low voltage nodes");

    Ok(cxt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn scalars_for_the_first_january_week() {
        let cxt = ReportContext::new(date!(2023 - 01 - 02), date!(2023 - 01 - 08));
        assert_eq!(cxt.start_dt, "02-Jan-2023");
        assert_eq!(cxt.end_dt, "08-Jan-2023");
        assert_eq!(cxt.wk_num, 40);
        assert_eq!(cxt.fin_yr, "2022-23");
        assert_eq!(cxt.weekly_fdi, "-1.00");
    }

    #[test]
    fn every_template_key_is_present_even_when_empty() {
        let cxt = ReportContext::new(date!(2023 - 01 - 02), date!(2023 - 01 - 08));
        let value = serde_json::to_value(&cxt).unwrap();
        for key in [
            "startDt",
            "endDt",
            "wkNum",
            "finYr",
            "genOtgs",
            "transOtgs",
            "longTimeOtgs",
            "freqProfRows",
            "weeklyFdi",
            "vdi400Rows",
            "vdi765Rows",
            "voltStats",
            "violMsgs",
            "wideViols",
            "adjViols",
            "ictCons",
            "transCons",
            "hvNodes",
            "lvNodes",
        ] {
            assert!(value.get(key).is_some(), "missing template key {key}");
        }
        for table in ["table1", "table2", "table3", "table4"] {
            assert!(value["voltStats"].get(table).is_some(), "missing {table}");
        }
    }
}
