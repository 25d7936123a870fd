use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// Sentinel shown for revival fields of outages that are still outstanding.
pub const STILL_OUT: &str = "Still out";

/// Table cell date, `dd-mm-yyyy`.
pub fn display_date(date: Date) -> String {
    date.format(format_description!("[day]-[month]-[year]"))
        .unwrap_or_default()
}

/// Table cell time of day, `HH:MM`.
pub fn display_time(dt: PrimitiveDateTime) -> String {
    dt.format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}

/// Report header date, `dd-Mon-yyyy`.
pub fn report_date(date: Date) -> String {
    date.format(format_description!("[day]-[month repr:short]-[year]"))
        .unwrap_or_default()
}

/// Installed capacity as stored in the warehouse, stringified for display.
/// Whole megawatt values drop the trailing `.0`.
pub fn display_capacity(capacity: Option<f64>) -> String {
    match capacity {
        None => String::new(),
        Some(mw) if mw.fract() == 0.0 => format!("{mw:.0}"),
        Some(mw) => mw.to_string(),
    }
}

/// Compose the display reason of an outage from its shutdown tag, recorded
/// reason and remarks. Empty parts are omitted, and the generic `Outage` tag
/// carries no information so it is dropped as well.
pub fn compose_reason(
    shutdown_tag: Option<&str>,
    reason: Option<&str>,
    remarks: Option<&str>,
) -> String {
    let tag = shutdown_tag.filter(|t| *t != "Outage");
    [tag, reason, remarks]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn display_date_is_day_month_year() {
        assert_eq!(display_date(date!(2023 - 01 - 02)), "02-01-2023");
        assert_eq!(display_date(date!(2022 - 12 - 31)), "31-12-2022");
    }

    #[test]
    fn display_time_is_hour_minute() {
        assert_eq!(display_time(datetime!(2023-01-02 05:04:59)), "05:04");
        assert_eq!(display_time(datetime!(2023-01-02 23:59:59)), "23:59");
    }

    #[test]
    fn report_date_uses_short_month_name() {
        assert_eq!(report_date(date!(2023 - 01 - 02)), "02-Jan-2023");
        assert_eq!(report_date(date!(2023 - 04 - 30)), "30-Apr-2023");
    }

    #[test]
    fn display_capacity_drops_trailing_zero_fraction() {
        assert_eq!(display_capacity(Some(210.0)), "210");
        assert_eq!(display_capacity(Some(122.5)), "122.5");
        assert_eq!(display_capacity(None), "");
    }

    #[test]
    fn compose_reason_joins_non_empty_parts() {
        assert_eq!(
            compose_reason(Some("Planned"), Some("RSD"), Some("Annual overhaul")),
            "Planned / RSD / Annual overhaul"
        );
    }

    #[test]
    fn compose_reason_drops_the_generic_outage_tag() {
        assert_eq!(
            compose_reason(Some("Outage"), Some("Boiler tube leakage"), None),
            "Boiler tube leakage"
        );
    }

    #[test]
    fn compose_reason_skips_empty_and_missing_parts() {
        assert_eq!(compose_reason(None, Some("  "), Some("Tripping")), "Tripping");
        assert_eq!(compose_reason(None, None, None), "");
    }
}
