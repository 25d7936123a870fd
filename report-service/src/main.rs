use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use report_service::{
    config::AppConfig,
    context, fin_year, observability,
    render::{self, ReportRenderer},
};
use sqlx::postgres::PgPoolOptions;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

/// Weekly grid operations report generator.
#[derive(Parser, Debug)]
#[command(about = "Assembles the weekly grid operations report from the warehouse")]
struct Args {
    /// Start date in yyyy-mm-dd format
    #[arg(long = "start_date", value_parser = parse_cli_date)]
    start_date: Option<Date>,
    /// Last date in yyyy-mm-dd format
    #[arg(long = "end_date", value_parser = parse_cli_date)]
    end_date: Option<Date>,
}

fn parse_cli_date(raw: &str) -> Result<Date, String> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("invalid date '{raw}': {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let args = Args::parse();
    let cfg = AppConfig::load()?;

    // Default scope is the last full Monday-to-Sunday week.
    let start = args.start_date.unwrap_or_else(|| {
        fin_year::monday_on_or_before(OffsetDateTime::now_utc().date() - Duration::days(7))
    });
    let end = args.end_date.unwrap_or(start + Duration::days(6));

    let pool = PgPoolOptions::new()
        .max_connections(cfg.warehouse.max_connections)
        .connect(&cfg.warehouse.uri)
        .await?;

    let cxt = context::assemble(&pool, start, end).await?;

    let renderer = ReportRenderer::from_template_file(Path::new(&cfg.report.template_path))?;
    fs::create_dir_all(&cfg.report.dump_folder)?;
    let out_path =
        Path::new(&cfg.report.dump_folder).join(render::report_file_name(cxt.wk_num, start, end));
    renderer.render_to_file(&cxt, &out_path)?;
    tracing::info!(path = %out_path.display(), "weekly report document written");

    match cfg.export.converter_cmd.as_deref() {
        Some(command) => {
            let secondary = render::secondary_file_path(&out_path);
            render::convert_to_secondary(command, &out_path, &secondary).await?;
            tracing::info!(path = %secondary.display(), "weekly report secondary copy written");
        }
        None => tracing::warn!("no converter command configured, skipping secondary copy"),
    }

    Ok(())
}
