use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use time::Date;

use grid_client::domain::display_date;

use crate::context::ReportContext;
use crate::error::ReportError;

const TEMPLATE_NAME: &str = "weekly_report";

/// Template registry for the weekly report document.
pub struct ReportRenderer {
    registry: Handlebars<'static>,
}

impl ReportRenderer {
    pub fn from_template_file(path: &Path) -> Result<Self, ReportError> {
        let mut registry = Handlebars::new();
        registry.register_template_file(TEMPLATE_NAME, path)?;
        Ok(Self { registry })
    }

    pub fn from_template_str(template: &str) -> Result<Self, ReportError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(TEMPLATE_NAME, template)?;
        Ok(Self { registry })
    }

    pub fn render(&self, cxt: &ReportContext) -> Result<String, ReportError> {
        Ok(self.registry.render(TEMPLATE_NAME, cxt)?)
    }

    pub fn render_to_file(&self, cxt: &ReportContext, out_path: &Path) -> Result<(), ReportError> {
        let rendered = self.render(cxt)?;
        fs::write(out_path, rendered)?;
        Ok(())
    }
}

/// Deterministic document name embedding the week number and range.
pub fn report_file_name(week_num: u32, start: Date, end: Date) -> String {
    format!(
        "Weekly_no_{}_{}_to_{}.html",
        week_num,
        display_date(start),
        display_date(end)
    )
}

/// Secondary copy path: same base name, `.pdf` extension.
pub fn secondary_file_path(rendered: &Path) -> PathBuf {
    rendered.with_extension("pdf")
}

/// Produce the secondary format copy through the configured external
/// converter, invoked as `<cmd> <rendered> <secondary>`.
pub async fn convert_to_secondary(
    command: &str,
    rendered: &Path,
    secondary: &Path,
) -> Result<(), ReportError> {
    let status = tokio::process::Command::new(command)
        .arg(rendered)
        .arg(secondary)
        .status()
        .await?;
    if !status.success() {
        return Err(ReportError::Converter {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}
