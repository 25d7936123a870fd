use grid_client::db::FetchError;

/// Failure of a report generation run. Fetch failures keep the category name
/// of the section that failed; no section is ever silently substituted with
/// empty data.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("converter command `{command}` exited with {status}")]
    Converter {
        command: String,
        status: std::process::ExitStatus,
    },
}
