//! Export — persists a rendered newsletter under its derived filename.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::format::format_date;

/// `newsletter-<DD.MM.YYYY>.html`, using the same date formatting as the document.
pub fn export_filename(issue_date: &str) -> String {
    format!("newsletter-{}.html", format_date(issue_date))
}

/// Writes `html` to `dir/filename`, creating `dir` if needed.
///
/// Path separators in `filename` are replaced with `_`, so a passthrough
/// date such as `1/2/x` cannot escape `dir`.
pub fn write_html(dir: &Path, filename: &str, html: &str) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(sanitize_filename(filename));
    std::fs::write(&path, html)?;
    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(path)
}

fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}
