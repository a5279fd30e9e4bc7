//! Report preamble.

use tally_model::{ReportFormat, Viewer};

use crate::common::{CSV_HEADER, html_text};
use crate::options::RenderOptions;

/// Render the format-specific preamble for `viewer`.
///
/// Unrecognized formats produce an empty string.
pub fn render_header(format: &ReportFormat, viewer: &Viewer, options: &RenderOptions) -> String {
    match format {
        ReportFormat::Csv => CSV_HEADER.to_string(),
        ReportFormat::Html => format!(
            "<html><body>\n\
             <h1>Relatório</h1>\n\
             <h2>Usuário: {}</h2>\n\
             <table>\n\
             <tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
            html_text(&viewer.display_name(), options)
        ),
        ReportFormat::Unrecognized(_) => String::new(),
    }
}
