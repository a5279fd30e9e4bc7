//! Shared constants and field rendering for report generation.

use std::borrow::Cow;

use crate::error::Result;
use crate::options::RenderOptions;

/// Column header line of the CSV format.
pub const CSV_HEADER: &str = "ID,NOME,VALOR,USUARIO\n";

/// Label row that precedes the CSV total.
pub const CSV_TOTAL_LABEL: &str = "Total,,";

/// Inline style attached to priority rows in HTML.
pub const PRIORITY_ROW_STYLE: &str = " style=\"font-weight:bold;\"";

/// Highest value a standard viewer may see (inclusive).
pub const STANDARD_VISIBILITY_LIMIT: f64 = 500.0;

/// Values strictly above this are marked priority for admin viewers.
pub const PRIORITY_THRESHOLD: f64 = 1000.0;

/// Text interpolated into HTML, entity-encoded only when requested.
pub fn html_text<'a>(value: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_html {
        html_escape::encode_text(value)
    } else {
        Cow::Borrowed(value)
    }
}

/// Join CSV fields into one newline-terminated record.
///
/// Fields are joined verbatim unless `quote_csv` is set, in which case the
/// `csv` writer quotes the ones that need it. Only the quoting path can fail.
pub fn csv_record(fields: &[&str], options: &RenderOptions) -> Result<String> {
    if options.quote_csv {
        return quoted_record(fields);
    }
    let mut line = fields.join(",");
    line.push('\n');
    Ok(line)
}

fn quoted_record(fields: &[&str]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields)?;
    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}
