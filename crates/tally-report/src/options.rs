/// Opt-in output hardening.
///
/// The default renders fields verbatim: HTML interpolation is unescaped and
/// CSV fields are not quoted, so existing golden outputs stay byte-exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Entity-encode viewer and item text in HTML output.
    pub escape_html: bool,
    /// Quote CSV data fields that contain delimiters, quotes or newlines.
    pub quote_csv: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn with_escape_html(mut self, enable: bool) -> Self {
        self.escape_html = enable;
        self
    }

    #[must_use]
    pub fn with_quote_csv(mut self, enable: bool) -> Self {
        self.quote_csv = enable;
        self
    }
}
