use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv quoting failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv writer flush failed: {0}")]
    Flush(#[from] std::io::Error),
    #[error("quoted record is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_failures_surface_as_errors() {
        let utf8 = String::from_utf8(vec![0xff]).unwrap_err();
        let error = ReportError::from(utf8);
        assert!(matches!(error, ReportError::Utf8(_)));
        assert!(error.to_string().starts_with("quoted record is not valid UTF-8"));
    }
}
