use thiserror::Error;

/// Why a page could not be turned into an `ExtractedRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Never downgraded, even under `ErrorPolicy::Degrade`.
    #[error("multiple ACS containers ({0})")]
    MultipleBanners(usize),
    #[error("unknown page type")]
    UnknownLayout,
    #[error("malformed object id: {0}")]
    MalformedObjectId(String),
    #[error("malformed object class: {0}")]
    MalformedObjectClass(String),
    #[error("malformed ACS banner: no {0} token")]
    MalformedAcsBanner(&'static str),
}

impl ExtractionError {
    /// Whether `ErrorPolicy::Degrade` may turn this into an empty record.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ExtractionError::MultipleBanners(_))
    }
}
