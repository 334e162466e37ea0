#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
}

impl NoiseError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        NoiseError::InvalidConfiguration { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, NoiseError>;
