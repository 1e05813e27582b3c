use thiserror::Error;

pub type HeaderResult<T> = Result<T, HeaderError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeaderError {
    #[error("'{code}' is an invalid projection code, must be one of 'TAN' or 'SFL'")]
    InvalidProjection { code: String },

    #[error("Invalid observational parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Missing header keyword: {keyword}")]
    MissingKeyword { keyword: String },
}

impl HeaderError {
    pub fn invalid_projection(code: impl Into<String>) -> Self {
        Self::InvalidProjection { code: code.into() }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn missing_keyword(keyword: impl Into<String>) -> Self {
        Self::MissingKeyword {
            keyword: keyword.into(),
        }
    }
}
