use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InsightError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("HTTP status error: {0}")]
    HttpStatusError(u16),
    #[error("Decode error: {0}")]
    DecodeError(String),
}

impl InsightError {
    /// Human-readable text shown in place of a result.
    pub fn user_message(&self) -> String {
        match self {
            InsightError::NetworkError(_) => String::from("Failed to fetch response"),
            InsightError::HttpStatusError(code) => format!("Error: {code}"),
            InsightError::DecodeError(detail) => format!("Failed to decode response: {detail}"),
            InsightError::ConfigParsingError(_) | InsightError::IoError(_) => self.to_string(),
        }
    }
}

impl From<std::io::Error> for InsightError {
    fn from(err: std::io::Error) -> Self {
        InsightError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            InsightError::HttpStatusError(status.as_u16())
        } else if err.is_decode() || err.is_body() {
            InsightError::DecodeError(err.to_string())
        } else {
            InsightError::NetworkError(err.to_string())
        }
    }
}
