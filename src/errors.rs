use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response body: {0}")]
    MalformedBody(String),

    #[error("Response is missing field '{0}'")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for HandlerError {
    fn from(error: reqwest::Error) -> Self {
        HandlerError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::MalformedBody(error.to_string())
    }
}
