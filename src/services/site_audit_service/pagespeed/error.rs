use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Any failure of a PageSpeed call. The Display text is shown to the user as is.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("PageSpeed API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode PageSpeed response: {0}")]
    Decode(String),
}

impl RequestError {
    /// Network failure with the whole `source()` chain in its message.
    /// The URL is dropped as it holds the API key.
    pub fn network(e: reqwest::Error) -> Self {
        let e = e.without_url();
        let mut message = e.to_string();
        let mut source = e.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        RequestError::Network(message)
    }
}
