use thiserror::Error;

/// Failures talking to the assistant or project lookup services.
///
/// These never reach the user directly; callers log them and fall back.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("no API key in ${0}")]
    MissingKey(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response carried no {0}")]
    EmptyResponse(&'static str),

    #[error("audio payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("audio payload has {0} bytes, expected whole 16-bit frames")]
    TruncatedAudio(usize),
}
