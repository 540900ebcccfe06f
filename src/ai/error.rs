use thiserror::Error;

/// Failures surfaced by the generative-model client. None of these are fatal
/// to the session; the page converts each into a visible error state and the
/// user may retry the triggering action.
#[derive(Debug, Error)]
pub enum AiError {
    /// No credential was supplied at build time. Raised at first use, never
    /// at load time.
    #[error("no API key configured; set GEMINI_API_KEY when building")]
    MissingApiKey,

    /// The request never produced a usable HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// The call succeeded but carried no usable content.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The reply could not be interpreted as the expected shape.
    #[error("could not parse model reply: {0}")]
    Parse(String),

    /// An image was requested but no image part came back.
    #[error("model reply contained no image")]
    NoImage,
}

pub type Result<T> = std::result::Result<T, AiError>;
