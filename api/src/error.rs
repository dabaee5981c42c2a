#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("could not decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid CMS URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
