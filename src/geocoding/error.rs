use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("no matching place was found")]
    NotFound,

    #[error("request error: {0:#}")]
    RequestError(#[from] reqwest::Error),

    #[error("request error: {0:#}")]
    RequestMiddlewareError(#[from] reqwest_middleware::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
