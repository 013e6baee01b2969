use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("nums are required")]
    MissingParameter,
    #[error("{} is not a number", .0.join(", "))]
    InvalidNumbers(Vec<String>),
    #[error("Cannot compute a statistic over an empty sequence of numbers.")]
    EmptySequence,
    #[error("Unable to read listening port from environment. Reason: `{0}`.")]
    InvalidPort(String),
    #[error("Unable to bind listener. Reason: `{0}`.")]
    Bind(#[from] std::io::Error),
    #[error("Server stopped unexpectedly. Reason: `{0}`.")]
    Server(#[from] hyper::Error),
}

impl ServiceError {
    /// HTTP status a request failing with this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::MissingParameter | ServiceError::InvalidNumbers(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status() == StatusCode::BAD_REQUEST
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
