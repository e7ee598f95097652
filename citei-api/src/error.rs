use citei_core::HttpError;
use citei_data::DataError;

/// Business-rule failures raised by the services.
#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    /// The payload points at a row that does not exist.
    InvalidReference(String),
    /// The operation would break a relationship that still exists.
    Conflict(String),
    Data(DataError),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "{msg}"),
            ServiceError::InvalidReference(msg) => write!(f, "{msg}"),
            ServiceError::Conflict(msg) => write!(f, "{msg}"),
            ServiceError::Data(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Data(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DataError> for ServiceError {
    fn from(err: DataError) -> Self {
        ServiceError::Data(err)
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::InvalidReference(msg) => HttpError::Unprocessable(msg),
            ServiceError::Conflict(msg) => HttpError::Conflict(msg),
            ServiceError::Data(err) => err.into(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
