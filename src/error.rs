use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

/// Failures of the local key-value store.
#[derive(Debug, Display)]
pub enum StorageError {
    #[display(fmt = "failed to access {}: {}", path, source)]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[display(fmt = "malformed store contents: {}", _0)]
    Malformed(serde_json::Error),
    #[display(fmt = "store unavailable: {}", _0)]
    Unavailable(String),
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            StorageError::Malformed(e) => Some(e),
            StorageError::Unavailable(_) => None,
        }
    }
}

#[derive(Debug, Display)]
pub enum AttendanceError {
    #[display(fmt = "failed to encode attendance records: {}", _0)]
    Encode(serde_json::Error),
    #[display(fmt = "failed to persist attendance records: {}", _0)]
    Persist(StorageError),
}

impl std::error::Error for AttendanceError {}

impl From<StorageError> for AttendanceError {
    fn from(e: StorageError) -> Self {
        AttendanceError::Persist(e)
    }
}

/// Rejected form input. The messages are shown to the user as-is.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "Please fill in all required fields: {}", _0)]
    MissingFields(String),
    #[display(fmt = "Unknown department: {}", _0)]
    UnknownDepartment(String),
    #[display(fmt = "Please select start and end dates for time-off requests")]
    MissingDates,
    #[display(fmt = "{} cannot be after {}", _0, _1)]
    DateOrder(&'static str, &'static str),
}

impl ValidationError {
    pub fn missing(fields: &[&str]) -> Self {
        ValidationError::MissingFields(fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Errors of the in-memory directory, project and request stores.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum StoreError {
    #[display(fmt = "{}", _0)]
    Invalid(ValidationError),
    #[display(fmt = "{} {} not found", kind, id)]
    NotFound { kind: &'static str, id: u64 },
    #[display(fmt = "{} {} has already been processed", kind, id)]
    AlreadyProcessed { kind: &'static str, id: u64 },
}

impl std::error::Error for StoreError {}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::Invalid(e)
    }
}

/// Error returned by request handlers, rendered as `{"message": ...}`.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "{}", _0)]
    NotFound(String),
    #[display(fmt = "Internal Server Error")]
    Internal,
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Invalid(v) => ApiError::BadRequest(v.to_string()),
            not_found @ StoreError::NotFound { .. } => ApiError::NotFound(not_found.to_string()),
            processed @ StoreError::AlreadyProcessed { .. } => {
                ApiError::BadRequest(processed.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<AttendanceError> for ApiError {
    fn from(e: AttendanceError) -> Self {
        tracing::error!(error = %e, "Attendance update failed");
        ApiError::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let err: ApiError = StoreError::NotFound {
            kind: "Employee",
            id: 9,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Employee 9 not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err: ApiError = StoreError::from(ValidationError::missing(&["name", "email"])).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: name, email"
        );
    }

    #[test]
    fn processed_request_maps_to_400() {
        let err: ApiError = StoreError::AlreadyProcessed {
            kind: "Request",
            id: 2,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Request 2 has already been processed");
    }

    #[test]
    fn attendance_failures_hide_details() {
        let err: ApiError =
            AttendanceError::Persist(StorageError::Unavailable("disk full".into())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
    }
}
