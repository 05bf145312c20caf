//! Error classification for backend responses.
//!
//! Two failure classes reach the user: a rejected token ends the session and
//! sends them back to the login view; anything else is shown verbatim and
//! leaves them where they are to retry. Transport failures (unreachable host)
//! surface like operation failures, with the error's display text.

use thiserror::Error;

/// Failures surfaced by [`ApiClient`](crate::ApiClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token. Callers clear the persisted
    /// session and redirect to the login view.
    #[error("session expired or invalid")]
    Unauthorized,
    /// The backend refused the operation. `body` is the response text, shown
    /// to the user unmodified; no error codes are parsed out of it.
    #[error("{body}")]
    Rejected { status: u16, body: String },
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-2xx status together with its body text.
    ///
    /// 403 counts as 401-equivalent: the backend's bearer scheme answers a
    /// missing or malformed `Authorization` header with 403.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            _ => ApiError::Rejected { status, body },
        }
    }

    /// Whether this failure invalidates the persisted session.
    pub fn ends_session(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_class_ends_session() {
        assert!(ApiError::from_status(401, String::new()).ends_session());
        assert!(ApiError::from_status(403, String::new()).ends_session());
    }

    #[test]
    fn test_other_statuses_keep_session() {
        let err = ApiError::from_status(422, "title must not be empty".to_string());
        assert!(!err.ends_session());
        match err {
            ApiError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "title must not be empty");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_rejected_displays_body_verbatim() {
        let err = ApiError::from_status(500, "internal error".to_string());
        assert_eq!(err.to_string(), "internal error");
    }
}
