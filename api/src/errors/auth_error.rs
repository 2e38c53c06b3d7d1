use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use std::error::Error;
use std::fmt;
use crate::errors::web_error::ConvertToWebError;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthError {
    pub reason: String,
    pub status: StatusCode,
}

impl AuthError {
    pub fn new(reason: String) -> AuthError {
        AuthError {
            reason,
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn unauthorized(reason: &str) -> AuthError {
        AuthError::new(reason.to_string())
    }

    pub fn forbidden(reason: &str) -> AuthError {
        AuthError {
            reason: reason.to_string(),
            status: StatusCode::FORBIDDEN,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl Error for AuthError {}

impl ConvertToWebError for AuthError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(json!({"error": self.reason}))
    }
}
