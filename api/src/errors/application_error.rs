use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use std::error::Error;
use std::fmt;
use crate::errors::web_error::ConvertToWebError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationError {
    pub reason: String,
    pub status: StatusCode,
}

impl ApplicationError {
    pub fn new(reason: String) -> ApplicationError {
        ApplicationError {
            reason,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unprocessable(reason: &str) -> ApplicationError {
        ApplicationError {
            reason: reason.to_string(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn bad_request(reason: &str) -> ApplicationError {
        ApplicationError {
            reason: reason.to_string(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl Error for ApplicationError {}

impl ConvertToWebError for ApplicationError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn to_response(&self) -> HttpResponse {
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Application error: {}", self.reason);
            HttpResponse::InternalServerError().json(json!({"error": "Internal error"}))
        } else {
            HttpResponse::build(self.status).json(json!({"error": self.reason}))
        }
    }
}
