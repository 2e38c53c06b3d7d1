use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use std::error::Error;
use std::fmt;
use crate::errors::web_error::ConvertToWebError;

#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundError {
    pub reason: String,
}

impl NotFoundError {
    pub fn new() -> NotFoundError {
        NotFoundError {
            reason: "Not found".to_string(),
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl Error for NotFoundError {}

impl ConvertToWebError for NotFoundError {
    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }

    fn to_response(&self) -> HttpResponse {
        HttpResponse::NotFound().json(json!({"error": self.reason}))
    }
}
