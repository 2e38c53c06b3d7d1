use actix_web::HttpResponse;
use crate::errors::*;

pub fn unauthorized<T>() -> Result<T, ApiError> {
    unauthorized_with_message("User does not have the required permissions")
}

pub fn unauthorized_with_message<T>(message: &str) -> Result<T, ApiError> {
    warn!("Unauthorized: {}", message);
    // Returned as an error so the transaction middleware rolls back
    Err(AuthError::unauthorized(message).into())
}

pub fn forbidden<T>(message: &str) -> Result<T, ApiError> {
    warn!("Forbidden: {}", message);
    Err(AuthError::forbidden(message).into())
}

pub fn unprocessable<T>(message: &str) -> Result<T, ApiError> {
    warn!("Unprocessable: {}", message);
    Err(ApplicationError::unprocessable(message).into())
}

pub fn bad_request<T>(message: &str) -> Result<T, ApiError> {
    warn!("Bad request: {}", message);
    Err(ApplicationError::bad_request(message).into())
}

pub fn internal_server_error<T>(message: &str) -> Result<T, ApiError> {
    error!("Internal Server Error: {}", message);
    Err(ApplicationError::new(message.to_string()).into())
}

pub fn not_found<T>() -> Result<T, ApiError> {
    Err(NotFoundError::new().into())
}

pub fn no_content() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::NoContent().finish())
}
