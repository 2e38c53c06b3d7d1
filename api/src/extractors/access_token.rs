use actix_web::http::header::AUTHORIZATION;
use actix_web::web::Data;
use actix_web::HttpRequest;
use jwt::{decode, DecodingKey, Validation};
use crate::auth::claims::AccessToken;
use crate::errors::{ApiError, ApplicationError, AuthError};
use crate::server::AppState;

pub struct AccessTokenExtractor;

impl AccessTokenExtractor {
    pub fn from_request(request: &HttpRequest) -> Result<AccessToken, ApiError> {
        let state = request
            .app_data::<Data<AppState>>()
            .ok_or_else(|| ApplicationError::new("AppState not configured for application".to_string()))?;

        let auth_header = match request.headers().get(AUTHORIZATION) {
            Some(auth_header) => auth_header,
            None => return Err(AuthError::unauthorized("Missing auth token").into()),
        };

        let mut parts = auth_header.to_str()?.split_whitespace();
        if parts.next() != Some("Bearer") {
            return Err(AuthError::unauthorized("Authorization scheme not supported").into());
        }

        let token = match parts.next() {
            Some(token) => token,
            None => return Err(AuthError::unauthorized("No token provided").into()),
        };

        let data = decode::<AccessToken>(
            token,
            &DecodingKey::from_secret(state.config.token_secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}
