use actix_web::web::{Data, Json};
use actix_web::HttpResponse;
use db::models::User;
use jwt::{decode, Algorithm, DecodingKey, Validation};
use crate::auth::claims::RefreshToken;
use crate::auth::TokenResponse;
use crate::database::Connection;
use crate::errors::*;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        LoginRequest {
            email: String::from(email),
            password: String::from(password),
        }
    }
}

impl RefreshRequest {
    pub fn new(refresh_token: &str) -> Self {
        RefreshRequest {
            refresh_token: String::from(refresh_token),
        }
    }
}

pub async fn token(
    (state, connection, login_request): (Data<AppState>, Connection, Json<LoginRequest>),
) -> Result<HttpResponse, ApiError> {
    // Generic messaging to avoid revealing whether the email is known
    let login_failure_messaging = "Email or password incorrect";

    let user = match User::find_by_email(&login_request.email, &mut connection.get()) {
        Ok(u) => u,
        Err(_e) => return Err(AuthError::new(login_failure_messaging.to_string()).into()),
    };

    if !user.check_password(&login_request.password) {
        return Err(AuthError::new(login_failure_messaging.to_string()).into());
    }

    if !user.is_active {
        return Err(AuthError::new("User account is disabled".to_string()).into());
    }

    user.record_login(&mut connection.get())?;

    let response = TokenResponse::create_from_user(&state.config.token_secret, &state.config.token_issuer, &user)?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn token_refresh(
    (state, connection, refresh_request): (Data<AppState>, Connection, Json<RefreshRequest>),
) -> Result<HttpResponse, ApiError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    let token = decode::<RefreshToken>(
        &refresh_request.refresh_token,
        &DecodingKey::from_secret(state.config.token_secret.as_bytes()),
        &validation,
    )?;
    let user = User::find(token.claims.get_id()?, &mut connection.get())?;

    // A password change invalidates every refresh token issued before it
    let password_modified_timestamp = user.password_modified_at.and_utc().timestamp() as u64;
    if password_modified_timestamp > token.claims.issued {
        return Err(AuthError::new("Invalid token".to_string()).into());
    }

    if !user.is_active {
        return Err(AuthError::new("User account is disabled".to_string()).into());
    }

    let response = TokenResponse::create_from_refresh_token(
        &state.config.token_secret,
        &state.config.token_issuer,
        &user,
        refresh_request.refresh_token.clone(),
    )?;

    Ok(HttpResponse::Ok().json(response))
}
