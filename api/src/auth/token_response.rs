use db::models::User;
use jwt::{encode, EncodingKey, Header};
use crate::auth::claims::{AccessToken, RefreshToken};
use crate::errors::ApiError;

const ACCESS_TOKEN_EXPIRY_IN_MINUTES: u64 = 60;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenResponse {
    pub fn create_from_user(token_secret: &str, token_issuer: &str, user: &User) -> Result<TokenResponse, ApiError> {
        let access_token = AccessToken::new(&user.id, token_issuer.to_string(), ACCESS_TOKEN_EXPIRY_IN_MINUTES);
        let refresh_token = RefreshToken::new(&user.id, token_issuer.to_string());

        let key = EncodingKey::from_secret(token_secret.as_bytes());
        Ok(TokenResponse {
            access_token: encode(&Header::default(), &access_token, &key)?,
            refresh_token: encode(&Header::default(), &refresh_token, &key)?,
        })
    }

    pub fn create_from_refresh_token(
        token_secret: &str,
        token_issuer: &str,
        user: &User,
        refresh_token: String,
    ) -> Result<TokenResponse, ApiError> {
        let access_token = AccessToken::new(&user.id, token_issuer.to_string(), ACCESS_TOKEN_EXPIRY_IN_MINUTES);
        let key = EncodingKey::from_secret(token_secret.as_bytes());
        Ok(TokenResponse {
            access_token: encode(&Header::default(), &access_token, &key)?,
            refresh_token,
        })
    }
}
