use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use db::models::User as DbUser;
use futures::future::{err, ready, Ready};
use crate::auth::user::User;
use crate::database::RequestConnection;
use crate::errors::{ApiError, AuthError};
use crate::extractors::AccessTokenExtractor;

impl FromRequest for User {
    type Error = ApiError;
    type Future = Ready<Result<User, Self::Error>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = match AccessTokenExtractor::from_request(request) {
            Ok(token) => token,
            Err(e) => return err(e),
        };

        let connection = match request.connection() {
            Ok(connection) => connection,
            Err(e) => return err(e),
        };

        let user_id = match token.get_id() {
            Ok(id) => id,
            Err(_) => return err(AuthError::unauthorized("Invalid token").into()),
        };

        let user = match DbUser::find(user_id, &mut connection.get()) {
            Ok(user) => user,
            Err(_) => return err(AuthError::unauthorized("Invalid token").into()),
        };

        if !user.is_active {
            err(AuthError::unauthorized("User account is disabled").into())
        } else {
            ready(Ok(User::new(user, request)))
        }
    }
}
