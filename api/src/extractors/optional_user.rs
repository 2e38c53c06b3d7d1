use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use crate::auth::user::User;
use crate::errors::ApiError;

/// Authenticates the caller when an Authorization header is present;
/// anonymous requests pass through as `None`.
pub struct OptionalUser(pub Option<User>);

impl OptionalUser {
    pub fn into_inner(self) -> Option<User> {
        self.0
    }
}

impl FromRequest for OptionalUser {
    type Error = ApiError;
    type Future = Ready<Result<OptionalUser, Self::Error>>;

    fn from_request(request: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if request.headers().get(AUTHORIZATION).is_none() {
            return ready(Ok(OptionalUser(None)));
        }
        match User::from_request(request, payload).into_inner() {
            Ok(user) => ready(Ok(OptionalUser(Some(user)))),
            Err(e) => ready(Err(e)),
        }
    }
}
