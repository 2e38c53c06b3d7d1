pub mod test_request;

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use burgee_api::auth::user::User as AuthUser;
use burgee_api::errors::ApiError;
use burgee_db::models::{RoleName, User};
use crate::support::database::TestDatabase;
use crate::support::test_request::TestRequest;

pub async fn body_json(response: HttpResponse) -> serde_json::Value {
    let body = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn create_auth_user(role_name: RoleName, database: &TestDatabase) -> AuthUser {
    let role = match role_name {
        RoleName::Admin => database.create_role().with_name("Admin").admin().finish(),
        RoleName::Editor => database.create_role().with_name("Editor").editor().finish(),
        RoleName::Member => database.create_role().with_name("Member").finish(),
        RoleName::Viewer => database.create_role().with_name("Viewer").finish(),
    };
    let user = database.create_user().with_role(&role).finish();
    create_auth_user_from_user(&user)
}

pub fn create_auth_user_from_user(user: &User) -> AuthUser {
    let test_request = TestRequest::create_plain();
    AuthUser::new(user.clone(), &test_request)
}

pub fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ApiError>) {
    let error = result.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
}
