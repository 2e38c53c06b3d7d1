use actix_web::http::StatusCode;
use actix_web::web::{Json, Path};
use burgee_api::controllers::roles;
use burgee_api::models::PathParameters;
use burgee_db::models::*;
use crate::support;
use crate::support::database::TestDatabase;

#[actix_rt::test]
async fn index() {
    let database = TestDatabase::new();
    let auth_user = support::create_auth_user(RoleName::Admin, &database);

    let response = roles::index((database.connection.clone().into(), auth_user)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    // The admin role created for the caller
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn index_as_member_fails() {
    let database = TestDatabase::new();
    let auth_user = support::create_auth_user(RoleName::Member, &database);

    let response = roles::index((database.connection.clone().into(), auth_user)).await;
    support::assert_unauthorized(response);
}

#[actix_rt::test]
async fn update() {
    let database = TestDatabase::new();
    let role = database.create_role().finish();
    let auth_user = support::create_auth_user(RoleName::Admin, &database);

    let response = roles::update((
        database.connection.clone().into(),
        Path::from(PathParameters { id: role.id }),
        Json(RoleEditableAttributes {
            can_create_events: Some(true),
            description: Some("Race officers".to_string()),
            ..Default::default()
        }),
        auth_user,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    assert_eq!(body["can_create_events"], true);
    assert_eq!(body["description"], "Race officers");
}
