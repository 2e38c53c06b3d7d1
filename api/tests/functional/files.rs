use actix_web::http::StatusCode;
use actix_web::web::{Bytes, Json, Path, Query};
use burgee_api::controllers::files;
use burgee_api::controllers::files::UploadParameters;
use burgee_api::models::PathParameters;
use burgee_db::models::*;
use crate::support;
use crate::support::database::TestDatabase;
use crate::support::test_request::TestRequest;

#[actix_rt::test]
async fn create_and_download() {
    let database = TestDatabase::new();
    let folder = database.create_document_folder().with_name("Race Documents").finish();
    let admin = support::create_auth_user(RoleName::Admin, &database);
    let test_request = TestRequest::create();

    let response = files::create((
        test_request.request.clone(),
        database.connection.clone().into(),
        Path::from(PathParameters { id: folder.id }),
        Query(UploadParameters {
            name: "notice_of_race.txt".to_string(),
            description: "NOR".to_string(),
        }),
        Bytes::from_static(b"All boats shall race fairly."),
        admin,
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::body_json(response).await;
    assert_eq!(body["name"], "notice_of_race.txt");
    assert_eq!(body["file_size"], 28);
    assert_eq!(body["mime_type"], "text/plain");
    let file_id: uuid::Uuid = serde_json::from_value(body["id"].clone()).unwrap();

    // And it streams back as an attachment
    let admin = support::create_auth_user(RoleName::Admin, &database);
    let response = files::download((
        test_request.request.clone(),
        database.connection.clone().into(),
        Path::from(PathParameters { id: file_id }),
        admin,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn create_without_add_grant_fails() {
    let database = TestDatabase::new();
    let folder = database.create_document_folder().finish();
    let member = support::create_auth_user(RoleName::Member, &database);
    let test_request = TestRequest::create();

    let response = files::create((
        test_request.request,
        database.connection.clone().into(),
        Path::from(PathParameters { id: folder.id }),
        Query(UploadParameters {
            name: "notice_of_race.txt".to_string(),
            description: "".to_string(),
        }),
        Bytes::from_static(b"contents"),
        member,
    ))
    .await;
    support::assert_unauthorized(response);
}

#[actix_rt::test]
async fn show_requires_view_grant() {
    let database = TestDatabase::new();
    let role = database.create_role().finish();
    let folder = database.create_document_folder().finish();
    let file = database.create_document_file().with_folder(&folder).finish();
    database
        .create_folder_permission()
        .with_folder(&folder)
        .with_role(&role)
        .finish();
    let member = database.create_user().with_role(&role).finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = files::show((
        database.connection.clone().into(),
        Path::from(PathParameters { id: file.id }),
        auth_user,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A role without any grant is refused
    let other_role = database.create_role().finish();
    let outsider = database.create_user().with_role(&other_role).finish();
    let response = files::show((
        database.connection.clone().into(),
        Path::from(PathParameters { id: file.id }),
        support::create_auth_user_from_user(&outsider),
    ))
    .await;
    support::assert_unauthorized(response);
}

#[actix_rt::test]
async fn update_metadata() {
    let database = TestDatabase::new();
    let file = database.create_document_file().finish();
    let admin = support::create_auth_user(RoleName::Admin, &database);

    let response = files::update((
        database.connection.clone().into(),
        Path::from(PathParameters { id: file.id }),
        Json(DocumentFileEditableAttributes {
            description: Some("Amended sailing instructions".to_string()),
            ..Default::default()
        }),
        admin,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    assert_eq!(body["description"], "Amended sailing instructions");
}
