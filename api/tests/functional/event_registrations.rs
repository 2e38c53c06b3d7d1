use actix_web::http::StatusCode;
use actix_web::web::Path;
use actix_web::ResponseError;
use burgee_api::controllers::event_registrations;
use burgee_api::models::PathParameters;
use burgee_db::models::*;
use crate::support;
use crate::support::database::TestDatabase;

#[actix_rt::test]
async fn register() {
    let database = TestDatabase::new();
    let member_type = database.create_member_type().finish();
    let event = database.create_event().registerable().finish();
    database
        .create_event_registration_fee()
        .with_event(&event)
        .with_member_type(&member_type)
        .with_fee(3000)
        .finish();
    let member = database.create_user().with_member_type(&member_type).finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = event_registrations::register((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = support::body_json(response).await;
    assert_eq!(body["fee_in_cents"], 3000);
    assert!(event.is_registered(member.id, &mut database.connection.get()).unwrap());
}

#[actix_rt::test]
async fn register_when_closed_fails() {
    let database = TestDatabase::new();
    let event = database
        .create_event()
        .with_registration_status(RegistrationStatus::Closed)
        .finish();
    let member = database.create_user().finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = event_registrations::register((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await;
    let error = response.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn register_when_ineligible_fails() {
    let database = TestDatabase::new();
    let allowed_type = database.create_member_type().finish();
    let other_type = database.create_member_type().finish();
    let event = database.create_event().registerable().finish();
    database
        .create_event_registration_fee()
        .with_event(&event)
        .with_member_type(&allowed_type)
        .finish();
    let member = database.create_user().with_member_type(&other_type).finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = event_registrations::register((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await;
    let error = response.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn cancel() {
    let database = TestDatabase::new();
    let event = database.create_event().registerable().finish();
    let member = database.create_user().finish();
    database
        .create_event_registration()
        .with_event(&event)
        .with_member(&member)
        .finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = event_registrations::cancel((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    assert_eq!(body["cancelled"], true);
    assert!(!body["cancelled_at"].is_null());
    assert!(!event.is_registered(member.id, &mut database.connection.get()).unwrap());
}

#[actix_rt::test]
async fn cancel_without_registration_fails() {
    let database = TestDatabase::new();
    let event = database.create_event().registerable().finish();
    let member = database.create_user().finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = event_registrations::cancel((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await;
    let error = response.err().unwrap();
    assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn index_visibility_none() {
    let database = TestDatabase::new();
    let event = database.create_event().registerable().finish();
    database.create_event_registration().with_event(&event).finish();

    // An ordinary member cannot see the list
    let member = database.create_user().finish();
    let response = event_registrations::index((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        support::create_auth_user_from_user(&member),
    ))
    .await;
    support::assert_unauthorized(response);

    // An event manager can
    let editor = support::create_auth_user(RoleName::Editor, &database);
    let response = event_registrations::index((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        editor,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn index_visibility_members() {
    let database = TestDatabase::new();
    let event = database
        .create_event()
        .registerable()
        .with_registrant_list_visibility(RegistrantListVisibility::Members)
        .finish();
    database.create_event_registration().with_event(&event).finish();

    let member = database.create_user().finish();
    let response = event_registrations::index((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        support::create_auth_user_from_user(&member),
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn index_visibility_registered_members_only() {
    let database = TestDatabase::new();
    let event = database
        .create_event()
        .registerable()
        .with_registrant_list_visibility(RegistrantListVisibility::RegisteredMembersOnly)
        .finish();
    let registered = database.create_user().finish();
    database
        .create_event_registration()
        .with_event(&event)
        .with_member(&registered)
        .finish();

    // Registered members see the list
    let response = event_registrations::index((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        support::create_auth_user_from_user(&registered),
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Unregistered members do not
    let unregistered = database.create_user().finish();
    let response = event_registrations::index((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        support::create_auth_user_from_user(&unregistered),
    ))
    .await;
    support::assert_unauthorized(response);
}
