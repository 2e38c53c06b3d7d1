use actix_web::http::StatusCode;
use actix_web::web::{Json, Path, Query};
use burgee_api::controllers::events;
use burgee_api::controllers::events::{EventFilterParameters, FeedParameters};
use burgee_api::models::PathParameters;
use burgee_db::models::*;
use crate::support;
use crate::support::database::TestDatabase;
use crate::support::test_request::TestRequest;

fn filter_parameters() -> Query<EventFilterParameters> {
    Query(EventFilterParameters {
        category_id: None,
        past_or_upcoming: None,
        page: None,
        limit: None,
    })
}

#[actix_rt::test]
async fn index() {
    let database = TestDatabase::new();
    let event = database.create_event().with_title("Opening Day").finish();

    let response = events::index((database.connection.clone().into(), filter_parameters()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    assert_eq!(body["paging"]["total"], 1);
    assert_eq!(body["data"][0]["id"], json!(event.id));
    assert_eq!(body["data"][0]["title"], "Opening Day");
}

#[actix_rt::test]
async fn show() {
    let database = TestDatabase::new();
    let event = database.create_event().registerable().finish();
    let contact_member = database.create_user().finish();
    database
        .create_event_contact()
        .with_event(&event)
        .with_member(&contact_member)
        .primary()
        .finish();
    let member = database.create_user().finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = events::show((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        burgee_api::extractors::OptionalUser(Some(auth_user)),
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    assert_eq!(body["id"], json!(event.id));
    assert_eq!(body["can_register"], true);
    assert_eq!(body["is_registered"], false);
    assert_eq!(body["registration_count"], 0);
    assert_eq!(body["contacts"][0]["is_primary"], true);
}

#[actix_rt::test]
async fn create_as_editor() {
    let database = TestDatabase::new();
    let auth_user = support::create_auth_user(RoleName::Editor, &database);

    let new_event = Event::create(
        "Commodore's Cup",
        "Annual regatta",
        chrono::Utc::now().naive_utc() + chrono::Duration::days(7),
        chrono::Utc::now().naive_utc() + chrono::Duration::days(8),
    );

    let response = events::create((database.connection.clone().into(), Json(new_event), auth_user))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The creation is audited
    let (logs, total) = EventActionLog::index(0, 10, &mut database.connection.get()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(logs[0].action, EventAction::Created);
    assert_eq!(logs[0].event_title, "Commodore's Cup");
}

#[actix_rt::test]
async fn create_as_viewer_fails() {
    let database = TestDatabase::new();
    let auth_user = support::create_auth_user(RoleName::Viewer, &database);

    let new_event = Event::create(
        "Commodore's Cup",
        "Annual regatta",
        chrono::Utc::now().naive_utc() + chrono::Duration::days(7),
        chrono::Utc::now().naive_utc() + chrono::Duration::days(8),
    );

    let response = events::create((database.connection.clone().into(), Json(new_event), auth_user)).await;
    support::assert_unauthorized(response);
    assert_eq!(EventActionLog::index(0, 10, &mut database.connection.get()).unwrap().1, 0);
}

#[actix_rt::test]
async fn update_as_editor() {
    let database = TestDatabase::new();
    let event = database.create_event().finish();
    let auth_user = support::create_auth_user(RoleName::Editor, &database);

    let attributes = EventEditableAttributes {
        title: Some("Renamed Regatta".to_string()),
        ..Default::default()
    };
    let response = events::update((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        Json(attributes),
        auth_user,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let event = Event::find(event.id, &mut database.connection.get()).unwrap();
    assert_eq!(event.title, "Renamed Regatta");

    let (logs, _) = EventActionLog::index(0, 10, &mut database.connection.get()).unwrap();
    assert_eq!(logs[0].action, EventAction::Updated);
}

#[actix_rt::test]
async fn update_as_member_fails() {
    let database = TestDatabase::new();
    let event = database.create_event().finish();
    let auth_user = support::create_auth_user(RoleName::Member, &database);

    let attributes = EventEditableAttributes {
        title: Some("Renamed Regatta".to_string()),
        ..Default::default()
    };
    let response = events::update((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        Json(attributes),
        auth_user,
    ))
    .await;
    support::assert_unauthorized(response);
}

#[actix_rt::test]
async fn destroy_as_admin() {
    let database = TestDatabase::new();
    let event = database.create_event().with_title("Doomed Event").finish();
    let auth_user = support::create_auth_user(RoleName::Admin, &database);

    let response = events::destroy((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(Event::find(event.id, &mut database.connection.get()).is_err());

    // The snapshot outlives the deleted row
    let (logs, _) = EventActionLog::index(0, 10, &mut database.connection.get()).unwrap();
    assert_eq!(logs[0].action, EventAction::Deleted);
    assert_eq!(logs[0].event_id, None);
    assert_eq!(logs[0].event_title, "Doomed Event");
    assert_eq!(logs[0].event_data.as_ref().unwrap()["title"], "Doomed Event");
}

#[actix_rt::test]
async fn destroy_as_editor_without_delete_fails() {
    let database = TestDatabase::new();
    let event = database.create_event().finish();
    let role = database.create_role().with_name("EditOnly").finish();
    let role = role
        .update(
            RoleEditableAttributes {
                can_edit_events: Some(true),
                ..Default::default()
            },
            &mut database.connection.get(),
        )
        .unwrap();
    let member = database.create_user().with_role(&role).finish();
    let auth_user = support::create_auth_user_from_user(&member);

    let response = events::destroy((
        database.connection.clone().into(),
        Path::from(PathParameters { id: event.id }),
        auth_user,
    ))
    .await;
    support::assert_unauthorized(response);
}

#[actix_rt::test]
async fn feed() {
    let database = TestDatabase::new();
    let test_request = TestRequest::create();
    let state = test_request.extract_state();
    let category = database.create_event_category().with_color("#ff8800").finish();
    let event = database
        .create_event()
        .with_title("Twilight Race")
        .with_category(&category)
        .finish();
    database.create_event().in_the_past().finish();

    let response = events::feed((
        state,
        database.connection.clone().into(),
        Query(FeedParameters { start: None, end: None }),
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = support::body_json(response).await;
    let entries = body.as_array().unwrap();
    // Window defaults include the recent past
    assert_eq!(entries.len(), 2);
    let entry = entries.iter().find(|e| e["id"] == json!(event.id)).unwrap();
    assert_eq!(entry["title"], "Twilight Race");
    assert_eq!(entry["color"], "#ff8800");
    assert!(entry["url"].as_str().unwrap().contains(&event.id.to_string()));
}

#[actix_rt::test]
async fn action_logs_requires_editor() {
    let database = TestDatabase::new();
    let auth_user = support::create_auth_user(RoleName::Member, &database);
    let response = events::action_logs((
        database.connection.clone().into(),
        Query(PagingParameters::default()),
        auth_user,
    ))
    .await;
    support::assert_unauthorized(response);

    let editor = support::create_auth_user(RoleName::Editor, &database);
    let response = events::action_logs((
        database.connection.clone().into(),
        Query(PagingParameters::default()),
        editor,
    ))
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
