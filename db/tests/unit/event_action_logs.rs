use burgee_db::models::*;
use burgee_db::test::TestProject;
use serde_json::json;

#[test]
fn create() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    let user = project.create_user().finish();

    let mut new_log = EventActionLog::create(Some(event.id), Some(user.id), EventAction::Created, &event.title);
    new_log.ip_address = Some("127.0.0.1".to_string());
    new_log.user_agent = Some("tests".to_string());
    let log = new_log.commit(&mut connection.get()).unwrap();

    assert_eq!(log.event_id, Some(event.id));
    assert_eq!(log.user_id, Some(user.id));
    assert_eq!(log.action, EventAction::Created);
    assert_eq!(log.event_title, event.title);
}

#[test]
fn deletion_snapshot_survives_the_event() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    let title = event.title.clone();

    let mut new_log = EventActionLog::create(None, None, EventAction::Deleted, &title);
    new_log.event_data = Some(json!({"title": title, "short_description": event.short_description}));
    let log = new_log.commit(&mut connection.get()).unwrap();
    event.destroy(&mut connection.get()).unwrap();

    let logs = EventActionLog::index(0, 100, &mut connection.get()).unwrap().0;
    assert!(logs.iter().any(|l| l.id == log.id));
    assert_eq!(log.event_data.unwrap()["title"], title.as_str());
}

#[test]
fn index_is_newest_first() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();

    EventActionLog::create(Some(event.id), None, EventAction::Created, &event.title)
        .commit(&mut connection.get())
        .unwrap();
    let updated = EventActionLog::create(Some(event.id), None, EventAction::Updated, &event.title)
        .commit(&mut connection.get())
        .unwrap();

    let (logs, total) = EventActionLog::index(0, 100, &mut connection.get()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(logs[0].id, updated.id);
}
