use burgee_db::models::*;
use burgee_db::test::TestProject;

#[test]
fn create() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().registerable().finish();
    let member = project.create_user().finish();

    let new_registration = EventRegistration::create(&event, &member, &mut connection.get()).unwrap();
    let registration = new_registration.commit(&mut connection.get()).unwrap();

    assert_eq!(registration.event_id, event.id);
    assert_eq!(registration.member_id, member.id);
    assert_eq!(registration.fee_in_cents, 0);
    assert!(!registration.cancelled);
    assert!(registration.cancelled_at.is_none());
}

#[test]
fn create_snapshots_fee() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let member_type = project.create_member_type().finish();
    let event = project.create_event().registerable().finish();
    project
        .create_event_registration_fee()
        .with_event(&event)
        .with_member_type(&member_type)
        .with_fee(4200)
        .finish();
    let member = project.create_user().with_member_type(&member_type).finish();

    let new_registration = EventRegistration::create(&event, &member, &mut connection.get()).unwrap();
    let registration = new_registration.commit(&mut connection.get()).unwrap();
    assert_eq!(registration.fee_in_cents, 4200);
}

#[test]
fn duplicate_active_registration_is_rejected() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().registerable().finish();
    let member = project.create_user().finish();
    project
        .create_event_registration()
        .with_event(&event)
        .with_member(&member)
        .finish();

    let new_registration = EventRegistration::create(&event, &member, &mut connection.get()).unwrap();
    let result = new_registration.commit(&mut connection.get());
    assert!(result.is_err());
}

#[test]
fn cancel() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let registration = project.create_event_registration().finish();

    let cancelled = registration.cancel(&mut connection.get()).unwrap();
    assert!(cancelled.cancelled);
    assert!(cancelled.cancelled_at.is_some());

    // A cancelled registration cannot be cancelled again
    assert!(cancelled.cancel(&mut connection.get()).is_err());
}

#[test]
fn reregistering_after_cancel_is_allowed() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().registerable().finish();
    let member = project.create_user().finish();

    let registration = project
        .create_event_registration()
        .with_event(&event)
        .with_member(&member)
        .finish();
    registration.cancel(&mut connection.get()).unwrap();

    let new_registration = EventRegistration::create(&event, &member, &mut connection.get()).unwrap();
    let second = new_registration.commit(&mut connection.get()).unwrap();
    assert!(!second.cancelled);
}

#[test]
fn find_by_event_excludes_cancelled() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().registerable().finish();
    let active_member = project.create_user().finish();
    project
        .create_event_registration()
        .with_event(&event)
        .with_member(&active_member)
        .finish();
    let cancelled = project.create_event_registration().with_event(&event).finish();
    cancelled.cancel(&mut connection.get()).unwrap();

    let registrations = EventRegistration::find_by_event(event.id, &mut connection.get()).unwrap();
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].1.id, active_member.id);
}

#[test]
fn find_active() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().registerable().finish();
    let member = project.create_user().finish();
    let registration = project
        .create_event_registration()
        .with_event(&event)
        .with_member(&member)
        .finish();

    let found = EventRegistration::find_active(event.id, member.id, &mut connection.get()).unwrap();
    assert_eq!(found.id, registration.id);

    registration.cancel(&mut connection.get()).unwrap();
    assert!(EventRegistration::find_active(event.id, member.id, &mut connection.get()).is_err());
}
