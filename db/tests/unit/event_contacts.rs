use burgee_db::models::*;
use burgee_db::test::TestProject;

#[test]
fn create() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    let member = project.create_user().finish();

    let contact = EventContact::create(event.id, member.id).commit(&mut connection.get()).unwrap();
    assert_eq!(contact.event_id, event.id);
    assert_eq!(contact.member_id, member.id);
    assert!(!contact.is_primary);
}

#[test]
fn duplicate_member_is_rejected() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    let member = project.create_user().finish();
    project.create_event_contact().with_event(&event).with_member(&member).finish();

    let result = EventContact::create(event.id, member.id).commit(&mut connection.get());
    assert_eq!(result.err().unwrap().code, 3400);
}

#[test]
fn only_one_primary_contact_per_event() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();

    let first = project.create_event_contact().with_event(&event).primary().finish();
    let second = project.create_event_contact().with_event(&event).primary().finish();

    let first = EventContact::find(first.id, &mut connection.get()).unwrap();
    assert!(!first.is_primary);
    assert!(second.is_primary);

    let primary = EventContact::primary_contact(event.id, &mut connection.get()).unwrap();
    assert_eq!(primary.unwrap().id, second.id);
}

#[test]
fn promoting_a_contact_demotes_the_previous_primary() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    let first = project.create_event_contact().with_event(&event).primary().finish();
    let second = project.create_event_contact().with_event(&event).finish();

    let second = second
        .update(
            EventContactEditableAttributes {
                is_primary: Some(true),
                ..Default::default()
            },
            &mut connection.get(),
        )
        .unwrap();
    assert!(second.is_primary);
    assert!(!EventContact::find(first.id, &mut connection.get()).unwrap().is_primary);
}

#[test]
fn find_by_event_orders_primary_first() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    project.create_event_contact().with_event(&event).finish();
    let primary = project.create_event_contact().with_event(&event).primary().finish();

    let contacts = EventContact::find_by_event(event.id, &mut connection.get()).unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].0.id, primary.id);
}

#[test]
fn destroy() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let event = project.create_event().finish();
    let contact = project.create_event_contact().with_event(&event).finish();

    contact.destroy(&mut connection.get()).unwrap();
    assert!(EventContact::find_by_event(event.id, &mut connection.get()).unwrap().is_empty());
}
