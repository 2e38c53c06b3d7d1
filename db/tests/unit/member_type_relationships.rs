use burgee_db::models::*;
use burgee_db::test::TestProject;

#[test]
fn create() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let parent_type = project.create_member_type().parentable().finish();
    let child_type = project.create_member_type().childable().finish();

    let relationship = MemberTypeRelationship::create(parent_type.id, child_type.id, "First Mate")
        .commit(&mut connection.get())
        .unwrap();

    assert_eq!(relationship.parent_type_id, parent_type.id);
    assert_eq!(relationship.child_type_id, child_type.id);
    assert_eq!(relationship.relationship_name, "First Mate");
    assert_eq!(relationship.max_children, None);
    assert!(relationship.is_active);
}

#[test]
fn create_rejects_same_type() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let member_type = project.create_member_type().parentable().childable().finish();

    let result = MemberTypeRelationship::create(member_type.id, member_type.id, "Child").commit(&mut connection.get());
    assert!(result.is_err());
}

#[test]
fn create_rejects_unconfigured_types() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let plain = project.create_member_type().finish();
    let child_type = project.create_member_type().childable().finish();
    let parent_type = project.create_member_type().parentable().finish();

    // Parent type lacking can_be_parent
    assert!(MemberTypeRelationship::create(plain.id, child_type.id, "Child")
        .commit(&mut connection.get())
        .is_err());

    // Child type lacking can_be_child
    assert!(MemberTypeRelationship::create(parent_type.id, plain.id, "Child")
        .commit(&mut connection.get())
        .is_err());
}

#[test]
fn duplicate_pair_is_rejected() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let parent_type = project.create_member_type().parentable().finish();
    let child_type = project.create_member_type().childable().finish();

    project
        .create_member_type_relationship()
        .with_parent_type(&parent_type)
        .with_child_type(&child_type)
        .finish();

    let result = MemberTypeRelationship::create(parent_type.id, child_type.id, "Again").commit(&mut connection.get());
    assert_eq!(result.err().unwrap().code, 3400);
}

#[test]
fn find_valid() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let parent_type = project.create_member_type().parentable().finish();
    let child_type = project.create_member_type().childable().finish();
    let other_type = project.create_member_type().childable().finish();
    let relationship = project
        .create_member_type_relationship()
        .with_parent_type(&parent_type)
        .with_child_type(&child_type)
        .finish();

    let found =
        MemberTypeRelationship::find_valid(&[parent_type.id], &[child_type.id], &mut connection.get()).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, relationship.id);

    let found = MemberTypeRelationship::find_valid(&[parent_type.id], &[other_type.id], &mut connection.get()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn find_valid_ignores_inactive() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let parent_type = project.create_member_type().parentable().finish();
    let child_type = project.create_member_type().childable().finish();
    let relationship = project
        .create_member_type_relationship()
        .with_parent_type(&parent_type)
        .with_child_type(&child_type)
        .finish();

    relationship
        .update(
            MemberTypeRelationshipEditableAttributes {
                is_active: Some(false),
                ..Default::default()
            },
            &mut connection.get(),
        )
        .unwrap();

    let found =
        MemberTypeRelationship::find_valid(&[parent_type.id], &[child_type.id], &mut connection.get()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn update() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let relationship = project.create_member_type_relationship().finish();

    let updated = relationship
        .update(
            MemberTypeRelationshipEditableAttributes {
                relationship_name: Some("Spouse".to_string()),
                max_children: Some(Some(2)),
                ..Default::default()
            },
            &mut connection.get(),
        )
        .unwrap();
    assert_eq!(updated.relationship_name, "Spouse");
    assert_eq!(updated.max_children, Some(2));

    // Capacity below one is rejected
    let result = updated.update(
        MemberTypeRelationshipEditableAttributes {
            max_children: Some(Some(0)),
            ..Default::default()
        },
        &mut connection.get(),
    );
    assert!(result.is_err());
}

#[test]
fn destroy() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let relationship = project.create_member_type_relationship().finish();
    relationship.destroy(&mut connection.get()).unwrap();
    assert_eq!(MemberTypeRelationship::all(&mut connection.get()).unwrap().len(), 0);
}
