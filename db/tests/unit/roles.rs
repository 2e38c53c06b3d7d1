use burgee_db::models::*;
use burgee_db::test::TestProject;

#[test]
fn create_defaults() {
    let project = TestProject::new();
    let connection = project.get_connection();

    let roles = Role::create_defaults(&mut connection.get()).unwrap();
    assert_eq!(roles.len(), 4);

    let admin = Role::find_by_name(RoleName::Admin, &mut connection.get()).unwrap();
    assert!(admin.can_manage_users);
    assert!(admin.can_access_admin);

    let viewer = Role::find_by_name(RoleName::Viewer, &mut connection.get()).unwrap();
    assert!(viewer.can_view_events);
    assert!(!viewer.can_create_events);

    // Rerunning must not duplicate or reset rows
    let roles_again = Role::create_defaults(&mut connection.get()).unwrap();
    assert_eq!(roles_again.len(), 4);
    assert_eq!(Role::all(&mut connection.get()).unwrap().len(), 4);
}

#[test]
fn has() {
    let project = TestProject::new();
    let editor = project.create_role().editor().finish();

    assert!(editor.has(Permission::ViewEvents));
    assert!(editor.has(Permission::CreateEvents));
    assert!(editor.has(Permission::EditEvents));
    assert!(editor.has(Permission::DeleteEvents));
    assert!(editor.has(Permission::ManageCategories));
    assert!(!editor.has(Permission::ManageUsers));
    assert!(!editor.has(Permission::AccessAdmin));
}

#[test]
fn permissions() {
    let project = TestProject::new();
    let viewer = project.create_role().viewer().finish();
    assert_eq!(viewer.permissions(), vec![Permission::ViewEvents]);

    let admin = project.create_role().admin().finish();
    assert_eq!(admin.permissions().len(), 7);
}

#[test]
fn update() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let role = project.create_role().finish();

    let attributes = RoleEditableAttributes {
        description: Some("Race committee".to_string()),
        can_create_events: Some(true),
        ..Default::default()
    };
    let updated = role.update(attributes, &mut connection.get()).unwrap();
    assert_eq!(updated.description, "Race committee");
    assert!(updated.can_create_events);
    assert!(updated.can_view_events);
}

#[test]
fn duplicate_name_is_rejected() {
    let project = TestProject::new();
    let role = project.create_role().finish();

    let result = NewRole {
        name: role.name.clone(),
        description: "".to_string(),
        can_view_events: true,
        can_create_events: false,
        can_edit_events: false,
        can_delete_events: false,
        can_manage_categories: false,
        can_manage_users: false,
        can_access_admin: false,
    }
    .commit(&mut project.get_connection().get());

    let error = result.err().unwrap();
    assert_eq!(error.code, 3400);
}
