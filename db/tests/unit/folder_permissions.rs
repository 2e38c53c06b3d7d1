use burgee_db::models::*;
use burgee_db::test::TestProject;

#[test]
fn commit_upserts() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let folder = project.create_document_folder().finish();
    let role = project.create_role().finish();

    let mut new_permission = FolderPermission::create(folder.id, role.id);
    new_permission.can_view = true;
    let permission = new_permission.commit(&mut connection.get()).unwrap();
    assert!(permission.can_view);
    assert!(!permission.can_edit);

    // A second commit for the same (folder, role) replaces the flags
    let mut replacement = FolderPermission::create(folder.id, role.id);
    replacement.can_view = true;
    replacement.can_edit = true;
    let replaced = replacement.commit(&mut connection.get()).unwrap();
    assert_eq!(replaced.id, permission.id);
    assert!(replaced.can_edit);

    assert_eq!(
        FolderPermission::find_by_folder(folder.id, &mut connection.get())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn grants() {
    let project = TestProject::new();
    let permission = project.create_folder_permission().with_add().finish();
    assert!(permission.grants(FolderAccess::View));
    assert!(permission.grants(FolderAccess::Add));
    assert!(!permission.grants(FolderAccess::Edit));
    assert!(!permission.grants(FolderAccess::Delete));
}

#[test]
fn permissions_cascade_to_descendants() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let role = project.create_role().finish();
    let root = project.create_document_folder().finish();
    let child = project.create_document_folder().with_parent(&root).finish();
    let grandchild = project.create_document_folder().with_parent(&child).finish();

    project
        .create_folder_permission()
        .with_folder(&root)
        .with_role(&role)
        .finish();

    // A view grant on the root is visible all the way down
    assert!(FolderPermission::role_has_access(role.id, &grandchild, FolderAccess::View, &mut connection.get()).unwrap());
    // But does not confer other capabilities
    assert!(
        !FolderPermission::role_has_access(role.id, &grandchild, FolderAccess::Delete, &mut connection.get()).unwrap()
    );
}

#[test]
fn grants_do_not_cascade_upward() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let role = project.create_role().finish();
    let root = project.create_document_folder().finish();
    let child = project.create_document_folder().with_parent(&root).finish();

    project
        .create_folder_permission()
        .with_folder(&child)
        .with_role(&role)
        .finish();

    assert!(FolderPermission::role_has_access(role.id, &child, FolderAccess::View, &mut connection.get()).unwrap());
    assert!(!FolderPermission::role_has_access(role.id, &root, FolderAccess::View, &mut connection.get()).unwrap());
}

#[test]
fn other_roles_gain_nothing() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let role = project.create_role().finish();
    let other_role = project.create_role().finish();
    let folder = project.create_document_folder().finish();

    project
        .create_folder_permission()
        .with_folder(&folder)
        .with_role(&role)
        .finish();

    assert!(!FolderPermission::role_has_access(other_role.id, &folder, FolderAccess::View, &mut connection.get()).unwrap());
}

#[test]
fn accessible_folder_ids() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let role = project.create_role().finish();
    let user = project.create_user().with_role(&role).finish();

    let granted = project.create_document_folder().finish();
    let granted_child = project.create_document_folder().with_parent(&granted).finish();
    let ungranted = project.create_document_folder().finish();

    project
        .create_folder_permission()
        .with_folder(&granted)
        .with_role(&role)
        .finish();

    let ids = FolderPermission::accessible_folder_ids(&user, FolderAccess::View, &mut connection.get()).unwrap();
    assert!(ids.contains(&granted.id));
    assert!(ids.contains(&granted_child.id));
    assert!(!ids.contains(&ungranted.id));

    // A user with no role reaches nothing
    let roleless = project.create_user().finish();
    assert!(
        FolderPermission::accessible_folder_ids(&roleless, FolderAccess::View, &mut connection.get())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn destroy() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let folder = project.create_document_folder().finish();
    let permission = project.create_folder_permission().with_folder(&folder).finish();

    permission.destroy(&mut connection.get()).unwrap();
    assert!(FolderPermission::find_by_folder(folder.id, &mut connection.get())
        .unwrap()
        .is_empty());
}
