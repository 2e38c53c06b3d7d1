use burgee_db::models::*;
use burgee_db::test::TestProject;

#[test]
fn create() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let user = project.create_user().finish();

    let folder = DocumentFolder::create("Club Documents", None, Some(user.id))
        .commit(&mut connection.get())
        .unwrap();
    assert_eq!(folder.name, "Club Documents");
    assert_eq!(folder.parent_id, None);
    assert_eq!(folder.created_by, Some(user.id));
}

#[test]
fn sibling_names_are_unique() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().with_name("Racing").finish();
    project
        .create_document_folder()
        .with_name("2026")
        .with_parent(&root)
        .finish();

    let result = DocumentFolder::create("2026", Some(root.id), None).commit(&mut connection.get());
    assert_eq!(result.err().unwrap().code, 3400);

    let result = DocumentFolder::create("Racing", None, None).commit(&mut connection.get());
    assert_eq!(result.err().unwrap().code, 3400);

    // Same name under a different parent is fine
    let other = project.create_document_folder().with_name("Cruising").finish();
    assert!(DocumentFolder::create("2026", Some(other.id), None)
        .commit(&mut connection.get())
        .is_ok());
}

#[test]
fn ancestors_and_descendants() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().with_name("Racing").finish();
    let season = project.create_document_folder().with_name("2026").with_parent(&root).finish();
    let results = project
        .create_document_folder()
        .with_name("Results")
        .with_parent(&season)
        .finish();

    let ancestors = results.ancestors(&mut connection.get()).unwrap();
    assert_eq!(
        ancestors.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![root.id, season.id]
    );

    let mut descendant_ids: Vec<_> = root
        .descendants(&mut connection.get())
        .unwrap()
        .iter()
        .map(|f| f.id)
        .collect();
    descendant_ids.sort();
    let mut expected = vec![season.id, results.id];
    expected.sort();
    assert_eq!(descendant_ids, expected);
}

#[test]
fn full_path_and_storage_path() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().with_name("Race Committee").finish();
    let child = project
        .create_document_folder()
        .with_name("Sailing Instructions")
        .with_parent(&root)
        .finish();

    assert_eq!(
        child.full_path(&mut connection.get()).unwrap(),
        "Race Committee/Sailing Instructions"
    );
    assert_eq!(
        child.storage_path(&mut connection.get()).unwrap(),
        "Race_Committee/Sailing_Instructions"
    );
}

#[test]
fn update_reparents() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().finish();
    let other_root = project.create_document_folder().finish();
    let child = project.create_document_folder().with_parent(&root).finish();

    let child = child
        .update(
            DocumentFolderEditableAttributes {
                parent_id: Some(Some(other_root.id)),
                ..Default::default()
            },
            &mut connection.get(),
        )
        .unwrap();
    assert_eq!(child.parent_id, Some(other_root.id));
}

#[test]
fn update_rejects_cycles() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().finish();
    let child = project.create_document_folder().with_parent(&root).finish();
    let grandchild = project.create_document_folder().with_parent(&child).finish();

    // A folder cannot be its own parent
    let result = root.update(
        DocumentFolderEditableAttributes {
            parent_id: Some(Some(root.id)),
            ..Default::default()
        },
        &mut connection.get(),
    );
    assert!(result.is_err());

    // Nor may it move beneath one of its descendants
    let result = root.update(
        DocumentFolderEditableAttributes {
            parent_id: Some(Some(grandchild.id)),
            ..Default::default()
        },
        &mut connection.get(),
    );
    assert!(result.is_err());
}

#[test]
fn destroy_cascades() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().finish();
    let child = project.create_document_folder().with_parent(&root).finish();
    project.create_document_file().with_folder(&child).finish();

    root.destroy(&mut connection.get()).unwrap();
    assert!(DocumentFolder::find(child.id, &mut connection.get()).is_err());
}

#[test]
fn roots() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let root = project.create_document_folder().finish();
    project.create_document_folder().with_parent(&root).finish();

    let roots = DocumentFolder::roots(&mut connection.get()).unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, root.id);
}
