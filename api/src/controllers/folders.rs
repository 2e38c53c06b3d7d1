use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::PathParameters;

#[derive(Serialize)]
pub struct FolderDetails {
    #[serde(flatten)]
    pub folder: DocumentFolder,
    pub breadcrumbs: Vec<DocumentFolder>,
    pub subfolders: Vec<DocumentFolder>,
    pub files: Vec<DocumentFile>,
    pub permissions: Vec<FolderPermission>,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Management listing of root folders.
pub async fn index((connection, user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    if !user.is_document_manager(&mut connection.get())? {
        return application::unauthorized();
    }
    let folders = DocumentFolder::roots(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(&folders))
}

/// Folders the caller can view through the permission cascade.
pub async fn accessible((connection, user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    if user.is_document_manager(&mut connection.get())? {
        let folders = DocumentFolder::all(&mut connection.get())?;
        return Ok(HttpResponse::Ok().json(&folders));
    }

    let folder_ids = FolderPermission::accessible_folder_ids(&user.user, FolderAccess::View, &mut connection.get())?;
    let mut folders = Vec::with_capacity(folder_ids.len());
    for folder_id in folder_ids {
        folders.push(DocumentFolder::find(folder_id, &mut connection.get())?);
    }
    folders.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(HttpResponse::Ok().json(&folders))
}

pub async fn show(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let folder = DocumentFolder::find(parameters.id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::View, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to view this folder");
    }

    let breadcrumbs = folder.ancestors(&mut connection.get())?;
    let all_subfolders = folder.subfolders(&mut connection.get())?;
    let mut subfolders = Vec::with_capacity(all_subfolders.len());
    for subfolder in all_subfolders {
        if user.can_access_folder(&subfolder, FolderAccess::View, &mut connection.get())? {
            subfolders.push(subfolder);
        }
    }
    let files = DocumentFile::find_by_folder(folder.id, &mut connection.get())?;
    let permissions = FolderPermission::find_by_folder(folder.id, &mut connection.get())?;
    let can_add = user.can_access_folder(&folder, FolderAccess::Add, &mut connection.get())?;
    let can_edit = user.can_access_folder(&folder, FolderAccess::Edit, &mut connection.get())?;
    let can_delete = user.can_access_folder(&folder, FolderAccess::Delete, &mut connection.get())?;

    let details = FolderDetails {
        folder,
        breadcrumbs,
        subfolders,
        files,
        permissions,
        can_add,
        can_edit,
        can_delete,
    };
    Ok(HttpResponse::Ok().json(&details))
}

pub async fn create(
    (connection, new_folder, user): (Connection, Json<NewDocumentFolder>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let mut new_folder = new_folder.into_inner();

    let allowed = match new_folder.parent_id {
        // Creating inside a folder is open to anyone with an add grant there
        Some(parent_id) => {
            let parent = DocumentFolder::find(parent_id, &mut connection.get())?;
            user.can_access_folder(&parent, FolderAccess::Add, &mut connection.get())?
        }
        // Root folders are a management concern
        None => user.is_document_manager(&mut connection.get())?,
    };
    if !allowed {
        return application::unauthorized_with_message("You don't have permission to add to this folder");
    }

    new_folder.created_by = Some(user.id());
    let folder = new_folder.commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&folder))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<DocumentFolderEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    let folder = DocumentFolder::find(parameters.id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::Edit, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to edit this folder");
    }
    let folder = folder.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&folder))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let folder = DocumentFolder::find(parameters.id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::Delete, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to delete this folder");
    }
    folder.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}
