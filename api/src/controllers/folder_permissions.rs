use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use uuid::Uuid;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::{FolderPermissionPathParameters, PathParameters};

#[derive(Deserialize)]
pub struct GrantPermissionRequest {
    pub role_id: Uuid,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

pub async fn index(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    if !user.is_document_manager(&mut connection.get())? {
        return application::unauthorized();
    }
    let folder = DocumentFolder::find(parameters.id, &mut connection.get())?;
    let permissions = FolderPermission::find_by_folder(folder.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&permissions))
}

/// Grants (or replaces) a role's capabilities on the folder. The grant
/// cascades to every descendant folder.
pub async fn create(
    (connection, parameters, grant_request, user): (
        Connection,
        Path<PathParameters>,
        Json<GrantPermissionRequest>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    if !user.is_document_manager(&mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to manage folder permissions");
    }
    let folder = DocumentFolder::find(parameters.id, &mut connection.get())?;
    // 404 if the role does not exist rather than a constraint error
    let role = Role::find(grant_request.role_id, &mut connection.get())?;

    let permission = NewFolderPermission {
        folder_id: folder.id,
        role_id: role.id,
        can_view: grant_request.can_view,
        can_add: grant_request.can_add,
        can_edit: grant_request.can_edit,
        can_delete: grant_request.can_delete,
    }
    .commit(&mut connection.get())?;

    Ok(HttpResponse::Created().json(&permission))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<FolderPermissionPathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    if !user.is_document_manager(&mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to manage folder permissions");
    }
    let permission = FolderPermission::find(parameters.permission_id, &mut connection.get())?;
    if permission.folder_id != parameters.id {
        return application::not_found();
    }
    permission.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}
