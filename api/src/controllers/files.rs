use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::web::{Bytes, Json, Path, Query};
use actix_web::{HttpRequest, HttpResponse};
use db::models::*;
use db::utils::text::sanitize_name;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::PathParameters;
use crate::server::GetAppState;
use crate::utils::storage;

#[derive(Deserialize)]
pub struct UploadParameters {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Upload into a folder: metadata in the query string, content as the raw
/// request body.
pub async fn create(
    (http_request, connection, parameters, upload, body, user): (
        HttpRequest,
        Connection,
        Path<PathParameters>,
        Query<UploadParameters>,
        Bytes,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    let folder = DocumentFolder::find(parameters.id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::Add, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to add files to this folder");
    }
    if upload.name.trim().is_empty() {
        return application::bad_request("File name cannot be blank");
    }
    if body.is_empty() {
        return application::bad_request("File content cannot be empty");
    }

    let state = http_request.state();
    let folder_storage_path = folder.storage_path(&mut connection.get())?;
    let stored_path = storage::store(&state.config, &folder_storage_path, &upload.name, &body)?;

    let mut new_file = DocumentFile::create(folder.id, upload.name.trim(), &stored_path);
    new_file.description = upload.description.clone();
    new_file.uploaded_by = Some(user.id());
    new_file.file_size = Some(body.len() as i64);
    new_file.mime_type = mime_guess::from_path(&upload.name)
        .first()
        .map(|mime| mime.to_string());
    let file = new_file.commit(&mut connection.get())?;

    Ok(HttpResponse::Created().json(&file))
}

pub async fn show(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let file = DocumentFile::find(parameters.id, &mut connection.get())?;
    let folder = DocumentFolder::find(file.folder_id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::View, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to view this file");
    }
    Ok(HttpResponse::Ok().json(&file))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<DocumentFileEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    let file = DocumentFile::find(parameters.id, &mut connection.get())?;
    let folder = DocumentFolder::find(file.folder_id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::Edit, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to edit this file");
    }
    let file = file.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&file))
}

pub async fn download(
    (http_request, connection, parameters, user): (HttpRequest, Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let file = DocumentFile::find(parameters.id, &mut connection.get())?;
    let folder = DocumentFolder::find(file.folder_id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::View, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to download this file");
    }

    let state = http_request.state();
    let absolute_path = storage::absolute_path(&state.config, &file.stored_path);
    let named_file = NamedFile::open(absolute_path)?.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(sanitize_name(&file.name))],
    });
    Ok(named_file.into_response(&http_request))
}

pub async fn destroy(
    (http_request, connection, parameters, user): (HttpRequest, Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let file = DocumentFile::find(parameters.id, &mut connection.get())?;
    let folder = DocumentFolder::find(file.folder_id, &mut connection.get())?;
    if !user.can_access_folder(&folder, FolderAccess::Delete, &mut connection.get())? {
        return application::unauthorized_with_message("You don't have permission to delete this file");
    }

    let stored_path = file.stored_path.clone();
    file.destroy(&mut connection.get())?;

    let state = http_request.state();
    storage::remove(&state.config, &stored_path);

    Ok(HttpResponse::Ok().json(json!({})))
}
