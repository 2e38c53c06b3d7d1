use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::models::PathParameters;

pub async fn index(connection: Connection) -> Result<HttpResponse, ApiError> {
    let categories = EventCategory::all(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(&categories))
}

pub async fn show((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let category = EventCategory::find(parameters.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&category))
}

pub async fn create(
    (connection, new_category, user): (Connection, Json<NewEventCategory>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageCategories, &mut connection.get())?;
    let category = new_category.into_inner().commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&category))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<EventCategoryEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageCategories, &mut connection.get())?;
    let category = EventCategory::find(parameters.id, &mut connection.get())?;
    let category = category.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&category))
}

/// Events in the category are left uncategorized; the response reports how
/// many.
pub async fn destroy(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageCategories, &mut connection.get())?;
    let category = EventCategory::find(parameters.id, &mut connection.get())?;
    let uncategorized_events = category.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({ "uncategorized_events": uncategorized_events })))
}
