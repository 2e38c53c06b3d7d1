use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::models::PathParameters;

pub async fn index((connection, user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let roles = Role::all(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(&roles))
}

pub async fn show(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let role = Role::find(parameters.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&role))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<RoleEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let role = Role::find(parameters.id, &mut connection.get())?;
    let role = role.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&role))
}
