use actix_web::web::{Json, Path, Query};
use actix_web::HttpResponse;
use db::models::*;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::models::PathParameters;

#[derive(Deserialize)]
pub struct MemberTypeFilterParameters {
    #[serde(default)]
    pub active_only: bool,
}

pub async fn index(
    (connection, query, user): (Connection, Query<MemberTypeFilterParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member_types = MemberType::all(query.active_only, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&member_types))
}

pub async fn show(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member_type = MemberType::find(parameters.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&member_type))
}

pub async fn create(
    (connection, new_member_type, user): (Connection, Json<NewMemberType>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member_type = new_member_type.into_inner().commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&member_type))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<MemberTypeEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member_type = MemberType::find(parameters.id, &mut connection.get())?;
    let member_type = member_type.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&member_type))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let member_type = MemberType::find(parameters.id, &mut connection.get())?;
    member_type.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}
