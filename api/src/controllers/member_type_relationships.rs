use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::models::PathParameters;

pub async fn index((connection, user): (Connection, AuthUser)) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let relationships = MemberTypeRelationship::all(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(&relationships))
}

pub async fn create(
    (connection, new_relationship, user): (Connection, Json<NewMemberTypeRelationship>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let relationship = new_relationship.into_inner().commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&relationship))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<MemberTypeRelationshipEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let relationship = MemberTypeRelationship::find(parameters.id, &mut connection.get())?;
    let relationship = relationship.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&relationship))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::ManageUsers, &mut connection.get())?;
    let relationship = MemberTypeRelationship::find(parameters.id, &mut connection.get())?;
    relationship.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}
