use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use uuid::Uuid;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::{EventFeePathParameters, PathParameters};

#[derive(Deserialize)]
pub struct AddFeeRequest {
    pub member_type_id: Uuid,
    pub fee_in_cents: i64,
}

pub async fn index((connection, parameters): (Connection, Path<PathParameters>)) -> Result<HttpResponse, ApiError> {
    let event = Event::find(parameters.id, &mut connection.get())?;
    let fees = EventRegistrationFee::find_by_event(event.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&fees))
}

pub async fn create(
    (connection, parameters, add_request, user): (Connection, Path<PathParameters>, Json<AddFeeRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let event = Event::find(parameters.id, &mut connection.get())?;

    let fee = EventRegistrationFee::create(event.id, add_request.member_type_id, add_request.fee_in_cents)
        .commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&fee))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<EventFeePathParameters>,
        Json<EventRegistrationFeeEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let fee = EventRegistrationFee::find(parameters.fee_id, &mut connection.get())?;
    if fee.event_id != parameters.id {
        return application::not_found();
    }
    let fee = fee.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&fee))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<EventFeePathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let fee = EventRegistrationFee::find(parameters.fee_id, &mut connection.get())?;
    if fee.event_id != parameters.id {
        return application::not_found();
    }
    fee.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}
