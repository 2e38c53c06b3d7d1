use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use uuid::Uuid;
use crate::auth::user::User as AuthUser;
use crate::controllers::events::EventContactEntry;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::{EventContactPathParameters, PathParameters};

#[derive(Deserialize)]
pub struct AddContactRequest {
    pub member_id: Uuid,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub responsibilities: String,
}

pub async fn index(
    (connection, parameters): (Connection, Path<PathParameters>),
) -> Result<HttpResponse, ApiError> {
    let event = Event::find(parameters.id, &mut connection.get())?;
    let contacts: Vec<EventContactEntry> = EventContact::find_by_event(event.id, &mut connection.get())?
        .into_iter()
        .map(|(contact, member)| EventContactEntry {
            contact,
            member: member.for_display(),
        })
        .collect();
    Ok(HttpResponse::Ok().json(&contacts))
}

pub async fn create(
    (connection, parameters, add_request, user): (Connection, Path<PathParameters>, Json<AddContactRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let event = Event::find(parameters.id, &mut connection.get())?;

    let mut new_contact = EventContact::create(event.id, add_request.member_id);
    new_contact.is_primary = add_request.is_primary;
    new_contact.responsibilities = add_request.responsibilities.clone();
    let contact = new_contact.commit(&mut connection.get())?;

    Ok(HttpResponse::Created().json(&contact))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<EventContactPathParameters>,
        Json<EventContactEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let contact = EventContact::find(parameters.contact_id, &mut connection.get())?;
    if contact.event_id != parameters.id {
        return application::not_found();
    }
    let contact = contact.update(attributes.into_inner(), &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&contact))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<EventContactPathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let contact = EventContact::find(parameters.contact_id, &mut connection.get())?;
    if contact.event_id != parameters.id {
        return application::not_found();
    }
    contact.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}
