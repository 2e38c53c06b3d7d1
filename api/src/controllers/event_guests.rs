use actix_web::web::{Json, Path};
use actix_web::HttpResponse;
use db::models::*;
use diesel::PgConnection;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::{PathParameters, RegistrationGuestPathParameters};

#[derive(Deserialize)]
pub struct AddGuestRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

pub async fn index(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let registration = EventRegistration::find(parameters.id, &mut connection.get())?;
    if !can_manage_guests(&registration, &user, &mut connection.get())? {
        return application::unauthorized();
    }
    let guests = EventGuest::find_by_registration(registration.id, &mut connection.get())?;
    Ok(HttpResponse::Ok().json(&guests))
}

pub async fn create(
    (connection, parameters, add_request, user): (Connection, Path<PathParameters>, Json<AddGuestRequest>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let registration = EventRegistration::find(parameters.id, &mut connection.get())?;
    if !can_manage_guests(&registration, &user, &mut connection.get())? {
        return application::unauthorized();
    }
    if registration.cancelled {
        return application::unprocessable("Cannot add guests to a cancelled registration");
    }

    let mut new_guest = EventGuest::create(registration.id, &add_request.first_name, &add_request.last_name);
    new_guest.email = add_request.email.clone();
    let guest = new_guest.commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&guest))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<RegistrationGuestPathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let registration = EventRegistration::find(parameters.id, &mut connection.get())?;
    if !can_manage_guests(&registration, &user, &mut connection.get())? {
        return application::unauthorized();
    }
    let guest = EventGuest::find(parameters.guest_id, &mut connection.get())?;
    if guest.event_registration_id != registration.id {
        return application::not_found();
    }
    guest.destroy(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// The registration's owner manages their own guests; event editors and
/// admins can manage anyone's.
fn can_manage_guests(
    registration: &EventRegistration,
    user: &AuthUser,
    conn: &mut PgConnection,
) -> Result<bool, ApiError> {
    if registration.member_id == user.id() {
        return Ok(true);
    }
    Ok(user.has_permission(Permission::EditEvents, conn)?
        || user.has_permission(Permission::ManageUsers, conn)?
        || user.has_permission(Permission::AccessAdmin, conn)?)
}
