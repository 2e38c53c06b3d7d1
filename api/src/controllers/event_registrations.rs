use actix_web::web::Path;
use actix_web::HttpResponse;
use chrono::Utc;
use db::models::*;
use diesel::PgConnection;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::helpers::application;
use crate::models::PathParameters;

#[derive(Serialize)]
pub struct RegistrantEntry {
    #[serde(flatten)]
    pub registration: EventRegistration,
    pub member: DisplayUser,
    pub guests: Vec<EventGuest>,
}

pub async fn register(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let event = Event::find(parameters.id, &mut connection.get())?;

    let now = Utc::now().naive_utc();
    if !event.can_register(&user.user, now, &mut connection.get())? {
        return application::unprocessable("You cannot register for this event");
    }

    let new_registration = EventRegistration::create(&event, &user.user, &mut connection.get())?;
    let registration = new_registration.commit(&mut connection.get())?;
    Ok(HttpResponse::Created().json(&registration))
}

pub async fn cancel(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let event = Event::find(parameters.id, &mut connection.get())?;

    let registration = match EventRegistration::find_active(event.id, user.id(), &mut connection.get()) {
        Ok(registration) => registration,
        Err(_) => return application::unprocessable("You are not registered for this event"),
    };

    let registration = registration.cancel(&mut connection.get())?;
    Ok(HttpResponse::Ok().json(&registration))
}

pub async fn index(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let event = Event::find(parameters.id, &mut connection.get())?;

    if !can_view_registrants(&event, &user, &mut connection.get())? {
        return application::unauthorized();
    }

    let registrations = EventRegistration::find_by_event(event.id, &mut connection.get())?;
    let mut entries = Vec::with_capacity(registrations.len());
    for (registration, member) in registrations {
        let guests = EventGuest::find_by_registration(registration.id, &mut connection.get())?;
        entries.push(RegistrantEntry {
            registration,
            member: member.for_display(),
            guests,
        });
    }
    Ok(HttpResponse::Ok().json(&entries))
}

/// Applies the event's registrant list visibility. Event managers and
/// contacts can always see the list.
fn can_view_registrants(event: &Event, user: &AuthUser, conn: &mut PgConnection) -> Result<bool, ApiError> {
    let manager = user.has_permission(Permission::EditEvents, conn)?
        || user.has_permission(Permission::ManageUsers, conn)?
        || user.has_permission(Permission::AccessAdmin, conn)?
        || event.is_contact(user.id(), conn)?;
    if manager {
        return Ok(true);
    }

    match event.registrant_list_visibility {
        RegistrantListVisibility::None => Ok(false),
        RegistrantListVisibility::ViewerPublic | RegistrantListVisibility::Members => Ok(true),
        RegistrantListVisibility::RegisteredMembersOnly => Ok(event.is_registered(user.id(), conn)?),
    }
}
