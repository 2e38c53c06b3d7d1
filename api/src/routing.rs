use actix_web::web;
use actix_web::HttpResponse;
use crate::controllers::*;

pub fn routes(app: &mut web::ServiceConfig) {
    app.service(
        web::resource("/status").route(web::get().to(|| async { HttpResponse::Ok().json(json!({"status": "up"})) })),
    )
    .service(
        web::resource("/auth/token").route(web::post().to(auth::token)),
    )
    .service(web::resource("/auth/token/refresh").route(web::post().to(auth::token_refresh)))
    .service(
        web::resource("/users/me")
            .route(web::get().to(users::current_user))
            .route(web::put().to(users::update_current_user)),
    )
    .service(
        web::resource("/members")
            .route(web::get().to(members::index))
            .route(web::post().to(members::create)),
    )
    .service(web::resource("/members/{id}/dependents").route(web::get().to(members::dependents)))
    .service(
        web::resource("/members/{id}")
            .route(web::get().to(members::show))
            .route(web::put().to(members::update))
            .route(web::delete().to(members::destroy)),
    )
    .service(web::resource("/roles").route(web::get().to(roles::index)))
    .service(
        web::resource("/roles/{id}")
            .route(web::get().to(roles::show))
            .route(web::put().to(roles::update)),
    )
    .service(
        web::resource("/member_types")
            .route(web::get().to(member_types::index))
            .route(web::post().to(member_types::create)),
    )
    .service(
        web::resource("/member_types/{id}")
            .route(web::get().to(member_types::show))
            .route(web::put().to(member_types::update))
            .route(web::delete().to(member_types::destroy)),
    )
    .service(
        web::resource("/member_type_relationships")
            .route(web::get().to(member_type_relationships::index))
            .route(web::post().to(member_type_relationships::create)),
    )
    .service(
        web::resource("/member_type_relationships/{id}")
            .route(web::put().to(member_type_relationships::update))
            .route(web::delete().to(member_type_relationships::destroy)),
    )
    .service(
        web::resource("/event_categories")
            .route(web::get().to(event_categories::index))
            .route(web::post().to(event_categories::create)),
    )
    .service(
        web::resource("/event_categories/{id}")
            .route(web::get().to(event_categories::show))
            .route(web::put().to(event_categories::update))
            .route(web::delete().to(event_categories::destroy)),
    )
    .service(web::resource("/events/feed").route(web::get().to(events::feed)))
    .service(web::resource("/events/action_log").route(web::get().to(events::action_logs)))
    .service(
        web::resource("/events")
            .route(web::get().to(events::index))
            .route(web::post().to(events::create)),
    )
    .service(
        web::resource("/events/{id}/contacts")
            .route(web::get().to(event_contacts::index))
            .route(web::post().to(event_contacts::create)),
    )
    .service(
        web::resource("/events/{id}/contacts/{contact_id}")
            .route(web::put().to(event_contacts::update))
            .route(web::delete().to(event_contacts::destroy)),
    )
    .service(
        web::resource("/events/{id}/fees")
            .route(web::get().to(event_registration_fees::index))
            .route(web::post().to(event_registration_fees::create)),
    )
    .service(
        web::resource("/events/{id}/fees/{fee_id}")
            .route(web::put().to(event_registration_fees::update))
            .route(web::delete().to(event_registration_fees::destroy)),
    )
    .service(
        web::resource("/events/{id}/register")
            .route(web::post().to(event_registrations::register))
            .route(web::delete().to(event_registrations::cancel)),
    )
    .service(web::resource("/events/{id}/registrations").route(web::get().to(event_registrations::index)))
    .service(
        web::resource("/events/{id}")
            .route(web::get().to(events::show))
            .route(web::put().to(events::update))
            .route(web::delete().to(events::destroy)),
    )
    .service(
        web::resource("/registrations/{id}/guests")
            .route(web::get().to(event_guests::index))
            .route(web::post().to(event_guests::create)),
    )
    .service(web::resource("/registrations/{id}/guests/{guest_id}").route(web::delete().to(event_guests::destroy)))
    .service(web::resource("/folders/accessible").route(web::get().to(folders::accessible)))
    .service(
        web::resource("/folders")
            .route(web::get().to(folders::index))
            .route(web::post().to(folders::create)),
    )
    .service(
        web::resource("/folders/{id}/permissions")
            .route(web::get().to(folder_permissions::index))
            .route(web::post().to(folder_permissions::create)),
    )
    .service(
        web::resource("/folders/{id}/permissions/{permission_id}")
            .route(web::delete().to(folder_permissions::destroy)),
    )
    .service(web::resource("/folders/{id}/files").route(web::post().to(files::create)))
    .service(
        web::resource("/folders/{id}")
            .route(web::get().to(folders::show))
            .route(web::put().to(folders::update))
            .route(web::delete().to(folders::destroy)),
    )
    .service(web::resource("/files/{id}/download").route(web::get().to(files::download)))
    .service(
        web::resource("/files/{id}")
            .route(web::get().to(files::show))
            .route(web::put().to(files::update))
            .route(web::delete().to(files::destroy)),
    );
}
