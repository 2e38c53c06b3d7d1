use actix_web::web::{Data, Json, Path, Query};
use actix_web::HttpResponse;
use chrono::{Duration, NaiveDateTime, Utc};
use db::models::*;
use diesel::PgConnection;
use uuid::Uuid;
use crate::auth::user::User as AuthUser;
use crate::database::Connection;
use crate::errors::*;
use crate::extractors::OptionalUser;
use crate::helpers::application;
use crate::models::PathParameters;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct EventFilterParameters {
    pub category_id: Option<Uuid>,
    pub past_or_upcoming: Option<PastOrUpcoming>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Deserialize)]
pub struct FeedParameters {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

#[derive(Serialize)]
pub struct EventContactEntry {
    #[serde(flatten)]
    pub contact: EventContact,
    pub member: DisplayUser,
}

#[derive(Serialize)]
pub struct EventShowResult {
    #[serde(flatten)]
    pub event: Event,
    pub category: Option<EventCategory>,
    pub contacts: Vec<EventContactEntry>,
    pub registration_count: i64,
    pub can_register: bool,
    pub is_registered: bool,
}

/// One entry in the calendar feed, shaped for calendar libraries.
#[derive(Serialize)]
pub struct CalendarFeedEntry {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub description: String,
    pub url: String,
    pub color: String,
    pub category: String,
}

const DEFAULT_CATEGORY_COLOR: &str = "#007bff";

pub async fn index(
    (connection, query): (Connection, Query<EventFilterParameters>),
) -> Result<HttpResponse, ApiError> {
    let page = query.page.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);
    let (events, total) = Event::index(
        query.category_id,
        query.past_or_upcoming,
        page as i64,
        limit as i64,
        &mut connection.get(),
    )?;

    let paging = Paging {
        page,
        limit,
        sort: "start_datetime".to_string(),
        dir: SortingDir::Asc,
        total: total as u64,
    };
    Ok(HttpResponse::Ok().json(Payload::new(events, paging)))
}

pub async fn show(
    (connection, parameters, optional_user): (Connection, Path<PathParameters>, OptionalUser),
) -> Result<HttpResponse, ApiError> {
    let event = Event::find(parameters.id, &mut connection.get())?;
    let category = event.category(&mut connection.get())?;
    let contacts = EventContact::find_by_event(event.id, &mut connection.get())?
        .into_iter()
        .map(|(contact, member)| EventContactEntry {
            contact,
            member: member.for_display(),
        })
        .collect();
    let registration_count = event.registration_count(&mut connection.get())?;

    let (can_register, is_registered) = match optional_user.into_inner() {
        Some(user) => {
            let now = Utc::now().naive_utc();
            let can_register = event.can_register(&user.user, now, &mut connection.get())?;
            let is_registered = event.is_registered(user.id(), &mut connection.get())?;
            (can_register, is_registered)
        }
        None => (false, false),
    };

    let result = EventShowResult {
        event,
        category,
        contacts,
        registration_count,
        can_register,
        is_registered,
    };
    Ok(HttpResponse::Ok().json(&result))
}

pub async fn create(
    (connection, new_event, user): (Connection, Json<NewEvent>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::CreateEvents, &mut connection.get())?;
    let event = new_event.into_inner().commit(&mut connection.get())?;

    log_action(
        Some(event.id),
        EventAction::Created,
        &event.title,
        None,
        &user,
        &mut connection.get(),
    )?;

    Ok(HttpResponse::Created().json(&event))
}

pub async fn update(
    (connection, parameters, attributes, user): (
        Connection,
        Path<PathParameters>,
        Json<EventEditableAttributes>,
        AuthUser,
    ),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::EditEvents, &mut connection.get())?;
    let event = Event::find(parameters.id, &mut connection.get())?;
    let event = event.update(attributes.into_inner(), &mut connection.get())?;

    log_action(
        Some(event.id),
        EventAction::Updated,
        &event.title,
        None,
        &user,
        &mut connection.get(),
    )?;

    Ok(HttpResponse::Ok().json(&event))
}

pub async fn destroy(
    (connection, parameters, user): (Connection, Path<PathParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    user.requires_permission(Permission::DeleteEvents, &mut connection.get())?;
    let event = Event::find(parameters.id, &mut connection.get())?;

    // Snapshot survives the row for the audit trail
    let event_data = json!({
        "title": event.title,
        "short_description": event.short_description,
        "category_id": event.category_id,
        "start_datetime": event.start_datetime,
        "end_datetime": event.end_datetime,
    });
    let event_title = event.title.clone();

    event.destroy(&mut connection.get())?;

    log_action(
        None,
        EventAction::Deleted,
        &event_title,
        Some(event_data),
        &user,
        &mut connection.get(),
    )?;

    Ok(HttpResponse::Ok().json(json!({})))
}

pub async fn feed(
    (state, connection, query): (Data<AppState>, Connection, Query<FeedParameters>),
) -> Result<HttpResponse, ApiError> {
    let now = Utc::now().naive_utc();
    let start = query.start.unwrap_or(now - Duration::days(30));
    let end = query.end.unwrap_or(now + Duration::days(365));
    if start > end {
        return application::bad_request("Feed start must be before feed end");
    }

    let entries: Vec<CalendarFeedEntry> = Event::feed_between(start, end, &mut connection.get())?
        .into_iter()
        .map(|(event, category)| CalendarFeedEntry {
            id: event.id,
            title: event.title,
            start: event.start_datetime,
            end: event.end_datetime,
            description: event.short_description,
            url: format!("{}/events/{}", state.config.front_end_url, event.id),
            color: category
                .as_ref()
                .map(|c| c.color.clone())
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            category: category
                .map(|c| c.name)
                .unwrap_or_else(|| "Uncategorized".to_string()),
        })
        .collect();

    Ok(HttpResponse::Ok().json(&entries))
}

pub async fn action_logs(
    (connection, query, user): (Connection, Query<PagingParameters>, AuthUser),
) -> Result<HttpResponse, ApiError> {
    let can_edit = user.has_permission(Permission::EditEvents, &mut connection.get())?;
    let can_delete = user.has_permission(Permission::DeleteEvents, &mut connection.get())?;
    if !can_edit && !can_delete {
        return application::unauthorized();
    }

    let paging = Paging::new(&query);
    let (logs, total) = EventActionLog::index(paging.page as i64, paging.limit as i64, &mut connection.get())?;
    let payload_paging = Paging::clone_with_new_total(&paging, total as u64);
    Ok(HttpResponse::Ok().json(Payload::new(logs, payload_paging)))
}

fn log_action(
    event_id: Option<Uuid>,
    action: EventAction,
    event_title: &str,
    event_data: Option<serde_json::Value>,
    user: &AuthUser,
    conn: &mut PgConnection,
) -> Result<EventActionLog, ApiError> {
    let mut new_log = EventActionLog::create(event_id, Some(user.id()), action, event_title);
    new_log.event_data = event_data;
    new_log.ip_address = user.ip_address.clone();
    new_log.user_agent = user.user_agent.clone();
    Ok(new_log.commit(conn)?)
}
