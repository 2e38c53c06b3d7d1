use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use crate::models::enums::EventAction;
use crate::schema::event_action_logs;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;

/// Audit record of an editor/admin action on an event. The title (and, for
/// deletions, a JSON snapshot) survive the event itself.
#[derive(Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
pub struct EventActionLog {
    pub id: Uuid,
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub action: EventAction,
    pub event_title: String,
    pub event_data: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = event_action_logs)]
pub struct NewEventActionLog {
    pub event_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub action: EventAction,
    pub event_title: String,
    pub event_data: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl NewEventActionLog {
    pub fn commit(self, conn: &mut PgConnection) -> Result<EventActionLog, DatabaseError> {
        diesel::insert_into(event_action_logs::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event action log")
    }
}

impl EventActionLog {
    pub fn create(
        event_id: Option<Uuid>,
        user_id: Option<Uuid>,
        action: EventAction,
        event_title: &str,
    ) -> NewEventActionLog {
        NewEventActionLog {
            event_id,
            user_id,
            action,
            event_title: event_title.to_string(),
            event_data: None,
            ip_address: None,
            user_agent: None,
        }
    }

    /// Newest first.
    pub fn index(page: i64, limit: i64, conn: &mut PgConnection) -> Result<(Vec<EventActionLog>, i64), DatabaseError> {
        let total: i64 = event_action_logs::table
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count event action logs")?;
        let results = event_action_logs::table
            .order_by(event_action_logs::created_at.desc())
            .limit(limit)
            .offset(page * limit)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event action logs")?;
        Ok((results, total))
    }

    pub fn find_by_event(event_id: Uuid, conn: &mut PgConnection) -> Result<Vec<EventActionLog>, DatabaseError> {
        event_action_logs::table
            .filter(event_action_logs::event_id.eq(event_id))
            .order_by(event_action_logs::created_at.desc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event action logs")
    }
}
