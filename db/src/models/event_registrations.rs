use chrono::NaiveDateTime;
use chrono::Utc;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::{Event, User};
use crate::schema::{event_registrations, users};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::utils::errors::Optional;
use uuid::Uuid;

/// A member's registration for an event. Cancelled rows are retained for
/// history; only one live row may exist per (event, member).
#[derive(Associations, Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
#[diesel(belongs_to(Event))]
#[diesel(table_name = event_registrations)]
pub struct EventRegistration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub member_id: Uuid,
    pub fee_in_cents: i64,
    pub cancelled: bool,
    pub cancelled_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = event_registrations)]
pub struct NewEventRegistration {
    pub event_id: Uuid,
    pub member_id: Uuid,
    pub fee_in_cents: i64,
}

impl NewEventRegistration {
    pub fn commit(self, conn: &mut PgConnection) -> Result<EventRegistration, DatabaseError> {
        let existing = EventRegistration::find_active(self.event_id, self.member_id, conn).optional()?;
        if existing.is_some() {
            return DatabaseError::validation_error("event_id", "Member is already registered for this event");
        }
        diesel::insert_into(event_registrations::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event registration")
    }
}

impl EventRegistration {
    /// Registers the member, snapshotting the fee they owe at this moment.
    pub fn create(event: &Event, user: &User, conn: &mut PgConnection) -> Result<NewEventRegistration, DatabaseError> {
        Ok(NewEventRegistration {
            event_id: event.id,
            member_id: user.id,
            fee_in_cents: event.fee_for(user, conn)?,
        })
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<EventRegistration, DatabaseError> {
        event_registrations::table
            .find(id)
            .first::<EventRegistration>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event registration")
    }

    pub fn find_active(
        event_id: Uuid,
        member_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<EventRegistration, DatabaseError> {
        event_registrations::table
            .filter(event_registrations::event_id.eq(event_id))
            .filter(event_registrations::member_id.eq(member_id))
            .filter(event_registrations::cancelled.eq(false))
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not find registration for event")
    }

    /// Live registrations for an event with the registered members, oldest
    /// first.
    pub fn find_by_event(
        event_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<Vec<(EventRegistration, User)>, DatabaseError> {
        event_registrations::table
            .inner_join(users::table)
            .filter(event_registrations::event_id.eq(event_id))
            .filter(event_registrations::cancelled.eq(false))
            .order_by(event_registrations::created_at.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event registrations")
    }

    pub fn cancel(self, conn: &mut PgConnection) -> Result<EventRegistration, DatabaseError> {
        if self.cancelled {
            return DatabaseError::validation_error("id", "Registration is already cancelled");
        }
        diesel::update(&self)
            .set((
                event_registrations::cancelled.eq(true),
                event_registrations::cancelled_at.eq(Utc::now().naive_utc()),
                event_registrations::updated_at.eq(dsl::now),
            ))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not cancel event registration")
    }
}
