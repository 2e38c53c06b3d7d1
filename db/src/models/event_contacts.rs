use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::{Event, User};
use crate::schema::{event_contacts, users};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;

/// Association between an event and a member with contact responsibilities.
/// At most one contact per event is primary.
#[derive(Associations, Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
#[diesel(belongs_to(Event))]
#[diesel(table_name = event_contacts)]
pub struct EventContact {
    pub id: Uuid,
    pub event_id: Uuid,
    pub member_id: Uuid,
    pub is_primary: bool,
    pub responsibilities: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = event_contacts)]
pub struct NewEventContact {
    pub event_id: Uuid,
    pub member_id: Uuid,
    pub is_primary: bool,
    pub responsibilities: String,
}

#[derive(AsChangeset, Default, Deserialize)]
#[diesel(table_name = event_contacts)]
pub struct EventContactEditableAttributes {
    pub is_primary: Option<bool>,
    pub responsibilities: Option<String>,
}

impl NewEventContact {
    pub fn commit(self, conn: &mut PgConnection) -> Result<EventContact, DatabaseError> {
        if self.is_primary {
            EventContact::demote_primary(self.event_id, conn)?;
        }
        diesel::insert_into(event_contacts::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event contact")
    }
}

impl EventContact {
    pub fn create(event_id: Uuid, member_id: Uuid) -> NewEventContact {
        NewEventContact {
            event_id,
            member_id,
            is_primary: false,
            responsibilities: "".to_string(),
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<EventContact, DatabaseError> {
        event_contacts::table
            .find(id)
            .first::<EventContact>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event contact")
    }

    /// Contacts for an event with their member records, primary first.
    pub fn find_by_event(event_id: Uuid, conn: &mut PgConnection) -> Result<Vec<(EventContact, User)>, DatabaseError> {
        event_contacts::table
            .inner_join(users::table)
            .filter(event_contacts::event_id.eq(event_id))
            .order_by((
                event_contacts::is_primary.desc(),
                users::last_name.asc(),
                users::first_name.asc(),
            ))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event contacts")
    }

    pub fn primary_contact(event_id: Uuid, conn: &mut PgConnection) -> Result<Option<EventContact>, DatabaseError> {
        event_contacts::table
            .filter(event_contacts::event_id.eq(event_id))
            .filter(event_contacts::is_primary.eq(true))
            .first(conn)
            .optional()
            .to_db_error(ErrorCode::QueryError, "Could not load primary event contact")
    }

    pub fn update(
        &self,
        attributes: EventContactEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<EventContact, DatabaseError> {
        if attributes.is_primary == Some(true) && !self.is_primary {
            EventContact::demote_primary(self.event_id, conn)?;
        }
        diesel::update(self)
            .set((attributes, event_contacts::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update event contact")
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete event contact")
    }

    fn demote_primary(event_id: Uuid, conn: &mut PgConnection) -> Result<(), DatabaseError> {
        diesel::update(
            event_contacts::table
                .filter(event_contacts::event_id.eq(event_id))
                .filter(event_contacts::is_primary.eq(true)),
        )
        .set((
            event_contacts::is_primary.eq(false),
            event_contacts::updated_at.eq(dsl::now),
        ))
        .execute(conn)
        .to_db_error(ErrorCode::UpdateError, "Could not demote existing primary contact")?;
        Ok(())
    }
}
