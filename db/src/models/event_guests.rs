use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use crate::models::EventRegistration;
use crate::schema::event_guests;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;
use validator::Validate;

/// A guest a registered member is bringing along.
#[derive(Associations, Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
#[diesel(belongs_to(EventRegistration))]
#[diesel(table_name = event_guests)]
pub struct EventGuest {
    pub id: Uuid,
    pub event_registration_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = event_guests)]
pub struct NewEventGuest {
    pub event_registration_id: Uuid,
    #[validate(length(min = 1, message = "First name cannot be blank"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be blank"))]
    pub last_name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
}

impl NewEventGuest {
    pub fn commit(self, conn: &mut PgConnection) -> Result<EventGuest, DatabaseError> {
        self.validate()?;
        diesel::insert_into(event_guests::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event guest")
    }
}

impl EventGuest {
    pub fn create(event_registration_id: Uuid, first_name: &str, last_name: &str) -> NewEventGuest {
        NewEventGuest {
            event_registration_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: None,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<EventGuest, DatabaseError> {
        event_guests::table
            .find(id)
            .first::<EventGuest>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event guest")
    }

    pub fn find_by_registration(
        event_registration_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<Vec<EventGuest>, DatabaseError> {
        event_guests::table
            .filter(event_guests::event_registration_id.eq(event_registration_id))
            .order_by((event_guests::last_name.asc(), event_guests::first_name.asc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event guests")
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete event guest")
    }
}
