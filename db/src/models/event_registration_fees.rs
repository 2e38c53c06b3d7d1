use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::schema::{event_registration_fees, member_types};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;
use validator::Validate;

/// Registration fee for one member type on one event. The fee rows double as
/// the event's eligibility list: a member registers under one of these types.
#[derive(Queryable, Identifiable, Clone, Debug, PartialEq, Serialize)]
pub struct EventRegistrationFee {
    pub id: Uuid,
    pub event_id: Uuid,
    pub member_type_id: Uuid,
    pub fee_in_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = event_registration_fees)]
pub struct NewEventRegistrationFee {
    pub event_id: Uuid,
    pub member_type_id: Uuid,
    #[validate(range(min = 0, message = "Fee cannot be negative"))]
    pub fee_in_cents: i64,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = event_registration_fees)]
pub struct EventRegistrationFeeEditableAttributes {
    #[validate(range(min = 0, message = "Fee cannot be negative"))]
    pub fee_in_cents: Option<i64>,
}

impl NewEventRegistrationFee {
    pub fn commit(self, conn: &mut PgConnection) -> Result<EventRegistrationFee, DatabaseError> {
        self.validate()?;
        diesel::insert_into(event_registration_fees::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event registration fee")
    }
}

impl EventRegistrationFee {
    pub fn create(event_id: Uuid, member_type_id: Uuid, fee_in_cents: i64) -> NewEventRegistrationFee {
        NewEventRegistrationFee {
            event_id,
            member_type_id,
            fee_in_cents,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<EventRegistrationFee, DatabaseError> {
        event_registration_fees::table
            .find(id)
            .first::<EventRegistrationFee>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event registration fee")
    }

    pub fn find_by_event(
        event_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<Vec<EventRegistrationFee>, DatabaseError> {
        event_registration_fees::table
            .inner_join(member_types::table)
            .filter(event_registration_fees::event_id.eq(event_id))
            .order_by(member_types::name.asc())
            .select(event_registration_fees::all_columns)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event registration fees")
    }

    pub fn update(
        &self,
        attributes: EventRegistrationFeeEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<EventRegistrationFee, DatabaseError> {
        attributes.validate()?;
        diesel::update(self)
            .set((attributes, event_registration_fees::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update event registration fee")
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete event registration fee")
    }
}
