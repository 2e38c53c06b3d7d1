use chrono::NaiveDateTime;
use chrono::Utc;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::*;
use crate::schema::{event_categories, event_contacts, event_registration_fees, event_registrations, events};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::utils::errors::Optional;
use crate::validators::*;
use uuid::Uuid;
use validator::Validate;

#[derive(Queryable, Identifiable, Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub registration_status: RegistrationStatus,
    pub registration_open_datetime: Option<NaiveDateTime>,
    pub registrant_list_visibility: RegistrantListVisibility,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = events)]
pub struct NewEvent {
    #[validate(length(min = 1, message = "Title cannot be blank"))]
    pub title: String,
    #[validate(length(min = 1, max = 500, message = "Short description must be between 1 and 500 characters"))]
    pub short_description: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    #[serde(default = "NewEvent::default_registration_status")]
    pub registration_status: RegistrationStatus,
    pub registration_open_datetime: Option<NaiveDateTime>,
    #[serde(default = "NewEvent::default_registrant_list_visibility")]
    pub registrant_list_visibility: RegistrantListVisibility,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = events)]
pub struct EventEditableAttributes {
    #[validate(length(min = 1, message = "Title cannot be blank"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 500, message = "Short description must be between 1 and 500 characters"))]
    pub short_description: Option<String>,
    pub description: Option<Option<String>>,
    pub category_id: Option<Option<Uuid>>,
    pub start_datetime: Option<NaiveDateTime>,
    pub end_datetime: Option<NaiveDateTime>,
    pub registration_status: Option<RegistrationStatus>,
    pub registration_open_datetime: Option<Option<NaiveDateTime>>,
    pub registrant_list_visibility: Option<RegistrantListVisibility>,
}

impl NewEvent {
    pub fn default_registration_status() -> RegistrationStatus {
        RegistrationStatus::NotRequired
    }

    pub fn default_registrant_list_visibility() -> RegistrantListVisibility {
        RegistrantListVisibility::None
    }

    pub fn commit(self, conn: &mut PgConnection) -> Result<Event, DatabaseError> {
        self.validate()?;
        append_validation_error(
            Ok(()),
            "start_datetime",
            start_date_valid(self.start_datetime, self.end_datetime),
        )?;

        diesel::insert_into(events::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event")
    }
}

impl Event {
    pub fn create(
        title: &str,
        short_description: &str,
        start_datetime: NaiveDateTime,
        end_datetime: NaiveDateTime,
    ) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            short_description: short_description.to_string(),
            description: None,
            category_id: None,
            start_datetime,
            end_datetime,
            registration_status: NewEvent::default_registration_status(),
            registration_open_datetime: None,
            registrant_list_visibility: NewEvent::default_registrant_list_visibility(),
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<Event, DatabaseError> {
        events::table
            .find(id)
            .first::<Event>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event")
    }

    pub fn update(
        &self,
        attributes: EventEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<Event, DatabaseError> {
        attributes.validate()?;
        let start = attributes.start_datetime.unwrap_or(self.start_datetime);
        let end = attributes.end_datetime.unwrap_or(self.end_datetime);
        append_validation_error(Ok(()), "start_datetime", start_date_valid(start, end))?;

        diesel::update(self)
            .set((attributes, events::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update event")
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete event")
    }

    pub fn index(
        category_id: Option<Uuid>,
        past_or_upcoming: Option<PastOrUpcoming>,
        page: i64,
        limit: i64,
        conn: &mut PgConnection,
    ) -> Result<(Vec<Event>, i64), DatabaseError> {
        let now = Utc::now().naive_utc();

        let mut query = events::table.into_boxed();
        let mut count_query = events::table.into_boxed();
        if let Some(category_id) = category_id {
            query = query.filter(events::category_id.eq(category_id));
            count_query = count_query.filter(events::category_id.eq(category_id));
        }
        match past_or_upcoming {
            Some(PastOrUpcoming::Past) => {
                query = query
                    .filter(events::end_datetime.lt(now))
                    .order_by(events::start_datetime.desc());
                count_query = count_query.filter(events::end_datetime.lt(now));
            }
            Some(PastOrUpcoming::Upcoming) => {
                query = query
                    .filter(events::end_datetime.ge(now))
                    .order_by(events::start_datetime.asc());
                count_query = count_query.filter(events::end_datetime.ge(now));
            }
            None => {
                query = query.order_by(events::start_datetime.asc());
            }
        }

        let total: i64 = count_query
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count events")?;
        let results = query
            .limit(limit)
            .offset(page * limit)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load events")?;

        Ok((results, total))
    }

    /// Events overlapping the window, with their categories, for the calendar
    /// feed.
    pub fn feed_between(
        start: NaiveDateTime,
        end: NaiveDateTime,
        conn: &mut PgConnection,
    ) -> Result<Vec<(Event, Option<EventCategory>)>, DatabaseError> {
        events::table
            .left_join(event_categories::table)
            .filter(events::start_datetime.le(end))
            .filter(events::end_datetime.ge(start))
            .order_by(events::start_datetime.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load calendar feed")
    }

    pub fn category(&self, conn: &mut PgConnection) -> Result<Option<EventCategory>, DatabaseError> {
        match self.category_id {
            Some(category_id) => Ok(Some(EventCategory::find(category_id, conn)?)),
            None => Ok(None),
        }
    }

    pub fn is_contact(&self, user_id: Uuid, conn: &mut PgConnection) -> Result<bool, DatabaseError> {
        let found: i64 = event_contacts::table
            .filter(event_contacts::event_id.eq(self.id))
            .filter(event_contacts::member_id.eq(user_id))
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event contacts")?;
        Ok(found > 0)
    }

    /// Member types the event is open to. An event with no fee rows is open
    /// to every type.
    pub fn eligible_member_type_ids(&self, conn: &mut PgConnection) -> Result<Vec<Uuid>, DatabaseError> {
        event_registration_fees::table
            .filter(event_registration_fees::event_id.eq(self.id))
            .select(event_registration_fees::member_type_id)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event registration fees")
    }

    pub fn is_eligible(&self, user: &User, conn: &mut PgConnection) -> Result<bool, DatabaseError> {
        let eligible_type_ids = self.eligible_member_type_ids(conn)?;
        if eligible_type_ids.is_empty() {
            return Ok(true);
        }
        let member_type_ids = user.member_type_ids(conn)?;
        Ok(member_type_ids.iter().any(|id| eligible_type_ids.contains(id)))
    }

    /// The fee the member would pay: the lowest fee among their matching
    /// types, zero when the event carries no fee rows.
    pub fn fee_for(&self, user: &User, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let member_type_ids = user.member_type_ids(conn)?;
        let fee: Option<i64> = event_registration_fees::table
            .filter(event_registration_fees::event_id.eq(self.id))
            .filter(event_registration_fees::member_type_id.eq_any(&member_type_ids))
            .select(dsl::min(event_registration_fees::fee_in_cents))
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event registration fees")?;
        Ok(fee.unwrap_or(0))
    }

    /// Whether the registration window is open at `now`, ignoring who is
    /// asking.
    pub fn registration_open(&self, now: NaiveDateTime) -> bool {
        match self.registration_status {
            RegistrationStatus::NotRequired
            | RegistrationStatus::TemporarilyUnavailable
            | RegistrationStatus::Closed
            | RegistrationStatus::External => false,
            RegistrationStatus::Recommended
            | RegistrationStatus::Required
            | RegistrationStatus::AdminsContactsOnly
            | RegistrationStatus::RequiredByCloseDate => {
                if let Some(open) = self.registration_open_datetime {
                    if now < open {
                        return false;
                    }
                }
                if self.registration_status == RegistrationStatus::RequiredByCloseDate {
                    now < self.start_datetime
                } else {
                    now < self.end_datetime
                }
            }
        }
    }

    pub fn can_register(&self, user: &User, now: NaiveDateTime, conn: &mut PgConnection) -> Result<bool, DatabaseError> {
        if !self.registration_open(now) {
            return Ok(false);
        }

        if self.registration_status == RegistrationStatus::AdminsContactsOnly {
            let privileged = user.has_permission(Permission::ManageUsers, conn)?
                || user.has_permission(Permission::AccessAdmin, conn)?
                || self.is_contact(user.id, conn)?;
            if !privileged {
                return Ok(false);
            }
        }

        if !self.is_eligible(user, conn)? {
            return Ok(false);
        }

        Ok(!self.is_registered(user.id, conn)?)
    }

    pub fn is_registered(&self, user_id: Uuid, conn: &mut PgConnection) -> Result<bool, DatabaseError> {
        let registration = EventRegistration::find_active(self.id, user_id, conn).optional()?;
        Ok(registration.is_some())
    }

    pub fn registration_count(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        event_registrations::table
            .filter(event_registrations::event_id.eq(self.id))
            .filter(event_registrations::cancelled.eq(false))
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count registrations")
    }
}
