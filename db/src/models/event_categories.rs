use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::schema::{event_categories, events};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;
use validator::Validate;

/// Category for organizing events (e.g. Racing, Social, Training). The color
/// drives calendar display.
#[derive(Queryable, Identifiable, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = event_categories)]
pub struct EventCategory {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = event_categories)]
pub struct NewEventCategory {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "NewEventCategory::default_color")]
    #[validate(custom = "crate::validators::hex_color_valid")]
    pub color: String,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = event_categories)]
pub struct EventCategoryEditableAttributes {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom = "crate::validators::hex_color_valid")]
    pub color: Option<String>,
}

impl NewEventCategory {
    pub fn default_color() -> String {
        "#007bff".to_string()
    }

    pub fn commit(mut self, conn: &mut PgConnection) -> Result<EventCategory, DatabaseError> {
        self.name = self.name.trim().to_string();
        self.validate()?;
        diesel::insert_into(event_categories::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create event category")
    }
}

impl EventCategory {
    pub fn create(name: &str) -> NewEventCategory {
        NewEventCategory {
            name: name.to_string(),
            description: "".to_string(),
            color: NewEventCategory::default_color(),
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<EventCategory, DatabaseError> {
        event_categories::table
            .find(id)
            .first::<EventCategory>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading event category")
    }

    pub fn all(conn: &mut PgConnection) -> Result<Vec<EventCategory>, DatabaseError> {
        event_categories::table
            .order_by(event_categories::name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load event categories")
    }

    pub fn update(
        &self,
        attributes: EventCategoryEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<EventCategory, DatabaseError> {
        attributes.validate()?;
        diesel::update(self)
            .set((attributes, event_categories::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update event category")
    }

    pub fn event_count(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        events::table
            .filter(events::category_id.eq(self.id))
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count events for category")
    }

    /// Events pointing at the category are left uncategorized by the FK's
    /// ON DELETE SET NULL. Returns how many were affected.
    pub fn destroy(self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let affected = self.event_count(conn)?;
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete event category")?;
        Ok(affected)
    }
}
