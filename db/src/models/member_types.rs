use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::schema::{member_types, user_member_types};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;
use validator::Validate;

/// Member classification (e.g. Full Member, Associate, Junior) controlling
/// event eligibility and which members may act as parents or dependents.
#[derive(Queryable, Identifiable, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberType {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub can_be_parent: bool,
    pub can_be_child: bool,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = member_types)]
pub struct NewMemberType {
    #[validate(length(min = 1, message = "Name cannot be blank"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub can_be_parent: bool,
    #[serde(default)]
    pub can_be_child: bool,
    #[serde(default)]
    pub display_order: i32,
}

fn default_true() -> bool {
    true
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = member_types)]
pub struct MemberTypeEditableAttributes {
    #[validate(length(min = 1, message = "Name cannot be blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub can_be_parent: Option<bool>,
    pub can_be_child: Option<bool>,
    pub display_order: Option<i32>,
}

impl NewMemberType {
    pub fn commit(mut self, conn: &mut PgConnection) -> Result<MemberType, DatabaseError> {
        self.name = self.name.trim().to_string();
        self.validate()?;
        diesel::insert_into(member_types::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create member type")
    }
}

impl MemberType {
    pub fn create(name: &str) -> NewMemberType {
        NewMemberType {
            name: name.to_string(),
            description: "".to_string(),
            is_active: true,
            can_be_parent: false,
            can_be_child: false,
            display_order: 0,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<MemberType, DatabaseError> {
        member_types::table
            .find(id)
            .first::<MemberType>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading member type")
    }

    pub fn all(active_only: bool, conn: &mut PgConnection) -> Result<Vec<MemberType>, DatabaseError> {
        let mut query = member_types::table.into_boxed();
        if active_only {
            query = query.filter(member_types::is_active.eq(true));
        }
        query
            .order_by((member_types::display_order.asc(), member_types::name.asc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load member types")
    }

    pub fn update(
        &self,
        attributes: MemberTypeEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<MemberType, DatabaseError> {
        attributes.validate()?;
        diesel::update(self)
            .set((attributes, member_types::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update member type")
    }

    /// A member type that still classifies users cannot be removed; the
    /// foreign key reports the conflict.
    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete member type")
    }

    pub fn member_count(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        user_member_types::table
            .filter(user_member_types::member_type_id.eq(self.id))
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count members for member type")
    }
}
