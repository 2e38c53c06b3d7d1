use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::MemberType;
use crate::schema::member_type_relationships;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::validators::*;
use uuid::Uuid;
use validator::Validate;

/// Declares that members of `parent_type` may sponsor dependents of
/// `child_type` (e.g. Full Member -> Junior as "Child"), optionally capped
/// per parent.
#[derive(Queryable, Identifiable, Clone, Debug, PartialEq, Serialize)]
pub struct MemberTypeRelationship {
    pub id: Uuid,
    pub parent_type_id: Uuid,
    pub child_type_id: Uuid,
    pub relationship_name: String,
    pub max_children: Option<i32>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = member_type_relationships)]
pub struct NewMemberTypeRelationship {
    pub parent_type_id: Uuid,
    pub child_type_id: Uuid,
    #[validate(length(min = 1, message = "Relationship name cannot be blank"))]
    pub relationship_name: String,
    #[validate(range(min = 1, message = "Maximum children per parent must be at least 1"))]
    pub max_children: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = member_type_relationships)]
pub struct MemberTypeRelationshipEditableAttributes {
    #[validate(length(min = 1, message = "Relationship name cannot be blank"))]
    pub relationship_name: Option<String>,
    pub max_children: Option<Option<i32>>,
    pub is_active: Option<bool>,
}

impl NewMemberTypeRelationship {
    pub fn commit(self, conn: &mut PgConnection) -> Result<MemberTypeRelationship, DatabaseError> {
        self.validate()?;

        let mut validation_errors = Ok(());
        if self.parent_type_id == self.child_type_id {
            validation_errors = append_validation_error(
                validation_errors,
                "child_type_id",
                Err(create_validation_error(
                    "parent_and_child_types_must_differ",
                    "Parent and child types cannot be the same",
                )),
            );
        } else {
            let parent_type = MemberType::find(self.parent_type_id, conn)?;
            let child_type = MemberType::find(self.child_type_id, conn)?;
            if !parent_type.can_be_parent {
                validation_errors = append_validation_error(
                    validation_errors,
                    "parent_type_id",
                    Err(create_validation_error(
                        "type_cannot_be_parent",
                        "Member type is not configured to be a parent type",
                    )),
                );
            }
            if !child_type.can_be_child {
                validation_errors = append_validation_error(
                    validation_errors,
                    "child_type_id",
                    Err(create_validation_error(
                        "type_cannot_be_child",
                        "Member type is not configured to be a child type",
                    )),
                );
            }
        }
        validation_errors?;

        diesel::insert_into(member_type_relationships::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create member type relationship")
    }
}

impl MemberTypeRelationship {
    pub fn create(parent_type_id: Uuid, child_type_id: Uuid, relationship_name: &str) -> NewMemberTypeRelationship {
        NewMemberTypeRelationship {
            parent_type_id,
            child_type_id,
            relationship_name: relationship_name.to_string(),
            max_children: None,
            is_active: true,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<MemberTypeRelationship, DatabaseError> {
        member_type_relationships::table
            .find(id)
            .first::<MemberTypeRelationship>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading member type relationship")
    }

    pub fn all(conn: &mut PgConnection) -> Result<Vec<MemberTypeRelationship>, DatabaseError> {
        member_type_relationships::table
            .order_by(member_type_relationships::relationship_name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load member type relationships")
    }

    /// Active relationships linking any of the parent's types to any of the
    /// dependent's types.
    pub fn find_valid(
        parent_type_ids: &[Uuid],
        child_type_ids: &[Uuid],
        conn: &mut PgConnection,
    ) -> Result<Vec<MemberTypeRelationship>, DatabaseError> {
        member_type_relationships::table
            .filter(member_type_relationships::parent_type_id.eq_any(parent_type_ids))
            .filter(member_type_relationships::child_type_id.eq_any(child_type_ids))
            .filter(member_type_relationships::is_active.eq(true))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load member type relationships")
    }

    pub fn update(
        &self,
        attributes: MemberTypeRelationshipEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<MemberTypeRelationship, DatabaseError> {
        attributes.validate()?;
        if let Some(Some(max_children)) = attributes.max_children {
            if max_children < 1 {
                return DatabaseError::validation_error(
                    "max_children",
                    "Maximum children per parent must be at least 1",
                );
            }
        }
        diesel::update(self)
            .set((attributes, member_type_relationships::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update member type relationship")
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete member type relationship")
    }
}
