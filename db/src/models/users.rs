use chrono::NaiveDateTime;
use chrono::Utc;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::{MemberType, MemberTypeRelationship, Permission, Role};
use crate::schema::{member_types, roles, user_member_types, users};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::utils::errors::Optional;
use crate::utils::passwords::PasswordHash;
use uuid::Uuid;
use validator::Validate;

#[derive(Queryable, Identifiable, PartialEq, Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub salutation: Option<String>,
    pub nickname: Option<String>,
    pub primary_phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub work_phone: Option<String>,
    pub spouse_first_name: Option<String>,
    pub spouse_last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub occupation_title: Option<String>,
    pub vessel_name: Option<String>,
    pub vessel_type: Option<String>,
    pub vessel_loa: Option<f64>,
    pub vessel_beam: Option<f64>,
    pub vessel_draft: Option<f64>,
    pub hashed_pw: String,
    pub password_modified_at: NaiveDateTime,
    pub role_id: Option<Uuid>,
    pub parent_member_id: Option<Uuid>,
    pub relationship_type: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Validate)]
#[diesel(table_name = users)]
pub struct NewUser {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "First name cannot be blank"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be blank"))]
    pub last_name: String,
    #[validate(custom = "crate::validators::phone_number_valid")]
    pub primary_phone: Option<String>,
    pub hashed_pw: String,
    pub role_id: Option<Uuid>,
    pub is_active: bool,
}

/// Fields an administrator may change on a member record.
#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = users)]
pub struct UserEditableAttributes {
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "First name cannot be blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be blank"))]
    pub last_name: Option<String>,
    #[validate(custom = "crate::validators::phone_number_valid")]
    pub primary_phone: Option<String>,
    pub role_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

/// Fields a member may change on their own profile.
#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = users)]
pub struct ProfileEditableAttributes {
    #[validate(length(min = 1, message = "First name cannot be blank"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "Last name cannot be blank"))]
    pub last_name: Option<String>,
    pub salutation: Option<Option<String>>,
    pub nickname: Option<Option<String>>,
    #[validate(custom = "crate::validators::phone_number_valid")]
    pub primary_phone: Option<String>,
    #[validate(custom = "crate::validators::phone_number_valid")]
    pub secondary_phone: Option<String>,
    #[validate(custom = "crate::validators::phone_number_valid")]
    pub work_phone: Option<String>,
    pub spouse_first_name: Option<Option<String>>,
    pub spouse_last_name: Option<Option<String>>,
    pub address1: Option<Option<String>>,
    pub address2: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub postal_code: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub company: Option<Option<String>>,
    pub occupation_title: Option<Option<String>>,
    pub vessel_name: Option<Option<String>>,
    pub vessel_type: Option<Option<String>>,
    pub vessel_loa: Option<Option<f64>>,
    pub vessel_beam: Option<Option<f64>>,
    pub vessel_draft: Option<Option<f64>>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct DisplayUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub is_active: bool,
}

impl From<User> for DisplayUser {
    fn from(user: User) -> Self {
        DisplayUser {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            nickname: user.nickname,
            is_active: user.is_active,
        }
    }
}

impl NewUser {
    pub fn commit(&self, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        self.validate()?;
        diesel::insert_into(users::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create new user")
    }
}

impl User {
    pub fn create(email: &str, first_name: &str, last_name: &str, password: &str) -> NewUser {
        let hash = PasswordHash::generate(password, None);
        NewUser {
            email: email.trim().to_lowercase(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            primary_phone: None,
            hashed_pw: hash.to_string(),
            role_id: None,
            is_active: true,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        users::table
            .find(id)
            .first::<User>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading user")
    }

    pub fn find_by_email(email: &str, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        users::table
            .filter(users::email.eq(email.trim().to_lowercase()))
            .first::<User>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading user")
    }

    pub fn all(conn: &mut PgConnection) -> Result<Vec<User>, DatabaseError> {
        users::table
            .order_by((users::last_name.asc(), users::first_name.asc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load users")
    }

    pub fn index(page: i64, limit: i64, conn: &mut PgConnection) -> Result<(Vec<User>, i64), DatabaseError> {
        let total: i64 = users::table
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count users")?;
        let results = users::table
            .order_by((users::last_name.asc(), users::first_name.asc()))
            .limit(limit)
            .offset(page * limit)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load users")?;
        Ok((results, total))
    }

    /// Name/email/nickname search backing the member picker.
    pub fn search(query: &str, limit: i64, conn: &mut PgConnection) -> Result<Vec<User>, DatabaseError> {
        let pattern = format!("%{}%", query.trim());
        users::table
            .filter(users::is_active.eq(true))
            .filter(
                users::first_name
                    .ilike(pattern.clone())
                    .or(users::last_name.ilike(pattern.clone()))
                    .or(users::email.ilike(pattern.clone()))
                    .or(users::nickname.ilike(pattern)),
            )
            .order_by((users::last_name.asc(), users::first_name.asc()))
            .limit(limit)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not search users")
    }

    pub fn update(&self, attributes: &UserEditableAttributes, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        attributes.validate()?;
        diesel::update(self)
            .set((attributes, users::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error updating user")
    }

    pub fn update_profile(
        &self,
        attributes: &ProfileEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<User, DatabaseError> {
        attributes.validate()?;
        diesel::update(self)
            .set((attributes, users::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error updating user profile")
    }

    pub fn check_password(&self, password: &str) -> bool {
        let hash = match PasswordHash::from_str(&self.hashed_pw) {
            Ok(h) => h,
            Err(_) => return false,
        };
        hash.verify(password)
    }

    pub fn set_password(&self, password: &str, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        let hash = PasswordHash::generate(password, None);
        // Wall clock rather than the transaction timestamp; refresh tokens
        // issued before this moment must become invalid.
        diesel::update(self)
            .set((
                users::hashed_pw.eq(hash.to_string()),
                users::password_modified_at.eq(Utc::now().naive_utc()),
                users::updated_at.eq(dsl::now),
            ))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error changing password")
    }

    pub fn record_login(&self, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        diesel::update(self)
            .set(users::last_login.eq(dsl::now))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error recording login")
    }

    pub fn deactivate(&self, conn: &mut PgConnection) -> Result<User, DatabaseError> {
        diesel::update(self)
            .set((users::is_active.eq(false), users::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error deactivating user")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn role(&self, conn: &mut PgConnection) -> Result<Option<Role>, DatabaseError> {
        match self.role_id {
            Some(role_id) => Ok(Some(Role::find(role_id, conn)?)),
            None => Ok(None),
        }
    }

    /// Superusers hold every permission; everyone else is bounded by their
    /// role's capability flags.
    pub fn has_permission(&self, permission: Permission, conn: &mut PgConnection) -> Result<bool, DatabaseError> {
        if self.is_superuser {
            return Ok(true);
        }
        match self.role(conn)? {
            Some(role) => Ok(role.has(permission)),
            None => Ok(false),
        }
    }

    pub fn member_types(&self, conn: &mut PgConnection) -> Result<Vec<MemberType>, DatabaseError> {
        user_member_types::table
            .inner_join(member_types::table)
            .filter(user_member_types::user_id.eq(self.id))
            .select(member_types::all_columns)
            .order_by((member_types::display_order.asc(), member_types::name.asc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load member types for user")
    }

    pub fn member_type_ids(&self, conn: &mut PgConnection) -> Result<Vec<Uuid>, DatabaseError> {
        user_member_types::table
            .filter(user_member_types::user_id.eq(self.id))
            .select(user_member_types::member_type_id)
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load member type ids for user")
    }

    /// Replaces the member's classifications. Every member must keep at
    /// least one.
    pub fn set_member_types(&self, member_type_ids: &[Uuid], conn: &mut PgConnection) -> Result<(), DatabaseError> {
        if member_type_ids.is_empty() {
            return DatabaseError::validation_error(
                "member_type_ids",
                "At least one member type must be selected",
            );
        }

        diesel::delete(user_member_types::table.filter(user_member_types::user_id.eq(self.id)))
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not clear member types for user")?;

        for member_type_id in member_type_ids {
            diesel::insert_into(user_member_types::table)
                .values((
                    user_member_types::user_id.eq(self.id),
                    user_member_types::member_type_id.eq(member_type_id),
                ))
                .execute(conn)
                .to_db_error(ErrorCode::InsertError, "Could not add member type to user")?;
        }
        Ok(())
    }

    pub fn dependents(&self, conn: &mut PgConnection) -> Result<Vec<User>, DatabaseError> {
        users::table
            .filter(users::parent_member_id.eq(self.id))
            .order_by((users::last_name.asc(), users::first_name.asc()))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load dependents")
    }

    /// Links this member as a dependent of `parent_member_id`, or clears the
    /// linkage when `None`. The parent's types and the dependent's types must
    /// be joined by an active relationship with spare capacity.
    pub fn set_parent(
        &self,
        parent_member_id: Option<Uuid>,
        relationship_type: Option<String>,
        conn: &mut PgConnection,
    ) -> Result<User, DatabaseError> {
        let parent_member_id = match parent_member_id {
            None => {
                return diesel::update(self)
                    .set((
                        users::parent_member_id.eq(None::<Uuid>),
                        users::relationship_type.eq(None::<String>),
                        users::updated_at.eq(dsl::now),
                    ))
                    .get_result(conn)
                    .to_db_error(ErrorCode::UpdateError, "Error clearing parent member");
            }
            Some(id) => id,
        };

        let relationship_type = match relationship_type {
            Some(ref r) if !r.trim().is_empty() => r.trim().to_string(),
            _ => {
                return DatabaseError::validation_error(
                    "relationship_type",
                    "Relationship type is required for dependent members",
                );
            }
        };

        if parent_member_id == self.id {
            return DatabaseError::validation_error("parent_member_id", "A member cannot be their own parent");
        }

        let parent = User::find(parent_member_id, conn).optional()?;
        let parent = match parent {
            Some(parent) if parent.is_active => parent,
            _ => {
                return DatabaseError::validation_error(
                    "parent_member_id",
                    "Parent member must be an active member",
                );
            }
        };

        // Walk the parent chain to keep the dependency tree acyclic
        let mut current = parent.parent_member_id;
        while let Some(ancestor_id) = current {
            if ancestor_id == self.id {
                return DatabaseError::validation_error(
                    "parent_member_id",
                    "Circular reference detected in member hierarchy",
                );
            }
            current = User::find(ancestor_id, conn)?.parent_member_id;
        }

        let child_types: Vec<MemberType> = self
            .member_types(conn)?
            .into_iter()
            .filter(|mt| mt.can_be_child)
            .collect();
        if child_types.is_empty() {
            return DatabaseError::validation_error(
                "member_type_ids",
                "At least one member type must allow being a dependent",
            );
        }

        let parent_type_ids: Vec<Uuid> = parent
            .member_types(conn)?
            .into_iter()
            .filter(|mt| mt.can_be_parent)
            .map(|mt| mt.id)
            .collect();
        let child_type_ids: Vec<Uuid> = child_types.iter().map(|mt| mt.id).collect();

        let relationships = MemberTypeRelationship::find_valid(&parent_type_ids, &child_type_ids, conn)?;
        if relationships.is_empty() {
            return DatabaseError::validation_error(
                "member_type_ids",
                "No valid parent-child relationship exists between the member types and the parent member's types",
            );
        }

        let mut capacity_available = false;
        for relationship in &relationships {
            match relationship.max_children {
                None => {
                    capacity_available = true;
                    break;
                }
                Some(max_children) => {
                    let current_children: i64 = users::table
                        .inner_join(
                            user_member_types::table.on(user_member_types::user_id.eq(users::id)),
                        )
                        .filter(users::parent_member_id.eq(parent.id))
                        .filter(users::id.ne(self.id))
                        .filter(user_member_types::member_type_id.eq(relationship.child_type_id))
                        .count()
                        .get_result(conn)
                        .to_db_error(ErrorCode::QueryError, "Could not count dependents for parent")?;
                    if current_children < max_children as i64 {
                        capacity_available = true;
                        break;
                    }
                }
            }
        }
        if !capacity_available {
            return DatabaseError::validation_error(
                "parent_member_id",
                "Parent member has reached the maximum number of dependents",
            );
        }

        diesel::update(self)
            .set((
                users::parent_member_id.eq(parent.id),
                users::relationship_type.eq(relationship_type),
                users::updated_at.eq(dsl::now),
            ))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Error setting parent member")
    }

    pub fn for_display(self) -> DisplayUser {
        self.into()
    }

    pub fn role_name(&self, conn: &mut PgConnection) -> Result<Option<String>, DatabaseError> {
        match self.role_id {
            Some(role_id) => Ok(Some(
                roles::table
                    .find(role_id)
                    .select(roles::name)
                    .first(conn)
                    .to_db_error(ErrorCode::QueryError, "Error loading role")?,
            )),
            None => Ok(None),
        }
    }
}
