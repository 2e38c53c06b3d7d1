use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::enums::RoleName;
use crate::models::Permission;
use crate::schema::roles;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::utils::errors::Optional;
use uuid::Uuid;

/// A named permission bundle. The four club roles (viewer, member, editor,
/// admin) are seeded rows whose capability flags admins may adjust.
#[derive(Queryable, Identifiable, Clone, Debug, PartialEq, Serialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub can_view_events: bool,
    pub can_create_events: bool,
    pub can_edit_events: bool,
    pub can_delete_events: bool,
    pub can_manage_categories: bool,
    pub can_manage_users: bool,
    pub can_access_admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = roles)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub can_view_events: bool,
    pub can_create_events: bool,
    pub can_edit_events: bool,
    pub can_delete_events: bool,
    pub can_manage_categories: bool,
    pub can_manage_users: bool,
    pub can_access_admin: bool,
}

#[derive(AsChangeset, Default, Deserialize)]
#[diesel(table_name = roles)]
pub struct RoleEditableAttributes {
    pub description: Option<String>,
    pub can_view_events: Option<bool>,
    pub can_create_events: Option<bool>,
    pub can_edit_events: Option<bool>,
    pub can_delete_events: Option<bool>,
    pub can_manage_categories: Option<bool>,
    pub can_manage_users: Option<bool>,
    pub can_access_admin: Option<bool>,
}

impl NewRole {
    pub fn commit(self, conn: &mut PgConnection) -> Result<Role, DatabaseError> {
        diesel::insert_into(roles::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create role")
    }
}

impl Role {
    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<Role, DatabaseError> {
        roles::table
            .find(id)
            .first::<Role>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading role")
    }

    pub fn find_by_name(name: RoleName, conn: &mut PgConnection) -> Result<Role, DatabaseError> {
        roles::table
            .filter(roles::name.eq(name.to_string()))
            .first::<Role>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading role")
    }

    pub fn all(conn: &mut PgConnection) -> Result<Vec<Role>, DatabaseError> {
        roles::table
            .order_by(roles::name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load roles")
    }

    pub fn update(
        &self,
        attributes: RoleEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<Role, DatabaseError> {
        diesel::update(self)
            .set((attributes, roles::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update role")
    }

    pub fn has(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewEvents => self.can_view_events,
            Permission::CreateEvents => self.can_create_events,
            Permission::EditEvents => self.can_edit_events,
            Permission::DeleteEvents => self.can_delete_events,
            Permission::ManageCategories => self.can_manage_categories,
            Permission::ManageUsers => self.can_manage_users,
            Permission::AccessAdmin => self.can_access_admin,
        }
    }

    pub fn permissions(&self) -> Vec<Permission> {
        let all = vec![
            Permission::ViewEvents,
            Permission::CreateEvents,
            Permission::EditEvents,
            Permission::DeleteEvents,
            Permission::ManageCategories,
            Permission::ManageUsers,
            Permission::AccessAdmin,
        ];
        all.into_iter().filter(|p| self.has(*p)).collect()
    }

    /// Creates any of the four club roles that do not exist yet. Rerunning is
    /// a no-op for roles already present.
    pub fn create_defaults(conn: &mut PgConnection) -> Result<Vec<Role>, DatabaseError> {
        let defaults = vec![
            NewRole {
                name: RoleName::Viewer.to_string(),
                description: "Can view events and calendar only".to_string(),
                can_view_events: true,
                can_create_events: false,
                can_edit_events: false,
                can_delete_events: false,
                can_manage_categories: false,
                can_manage_users: false,
                can_access_admin: false,
            },
            NewRole {
                name: RoleName::Member.to_string(),
                description: "Can view events and manage own profile".to_string(),
                can_view_events: true,
                can_create_events: false,
                can_edit_events: false,
                can_delete_events: false,
                can_manage_categories: false,
                can_manage_users: false,
                can_access_admin: false,
            },
            NewRole {
                name: RoleName::Editor.to_string(),
                description: "Can view and create/edit/delete events".to_string(),
                can_view_events: true,
                can_create_events: true,
                can_edit_events: true,
                can_delete_events: true,
                can_manage_categories: true,
                can_manage_users: false,
                can_access_admin: false,
            },
            NewRole {
                name: RoleName::Admin.to_string(),
                description: "Full access to all features".to_string(),
                can_view_events: true,
                can_create_events: true,
                can_edit_events: true,
                can_delete_events: true,
                can_manage_categories: true,
                can_manage_users: true,
                can_access_admin: true,
            },
        ];

        let mut result = Vec::new();
        for default in defaults {
            let existing = roles::table
                .filter(roles::name.eq(&default.name))
                .first::<Role>(conn)
                .to_db_error(ErrorCode::QueryError, "Error loading role")
                .optional()?;
            match existing {
                Some(role) => result.push(role),
                None => result.push(default.commit(conn)?),
            }
        }
        Ok(result)
    }
}
