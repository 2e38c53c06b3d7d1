use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::enums::FolderAccess;
use crate::models::{DocumentFolder, Role, User};
use crate::schema::folder_permissions;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::utils::errors::Optional;
use std::collections::HashSet;
use uuid::Uuid;

/// Per-role capability grant on a folder. Grants cascade down the folder
/// tree: a role granted `can_view` on a folder can view every descendant.
#[derive(Associations, Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
#[diesel(belongs_to(DocumentFolder, foreign_key = folder_id))]
#[diesel(belongs_to(Role))]
#[diesel(table_name = folder_permissions)]
pub struct FolderPermission {
    pub id: Uuid,
    pub folder_id: Uuid,
    pub role_id: Uuid,
    pub can_view: bool,
    pub can_add: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = folder_permissions)]
pub struct NewFolderPermission {
    pub folder_id: Uuid,
    pub role_id: Uuid,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

impl NewFolderPermission {
    /// Inserts the grant, or replaces the flags on an existing
    /// (folder, role) row.
    pub fn commit(self, conn: &mut PgConnection) -> Result<FolderPermission, DatabaseError> {
        let existing =
            FolderPermission::find_by_folder_and_role(self.folder_id, self.role_id, conn).optional()?;
        match existing {
            Some(permission) => diesel::update(&permission)
                .set((
                    folder_permissions::can_view.eq(self.can_view),
                    folder_permissions::can_add.eq(self.can_add),
                    folder_permissions::can_edit.eq(self.can_edit),
                    folder_permissions::can_delete.eq(self.can_delete),
                    folder_permissions::updated_at.eq(dsl::now),
                ))
                .get_result(conn)
                .to_db_error(ErrorCode::UpdateError, "Could not update folder permission"),
            None => diesel::insert_into(folder_permissions::table)
                .values(&self)
                .get_result(conn)
                .to_db_error(ErrorCode::InsertError, "Could not create folder permission"),
        }
    }
}

impl FolderPermission {
    pub fn create(folder_id: Uuid, role_id: Uuid) -> NewFolderPermission {
        NewFolderPermission {
            folder_id,
            role_id,
            can_view: false,
            can_add: false,
            can_edit: false,
            can_delete: false,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<FolderPermission, DatabaseError> {
        folder_permissions::table
            .find(id)
            .first::<FolderPermission>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading folder permission")
    }

    pub fn find_by_folder(folder_id: Uuid, conn: &mut PgConnection) -> Result<Vec<FolderPermission>, DatabaseError> {
        folder_permissions::table
            .filter(folder_permissions::folder_id.eq(folder_id))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load folder permissions")
    }

    pub fn find_by_folder_and_role(
        folder_id: Uuid,
        role_id: Uuid,
        conn: &mut PgConnection,
    ) -> Result<FolderPermission, DatabaseError> {
        folder_permissions::table
            .filter(folder_permissions::folder_id.eq(folder_id))
            .filter(folder_permissions::role_id.eq(role_id))
            .first(conn)
            .to_db_error(ErrorCode::QueryError, "Could not find permission for folder")
    }

    pub fn grants(&self, access: FolderAccess) -> bool {
        match access {
            FolderAccess::View => self.can_view,
            FolderAccess::Add => self.can_add,
            FolderAccess::Edit => self.can_edit,
            FolderAccess::Delete => self.can_delete,
        }
    }

    /// Walks from the root down to `folder` looking for a grant held by
    /// `role_id`. Permissions cascade, so a grant anywhere on the ancestor
    /// path is enough.
    pub fn role_has_access(
        role_id: Uuid,
        folder: &DocumentFolder,
        access: FolderAccess,
        conn: &mut PgConnection,
    ) -> Result<bool, DatabaseError> {
        let mut folders_to_check = folder.ancestors(conn)?;
        folders_to_check.push(folder.clone());

        for folder_to_check in folders_to_check {
            let permission =
                FolderPermission::find_by_folder_and_role(folder_to_check.id, role_id, conn).optional()?;
            if let Some(permission) = permission {
                if permission.grants(access) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Folder ids the user can reach with `access`, cascading each grant to
    /// its descendants. Users without a role have no grants.
    pub fn accessible_folder_ids(
        user: &User,
        access: FolderAccess,
        conn: &mut PgConnection,
    ) -> Result<Vec<Uuid>, DatabaseError> {
        let role_id = match user.role_id {
            Some(role_id) => role_id,
            None => return Ok(Vec::new()),
        };

        let permissions: Vec<FolderPermission> = folder_permissions::table
            .filter(folder_permissions::role_id.eq(role_id))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load folder permissions")?;

        let mut folder_ids = HashSet::new();
        for permission in permissions.into_iter().filter(|p| p.grants(access)) {
            folder_ids.insert(permission.folder_id);
            let folder = DocumentFolder::find(permission.folder_id, conn)?;
            for descendant in folder.descendants(conn)? {
                folder_ids.insert(descendant.id);
            }
        }

        let mut folder_ids: Vec<Uuid> = folder_ids.into_iter().collect();
        folder_ids.sort();
        Ok(folder_ids)
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete folder permission")
    }
}
