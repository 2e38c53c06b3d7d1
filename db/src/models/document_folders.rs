use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::schema::{document_files, document_folders};
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use crate::utils::text::sanitize_name;
use uuid::Uuid;
use validator::Validate;

/// A node in the document library tree. Names are unique among siblings and
/// the tree stays acyclic.
#[derive(Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
pub struct DocumentFolder {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub description: String,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Validate)]
#[diesel(table_name = document_folders)]
pub struct NewDocumentFolder {
    #[validate(length(min = 1, message = "Folder name cannot be blank"))]
    pub name: String,
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub description: String,
    #[serde(skip)]
    pub created_by: Option<Uuid>,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = document_folders)]
pub struct DocumentFolderEditableAttributes {
    #[validate(length(min = 1, message = "Folder name cannot be blank"))]
    pub name: Option<String>,
    pub parent_id: Option<Option<Uuid>>,
    pub description: Option<String>,
}

impl NewDocumentFolder {
    pub fn commit(self, conn: &mut PgConnection) -> Result<DocumentFolder, DatabaseError> {
        self.validate()?;
        if let Some(parent_id) = self.parent_id {
            // Existence check; the FK would catch it, but this gives a 404
            // rather than an opaque constraint failure.
            DocumentFolder::find(parent_id, conn)?;
        }
        diesel::insert_into(document_folders::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create document folder")
    }
}

impl DocumentFolder {
    pub fn create(name: &str, parent_id: Option<Uuid>, created_by: Option<Uuid>) -> NewDocumentFolder {
        NewDocumentFolder {
            name: name.to_string(),
            parent_id,
            description: "".to_string(),
            created_by,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<DocumentFolder, DatabaseError> {
        document_folders::table
            .find(id)
            .first::<DocumentFolder>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading document folder")
    }

    pub fn roots(conn: &mut PgConnection) -> Result<Vec<DocumentFolder>, DatabaseError> {
        document_folders::table
            .filter(document_folders::parent_id.is_null())
            .order_by(document_folders::name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load root folders")
    }

    pub fn all(conn: &mut PgConnection) -> Result<Vec<DocumentFolder>, DatabaseError> {
        document_folders::table
            .order_by(document_folders::name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load folders")
    }

    pub fn subfolders(&self, conn: &mut PgConnection) -> Result<Vec<DocumentFolder>, DatabaseError> {
        document_folders::table
            .filter(document_folders::parent_id.eq(self.id))
            .order_by(document_folders::name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load subfolders")
    }

    /// Root-to-parent chain for this folder.
    pub fn ancestors(&self, conn: &mut PgConnection) -> Result<Vec<DocumentFolder>, DatabaseError> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_id;
        while let Some(parent_id) = current {
            let parent = DocumentFolder::find(parent_id, conn)?;
            current = parent.parent_id;
            ancestors.insert(0, parent);
        }
        Ok(ancestors)
    }

    /// Every folder below this one.
    pub fn descendants(&self, conn: &mut PgConnection) -> Result<Vec<DocumentFolder>, DatabaseError> {
        let mut descendants = Vec::new();
        let mut frontier = vec![self.id];
        while let Some(folder_id) = frontier.pop() {
            let children: Vec<DocumentFolder> = document_folders::table
                .filter(document_folders::parent_id.eq(folder_id))
                .load(conn)
                .to_db_error(ErrorCode::QueryError, "Could not load subfolders")?;
            for child in children {
                frontier.push(child.id);
                descendants.push(child);
            }
        }
        Ok(descendants)
    }

    /// Human readable path from the root, e.g. `Racing/2026 Season`.
    pub fn full_path(&self, conn: &mut PgConnection) -> Result<String, DatabaseError> {
        let mut parts: Vec<String> = self
            .ancestors(conn)?
            .into_iter()
            .map(|folder| folder.name)
            .collect();
        parts.push(self.name.clone());
        Ok(parts.join("/"))
    }

    /// Filesystem-safe path used when storing files under this folder.
    pub fn storage_path(&self, conn: &mut PgConnection) -> Result<String, DatabaseError> {
        let mut parts: Vec<String> = self
            .ancestors(conn)?
            .into_iter()
            .map(|folder| sanitize_name(&folder.name))
            .collect();
        parts.push(sanitize_name(&self.name));
        Ok(parts.join("/"))
    }

    pub fn update(
        &self,
        attributes: DocumentFolderEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<DocumentFolder, DatabaseError> {
        attributes.validate()?;

        if let Some(new_parent_id) = attributes.parent_id {
            self.validate_parent(new_parent_id, conn)?;
        }

        diesel::update(self)
            .set((attributes, document_folders::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update document folder")
    }

    /// Deletes the folder; the database cascades to subfolders, permissions
    /// and file records.
    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete document folder")
    }

    pub fn file_count(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        document_files::table
            .filter(document_files::folder_id.eq(self.id))
            .count()
            .get_result(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count files in folder")
    }

    /// A folder may not become its own parent nor move under one of its
    /// descendants.
    fn validate_parent(&self, new_parent_id: Option<Uuid>, conn: &mut PgConnection) -> Result<(), DatabaseError> {
        let new_parent_id = match new_parent_id {
            Some(id) => id,
            None => return Ok(()),
        };

        if new_parent_id == self.id {
            return DatabaseError::validation_error("parent_id", "A folder cannot be its own parent");
        }

        let mut current = Some(new_parent_id);
        while let Some(folder_id) = current {
            if folder_id == self.id {
                return DatabaseError::validation_error(
                    "parent_id",
                    "Circular reference detected in folder hierarchy",
                );
            }
            current = DocumentFolder::find(folder_id, conn)?.parent_id;
        }
        Ok(())
    }
}
