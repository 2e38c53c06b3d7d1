use chrono::NaiveDateTime;
use diesel;
use diesel::dsl;
use diesel::prelude::*;
use crate::models::DocumentFolder;
use crate::schema::document_files;
use crate::utils::errors::ConvertToDatabaseError;
use crate::utils::errors::DatabaseError;
use crate::utils::errors::ErrorCode;
use uuid::Uuid;
use validator::Validate;

/// Metadata row for a file stored in the document library. The bytes live
/// under the configured storage root at `stored_path`.
#[derive(Associations, Identifiable, Queryable, Clone, Debug, PartialEq, Serialize)]
#[diesel(belongs_to(DocumentFolder, foreign_key = folder_id))]
#[diesel(table_name = document_files)]
pub struct DocumentFile {
    pub id: Uuid,
    pub folder_id: Uuid,
    pub name: String,
    pub stored_path: String,
    pub description: String,
    pub uploaded_by: Option<Uuid>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Validate)]
#[diesel(table_name = document_files)]
pub struct NewDocumentFile {
    pub folder_id: Uuid,
    #[validate(length(min = 1, message = "File name cannot be blank"))]
    pub name: String,
    pub stored_path: String,
    pub description: String,
    pub uploaded_by: Option<Uuid>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[diesel(table_name = document_files)]
pub struct DocumentFileEditableAttributes {
    #[validate(length(min = 1, message = "File name cannot be blank"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewDocumentFile {
    pub fn commit(self, conn: &mut PgConnection) -> Result<DocumentFile, DatabaseError> {
        self.validate()?;
        diesel::insert_into(document_files::table)
            .values(&self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create document file")
    }
}

impl DocumentFile {
    pub fn create(folder_id: Uuid, name: &str, stored_path: &str) -> NewDocumentFile {
        NewDocumentFile {
            folder_id,
            name: name.to_string(),
            stored_path: stored_path.to_string(),
            description: "".to_string(),
            uploaded_by: None,
            file_size: None,
            mime_type: None,
        }
    }

    pub fn find(id: Uuid, conn: &mut PgConnection) -> Result<DocumentFile, DatabaseError> {
        document_files::table
            .find(id)
            .first::<DocumentFile>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading document file")
    }

    pub fn find_by_folder(folder_id: Uuid, conn: &mut PgConnection) -> Result<Vec<DocumentFile>, DatabaseError> {
        document_files::table
            .filter(document_files::folder_id.eq(folder_id))
            .order_by(document_files::name.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load files for folder")
    }

    pub fn update(
        &self,
        attributes: DocumentFileEditableAttributes,
        conn: &mut PgConnection,
    ) -> Result<DocumentFile, DatabaseError> {
        attributes.validate()?;
        diesel::update(self)
            .set((attributes, document_files::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update document file")
    }

    pub fn destroy(self, conn: &mut PgConnection) -> Result<usize, DatabaseError> {
        diesel::delete(&self)
            .execute(conn)
            .to_db_error(ErrorCode::DeleteError, "Could not delete document file")
    }
}
