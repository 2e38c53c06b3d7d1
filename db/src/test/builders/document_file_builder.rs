use rand::prelude::*;
use uuid::Uuid;
use crate::db::Connection;
use crate::models::*;
use crate::test::builders::DocumentFolderBuilder;

pub struct DocumentFileBuilder<'a> {
    name: String,
    folder_id: Option<Uuid>,
    uploaded_by: Option<Uuid>,
    connection: &'a Connection,
}

impl<'a> DocumentFileBuilder<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        let x: u32 = random();
        DocumentFileBuilder {
            name: format!("file-{}.pdf", x),
            folder_id: None,
            uploaded_by: None,
            connection,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_folder(mut self, folder: &DocumentFolder) -> Self {
        self.folder_id = Some(folder.id);
        self
    }

    pub fn uploaded_by(mut self, user: &User) -> Self {
        self.uploaded_by = Some(user.id);
        self
    }

    pub fn finish(self) -> DocumentFile {
        let folder_id = self
            .folder_id
            .unwrap_or_else(|| DocumentFolderBuilder::new(self.connection).finish().id);

        let mut new_file = DocumentFile::create(folder_id, &self.name, &format!("test/{}", self.name));
        new_file.uploaded_by = self.uploaded_by;
        new_file.commit(&mut self.connection.get()).unwrap()
    }
}
