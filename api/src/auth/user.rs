use actix_web::HttpRequest;
use db::models::User as DbUser;
use db::models::{DocumentFolder, FolderAccess, FolderPermission, Permission};
use diesel::PgConnection;
use log::Level::Warn;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;
use crate::errors::{ApiError, AuthError};

/// The authenticated member plus enough request metadata to log access
/// attempts.
#[derive(Clone, Debug)]
pub struct User {
    pub user: DbUser,
    pub ip_address: Option<String>,
    pub uri: String,
    pub method: String,
    pub user_agent: Option<String>,
}

impl User {
    pub fn new(user: DbUser, request: &HttpRequest) -> User {
        let ip_address = request
            .connection_info()
            .realip_remote_addr()
            .map(|ip| ip.to_string());
        let user_agent = request
            .headers()
            .get("User-Agent")
            .and_then(|header| header.to_str().ok())
            .map(|user_agent| user_agent.to_string());
        User {
            user,
            ip_address,
            uri: request.uri().to_string(),
            method: request.method().to_string(),
            user_agent,
        }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn email(&self) -> String {
        self.user.email.clone()
    }

    pub fn has_permission(&self, permission: Permission, conn: &mut PgConnection) -> Result<bool, ApiError> {
        Ok(self.user.has_permission(permission, conn)?)
    }

    /// Administrators for the document library: user managers and anyone
    /// with admin access.
    pub fn is_document_manager(&self, conn: &mut PgConnection) -> Result<bool, ApiError> {
        Ok(self.has_permission(Permission::ManageUsers, conn)?
            || self.has_permission(Permission::AccessAdmin, conn)?)
    }

    /// Folder access through the permission cascade; document managers
    /// bypass per-folder grants entirely.
    pub fn can_access_folder(
        &self,
        folder: &DocumentFolder,
        access: FolderAccess,
        conn: &mut PgConnection,
    ) -> Result<bool, ApiError> {
        if self.is_document_manager(conn)? {
            return Ok(true);
        }
        let role_id = match self.user.role_id {
            Some(role_id) => role_id,
            None => return Ok(false),
        };
        Ok(FolderPermission::role_has_access(role_id, folder, access, conn)?)
    }

    pub fn requires_permission(&self, permission: Permission, conn: &mut PgConnection) -> Result<(), ApiError> {
        if self.has_permission(permission, conn)? {
            return Ok(());
        }
        let mut logging_data = HashMap::new();
        logging_data.insert("accessed_permission", json!(permission.to_string()));
        self.log_unauthorized_access_attempt(logging_data);
        Err(AuthError::unauthorized("User does not have the required permissions").into())
    }

    pub fn log_unauthorized_access_attempt(&self, mut logging_data: HashMap<&'static str, Value>) {
        logging_data.insert("user_id", json!(self.id()));
        logging_data.insert("user_name", json!(self.user.full_name()));
        logging_data.insert("ip_address", json!(self.ip_address));
        logging_data.insert("url", json!(self.uri));
        logging_data.insert("method", json!(self.method));
        jlog!(Warn, "Unauthorized access attempt", logging_data);
    }
}
