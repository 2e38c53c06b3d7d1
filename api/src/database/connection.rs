use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use db::db::Connection as DbConnection;
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::PgConnection;
use futures::future::{ready, Ready};
use std::cell::RefMut;
use crate::errors::{ApiError, ApplicationError};
use crate::server::AppState;

/// Request-scoped database connection. The first extractor to ask for it
/// pulls one from the pool, opens a transaction and parks a clone in the
/// request extensions; the transaction middleware settles it when the
/// response leaves.
#[derive(Clone)]
pub struct Connection {
    inner: DbConnection,
}

impl Connection {
    pub fn get(&self) -> RefMut<'_, PgConnection> {
        self.inner.get()
    }

    pub fn begin_transaction(&self) -> Result<(), ApiError> {
        AnsiTransactionManager::begin_transaction(&mut *self.get())?;
        Ok(())
    }

    pub fn commit_transaction(&self) -> Result<(), ApiError> {
        AnsiTransactionManager::commit_transaction(&mut *self.get())?;
        Ok(())
    }

    pub fn rollback_transaction(&self) -> Result<(), ApiError> {
        AnsiTransactionManager::rollback_transaction(&mut *self.get())?;
        Ok(())
    }
}

impl From<DbConnection> for Connection {
    fn from(inner: DbConnection) -> Self {
        Connection { inner }
    }
}

impl From<PgConnection> for Connection {
    fn from(connection: PgConnection) -> Self {
        Connection {
            inner: connection.into(),
        }
    }
}

impl From<PooledConnection<ConnectionManager<PgConnection>>> for Connection {
    fn from(connection: PooledConnection<ConnectionManager<PgConnection>>) -> Self {
        Connection {
            inner: connection.into(),
        }
    }
}

pub(crate) fn connection_from_request(request: &HttpRequest) -> Result<Connection, ApiError> {
    if let Some(connection) = request.extensions().get::<Connection>() {
        return Ok(connection.clone());
    }

    let state = request
        .app_data::<Data<AppState>>()
        .ok_or_else(|| ApplicationError::new("AppState not configured for application".to_string()))?;
    let connection = state.database.get_connection()?;
    connection.begin_transaction()?;
    request.extensions_mut().insert(connection.clone());
    Ok(connection)
}

pub trait RequestConnection {
    fn connection(&self) -> Result<Connection, ApiError>;
}

impl RequestConnection for HttpRequest {
    fn connection(&self) -> Result<Connection, ApiError> {
        connection_from_request(self)
    }
}

impl FromRequest for Connection {
    type Error = ApiError;
    type Future = Ready<Result<Connection, ApiError>>;

    fn from_request(request: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(connection_from_request(request))
    }
}
