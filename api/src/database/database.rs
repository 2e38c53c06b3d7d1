use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use crate::config::Config;
use crate::database::Connection;
use crate::errors::{ApiError, ApplicationError};

type R2D2Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub struct Database {
    connection_pool: R2D2Pool,
}

impl Database {
    pub fn from_config(config: &Config) -> Database {
        Database {
            connection_pool: create_connection_pool(config),
        }
    }

    pub fn get_connection(&self) -> Result<Connection, ApiError> {
        let connection = self
            .connection_pool
            .get()
            .map_err(|e| ApplicationError::new(format!("Could not get database connection: {}", e)))?;
        Ok(connection.into())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Database {
            connection_pool: self.connection_pool.clone(),
        }
    }
}

fn create_connection_pool(config: &Config) -> R2D2Pool {
    let connection_manager = ConnectionManager::new(config.database_url.clone());
    r2d2::Pool::builder()
        .max_size(config.database_pool_size)
        .build(connection_manager)
        .expect("Failed to create connection pool.")
}
