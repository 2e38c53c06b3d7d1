pub use self::connection::*;
pub use self::database::*;

mod connection;
mod database;
