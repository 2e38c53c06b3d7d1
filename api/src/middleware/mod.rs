pub use self::api_logger::*;
pub use self::database_transaction::*;

mod api_logger;
mod database_transaction;
