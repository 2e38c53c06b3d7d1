#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod db;
pub mod models;
pub mod prelude;
pub mod schema;
pub mod utils;
pub mod validators;
