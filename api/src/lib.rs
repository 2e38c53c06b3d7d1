#![deny(unreachable_patterns)]
#![deny(unused_variables)]
// Unused results is more often than not an error
#![deny(unused_must_use)]
extern crate burgee_db as db;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate jsonwebtoken as jwt;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;

pub mod auth;
pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod extractors;
pub mod helpers;
pub mod middleware;
pub mod models;
mod routing;
pub mod server;
pub mod utils;
