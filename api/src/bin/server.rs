extern crate burgee_api;
extern crate dotenv;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_json;

use burgee_api::config::{Config, Environment};
use burgee_api::server::Server;
use dotenv::dotenv;
use log::Level::*;
use logging::*;

#[actix_web::main]
async fn main() {
    setup_logger();
    jlog!(Info, "Loading environment");
    dotenv().ok();

    let environment = Config::parse_environment().unwrap_or_else(|_| panic!("Environment is invalid."));
    let config = Config::new(environment);

    jlog!(Info, "burgee::server", "Server starting", {"app_name": config.app_name});
    Server::start(config).await;
}
