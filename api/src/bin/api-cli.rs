extern crate burgee_api;
extern crate burgee_db;
extern crate clap;
extern crate dotenv;
extern crate logging;

use burgee_api::config::Config;
use burgee_api::database::Database;
use burgee_db::models::{Role, RoleName, User};
use clap::{App, Arg, SubCommand};
use dotenv::dotenv;
use log::info;

pub fn main() {
    logging::setup_logger();
    info!("Loading environment");
    dotenv().ok();

    let environment = Config::parse_environment().unwrap_or_else(|_| panic!("Environment is invalid."));
    let config = Config::new(environment);
    let database = Database::from_config(&config);

    let matches = App::new("Burgee CLI Utility")
        .author("Burgee")
        .about("Command line interface for operational tasks on the Burgee API")
        .subcommand(SubCommand::with_name("seed-roles").about("Creates the default club roles when missing"))
        .subcommand(
            SubCommand::with_name("create-user")
                .about("Creates a club user")
                .arg(Arg::with_name("email").required(true).help("The user's email address"))
                .arg(Arg::with_name("first_name").required(true).help("The user's first name"))
                .arg(Arg::with_name("last_name").required(true).help("The user's last name"))
                .arg(Arg::with_name("password").required(true).help("The user's password"))
                .arg(
                    Arg::with_name("role")
                        .long("role")
                        .takes_value(true)
                        .help("Role name: Viewer, Member, Editor or Admin"),
                ),
        )
        .subcommand(SubCommand::with_name("list-users").about("Lists all club users"))
        .get_matches();

    let connection = database.get_connection().expect("Could not get database connection");

    match matches.subcommand() {
        ("seed-roles", Some(_)) => {
            let roles = Role::create_defaults(&mut connection.get()).expect("Could not create default roles");
            for role in roles {
                println!("Role created/verified: {}", role.name);
            }
        }
        ("create-user", Some(sub_matches)) => {
            let email = sub_matches.value_of("email").unwrap();
            let first_name = sub_matches.value_of("first_name").unwrap();
            let last_name = sub_matches.value_of("last_name").unwrap();
            let password = sub_matches.value_of("password").unwrap();

            let role_id = match sub_matches.value_of("role") {
                Some(role_name) => {
                    let role_name = role_name.parse::<RoleName>().expect("Unknown role name");
                    let role = Role::find_by_name(role_name, &mut connection.get())
                        .expect("Role not found, run seed-roles first");
                    Some(role.id)
                }
                None => None,
            };

            let mut new_user = User::create(email, first_name, last_name, password);
            new_user.role_id = role_id;
            let user = new_user.commit(&mut connection.get()).expect("Could not create user");
            println!("User created: {} ({})", user.full_name(), user.email);
        }
        ("list-users", Some(_)) => {
            let users = User::all(&mut connection.get()).expect("Could not load users");
            for user in users {
                println!(
                    "{}\t{}\t{}",
                    user.id,
                    user.full_name(),
                    if user.is_active { "active" } else { "inactive" }
                );
            }
        }
        _ => {
            println!("{}", matches.usage());
        }
    }
}
