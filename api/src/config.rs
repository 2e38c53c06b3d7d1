use dotenv::dotenv;
use std::env;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn parse(s: &str) -> Result<Environment, &'static str> {
        match s {
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err("Could not parse environment"),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub app_name: String,
    pub api_url: String,
    pub api_port: String,
    pub database_url: String,
    pub database_pool_size: u32,
    pub document_storage_path: String,
    pub environment: Environment,
    pub front_end_url: String,
    pub token_secret: String,
    pub token_issuer: String,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const APP_NAME: &str = "APP_NAME";
const API_URL: &str = "API_URL";
const API_PORT: &str = "API_PORT";
const DATABASE_URL: &str = "DATABASE_URL";
const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
const DOCUMENT_STORAGE_PATH: &str = "DOCUMENT_STORAGE_PATH";
const ENVIRONMENT: &str = "ENVIRONMENT";
const FRONT_END_URL: &str = "FRONT_END_URL";
const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";
const TOKEN_SECRET: &str = "TOKEN_SECRET";
const TOKEN_ISSUER: &str = "TOKEN_ISSUER";

impl Config {
    pub fn parse_environment() -> Result<Environment, &'static str> {
        dotenv().ok();
        match env::var(&ENVIRONMENT) {
            Ok(environment) => Environment::parse(&environment),
            Err(_) => Ok(Environment::Development),
        }
    }

    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Burgee".to_string());

        let database_url = match environment {
            Environment::Test => env::var(&TEST_DATABASE_URL)
                .unwrap_or_else(|_| panic!("{} must be defined.", TEST_DATABASE_URL)),
            _ => env::var(&DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", DATABASE_URL)),
        };

        let database_pool_size = env::var(&DATABASE_POOL_SIZE)
            .map(|s| s.parse().expect("Not a valid integer for database pool size"))
            .unwrap_or(20);

        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_url = env::var(&API_URL).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        let document_storage_path =
            env::var(&DOCUMENT_STORAGE_PATH).unwrap_or_else(|_| "./documents".to_string());

        let front_end_url = env::var(&FRONT_END_URL).unwrap_or_else(|_| "http://localhost:3000".to_string());

        let token_secret =
            env::var(&TOKEN_SECRET).unwrap_or_else(|_| panic!("{} must be defined.", TOKEN_SECRET));
        let token_issuer =
            env::var(&TOKEN_ISSUER).unwrap_or_else(|_| panic!("{} must be defined.", TOKEN_ISSUER));

        Config {
            allowed_origins,
            app_name,
            api_url,
            api_port,
            database_url,
            database_pool_size,
            document_storage_path,
            environment,
            front_end_url,
            token_secret,
            token_issuer,
        }
    }
}
