use actix_web::test;
use actix_web::web::Data;
use actix_web::HttpRequest;
use burgee_api::config::{Config, Environment};
use burgee_api::database::Database;
use burgee_api::server::{AppState, GetAppState};

pub struct TestRequest {
    pub request: HttpRequest,
    pub config: Config,
}

#[allow(dead_code)]
impl TestRequest {
    pub fn create() -> TestRequest {
        TestRequest::create_with_uri("/")
    }

    pub fn create_with_uri(path: &str) -> TestRequest {
        let config = Config::new(Environment::Test);
        let request = test::TestRequest::default()
            .uri(path)
            .app_data(Data::new(AppState::new(
                config.clone(),
                Database::from_config(&config),
            )))
            .to_http_request();

        TestRequest { request, config }
    }

    pub fn extract_state(&self) -> Data<AppState> {
        self.request.state()
    }

    /// A bare request without application state, for building auth users.
    pub fn create_plain() -> HttpRequest {
        test::TestRequest::default().to_http_request()
    }
}
