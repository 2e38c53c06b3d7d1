use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures::future::{ok, Ready};
use log::Level::{Debug, Error as ErrorLevel};
use std::future::Future;
use std::pin::Pin;

/// Emits a structured log line per request and surfaces handler errors with
/// their request context.
pub struct ApiLogger;

impl ApiLogger {
    pub fn new() -> ApiLogger {
        ApiLogger {}
    }

    fn start(request: &ServiceRequest) {
        jlog!(
            Debug,
            "burgee_api::api_logger",
            &format!("{} {}", request.method(), request.path()),
            {
                "ip_address": request.connection_info().realip_remote_addr(),
                "uri": request.uri().to_string(),
                "method": request.method().to_string(),
                "user_agent": request
                    .headers()
                    .get("User-Agent")
                    .map(|h| h.to_str().unwrap_or("")),
                "api_version": env!("CARGO_PKG_VERSION")
            }
        );
    }

    fn finish<B>(response: &ServiceResponse<B>) {
        if let Some(error) = response.response().error() {
            let request = response.request();
            jlog!(
                ErrorLevel,
                "burgee_api::api_logger",
                &error.to_string(),
                {
                    "uri": request.uri().to_string(),
                    "method": request.method().to_string(),
                    "status_code": response.status().as_u16()
                }
            );
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ApiLoggerService { service })
    }
}

pub struct ApiLoggerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ApiLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        ApiLogger::start(&request);
        let fut = self.service.call(request);
        Box::pin(async move {
            let response = fut.await?;
            ApiLogger::finish(&response);
            Ok(response)
        })
    }
}
