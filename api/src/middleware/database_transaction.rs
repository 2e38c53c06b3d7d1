use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error;
use actix_web::Error;
use actix_web::HttpMessage;
use futures::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use crate::database::Connection;

/// Settles the request's database transaction once the handler has run:
/// commit on a success response, rollback when the response carries an
/// error.
pub struct DatabaseTransaction;

impl DatabaseTransaction {
    pub fn new() -> DatabaseTransaction {
        DatabaseTransaction {}
    }

    // Reconcile response status and the request's DB connection transaction
    pub fn complete<B>(response: ServiceResponse<B>) -> error::Result<ServiceResponse<B>> {
        let connection = response.request().extensions().get::<Connection>().cloned();

        if let Some(connection) = connection {
            let transaction_response = match response.response().error() {
                Some(_) => connection.rollback_transaction(),
                None => connection.commit_transaction(),
            };

            // A failed settle leaves the transaction open; the pool discards
            // the connection on checkin
            if let Err(e) = transaction_response {
                error!("Diesel Error: {}", e.to_string());
                return Err(e.into());
            }
        }

        Ok(response)
    }
}

impl<S, B> Transform<S, ServiceRequest> for DatabaseTransaction
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = DatabaseTransactionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(DatabaseTransactionService { service })
    }
}

pub struct DatabaseTransactionService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for DatabaseTransactionService<S>
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
        let fut = self.service.call(request);
        Box::pin(async move {
            let response = fut.await?;
            // When the handler itself errored the connection's transaction is
            // still open; settle it based on the response that will be sent.
            DatabaseTransaction::complete(response)
        })
    }
}
