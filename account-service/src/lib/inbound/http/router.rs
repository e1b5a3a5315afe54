use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::logout::logout;
use crate::domain::account::roles::EmailRoleResolver;
use crate::domain::account::service::AuthService;
use crate::outbound::repositories::account::PostgresAccountRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresAccountRepository, EmailRoleResolver>>,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresAccountRepository, EmailRoleResolver>>,
) -> Router {
    let state = AppState { auth_service };

    // Request bodies carry credentials; spans log the envelope only.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/health", get(health))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
