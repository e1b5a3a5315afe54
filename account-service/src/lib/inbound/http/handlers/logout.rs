use axum::Json;
use serde::Serialize;

/// `POST /logout` — stateless acknowledgement.
///
/// No server-side session or revocation list exists; issued tokens stay
/// valid until their natural expiry.
pub async fn logout() -> Json<LogoutResponseData> {
    Json(LogoutResponseData {
        message: "Logged out successfully",
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    message: &'static str,
}
