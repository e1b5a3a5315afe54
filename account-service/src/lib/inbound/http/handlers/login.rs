use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::account::models::TokenPair;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// `POST /login` — verify a credential and issue an access/refresh pair.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<LoginResponseData>, ApiError> {
    let pair = state
        .auth_service
        .authenticate(&body.identifier, &body.password)
        .await?;

    Ok(Json(pair.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    /// Email address or CPF, matched verbatim against the store.
    identifier: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub account_id: i64,
    pub role: &'static str,
    pub account_kind: &'static str,
    pub requires_2fa: bool,
    pub must_reset_password: bool,
}

impl From<TokenPair> for LoginResponseData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            account_id: pair.account_id,
            role: pair.role.as_str(),
            account_kind: pair.account_kind.as_str(),
            requires_2fa: pair.requires_2fa,
            must_reset_password: pair.must_reset_password,
        }
    }
}
