//! Signed identity token issuance.

use axum::{extract::State, Json};
use chrono::Utc;
use oidc_stub_core::oidc::TokenResponse;
use oidc_stub_core::token::{IdTokenClaims, IdTokenHeader, UnsignedToken};

use crate::error::AppError;
use crate::state::AppState;

/// POST /token - exchange the configured signing key for a signed identity
/// token.
///
/// This endpoint is identity-agnostic: the token's subject embeds a fresh
/// random identifier and is not correlated with anything chosen at the
/// authorize step. The access/refresh values in the response are fixed stub
/// placeholders, not credentials.
pub async fn issue_token(State(state): State<AppState>) -> Result<Json<TokenResponse>, AppError> {
    let config = &state.config;

    let header = IdTokenHeader::new(&config.signing_key_id);
    let claims = IdTokenClaims::new(&config.client_id, &config.environment, Utc::now());
    let unsigned = UnsignedToken::new(&header, &claims)?;

    let signature = state
        .signer
        .sign(&config.signing_key_id, unsigned.signing_input().as_bytes())
        .await?;
    let id_token = unsigned.assemble(&signature)?;

    tracing::info!(kid = %config.signing_key_id, "identity token issued");

    Ok(Json(TokenResponse::stub(id_token)))
}
