//! Authorization-code issuance.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::Response,
    Form,
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use oidc_stub_core::oidc::{
    generate_code, removal_deadline, resolve_user_id, validate_authorize, AuditEvent,
    AuthorizeParams, NonceBinding,
};

use crate::error::AppError;
use crate::state::AppState;

/// GET /authorize - issue a code from query parameters.
pub async fn authorize_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<AuthorizeParams>,
) -> Result<Response, AppError> {
    issue_code(&state, &jar, params).await
}

/// POST /authorize - issue a code from a form body (the picker page submits
/// here).
pub async fn authorize_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(params): Form<AuthorizeParams>,
) -> Result<Response, AppError> {
    issue_code(&state, &jar, params).await
}

/// The code issuance flow: validate, generate, persist the nonce binding,
/// emit the audit event, redirect back to the relying party.
///
/// Validation runs before either side effect so a rejected request leaves no
/// trace. The audit emission and the binding write are independent: audit is
/// dispatched as a detached task whose outcome never gates the response,
/// while a failed binding write fails the whole call.
async fn issue_code(
    state: &AppState,
    jar: &CookieJar,
    params: AuthorizeParams,
) -> Result<Response, AppError> {
    let request = validate_authorize(params)?;

    let code = generate_code();
    let issued_at = Utc::now();
    let user_id = resolve_user_id(
        jar.get("userId").map(|cookie| cookie.value()),
        request.scenario.as_deref(),
    );

    let location = format!(
        "{}?state={}&code={}",
        request.redirect_uri,
        urlencoding::encode(&request.state),
        urlencoding::encode(&code),
    );

    // A redirect_uri that cannot form a header value is a malformed request;
    // reject it before any side effect runs.
    let location = header::HeaderValue::from_str(&location)
        .map_err(|_| oidc_stub_core::oidc::OidcError::InvalidRequest("redirect_uri"))?;

    let binding = NonceBinding {
        code: code.clone(),
        nonce: request.nonce.clone(),
        user_id: user_id.clone(),
        remove_at: removal_deadline(issued_at),
    };

    // Best-effort audit: one delivery attempt off the request path. Failures
    // are logged here and never reach the client.
    let event = AuditEvent::code_issued(&user_id, issued_at);
    let audit = state.audit.clone();
    tokio::spawn(async move {
        if let Err(err) = audit.deliver(&event).await {
            tracing::warn!(event_id = %event.event_id, error = %err, "audit delivery failed");
        }
    });

    state.nonces.put_binding(&binding).await?;

    tracing::info!(
        code = %code,
        scenario = %request.scenario(),
        user_id = %user_id,
        "authorization code issued"
    );

    Ok(Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, location)
        .body(Body::empty())
        .expect("static response parts are valid"))
}
