use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use oidc_stub_core::oidc::OidcError;
use thiserror::Error;

/// Handler-level error wrapper for [`OidcError`].
///
/// Client-visible bodies stay generic; detail goes to server-side logs only.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AppError(#[from] pub OidcError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            OidcError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            OidcError::ConfigurationMissing(_) => {
                tracing::error!("configuration error: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
            OidcError::StoreUnavailable(_)
            | OidcError::SigningUnavailable(_)
            | OidcError::AuditDelivery(_)
            | OidcError::TokenEncoding(_) => {
                tracing::error!("internal error: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_bad_request() {
        let response = AppError(OidcError::InvalidRequest("nonce")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_failures_map_to_generic_500() {
        for err in [
            OidcError::StoreUnavailable("table gone".to_string()),
            OidcError::SigningUnavailable("no material".to_string()),
            OidcError::TokenEncoding("bad json".to_string()),
        ] {
            let response = AppError(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
