//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `OidcError::StoreUnavailable`. Every put failure
//! is fatal to the authorize call; nothing here is retried.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use oidc_stub_core::oidc::OidcError;

/// Map a PutItem SDK error to `StoreUnavailable`.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> OidcError {
    let detail = match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        PutItemError::RequestLimitExceeded(_) => "Request limit exceeded, please retry".to_string(),
        PutItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        PutItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("PutItem failed: {:?}", err),
    };
    OidcError::StoreUnavailable(detail)
}
