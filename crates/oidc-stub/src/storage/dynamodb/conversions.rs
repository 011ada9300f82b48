//! Conversions between domain types and DynamoDB items.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use oidc_stub_core::oidc::NonceBinding;

/// Convert a nonce binding to a DynamoDB item.
///
/// Attribute names are the persisted contract: `code` is the table key and
/// `remove_at` is the table's TTL attribute.
pub fn binding_to_item(binding: &NonceBinding) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "code".to_string(),
            AttributeValue::S(binding.code.clone()),
        ),
        (
            "nonce".to_string(),
            AttributeValue::S(binding.nonce.clone()),
        ),
        (
            "userId".to_string(),
            AttributeValue::S(binding.user_id.clone()),
        ),
        (
            "remove_at".to_string(),
            AttributeValue::N(binding.remove_at.to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_carries_the_persisted_layout() {
        let binding = NonceBinding {
            code: "code-1".to_string(),
            nonce: "nonce-1".to_string(),
            user_id: "happy-path".to_string(),
            remove_at: 1_700_086_400,
        };

        let item = binding_to_item(&binding);

        assert_eq!(item["code"], AttributeValue::S("code-1".to_string()));
        assert_eq!(item["nonce"], AttributeValue::S("nonce-1".to_string()));
        assert_eq!(item["userId"], AttributeValue::S("happy-path".to_string()));
        assert_eq!(
            item["remove_at"],
            AttributeValue::N("1700086400".to_string())
        );
        assert_eq!(item.len(), 4);
    }
}
