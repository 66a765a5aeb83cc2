use serde::{Deserialize, Serialize};

use super::record::Entity;
use crate::domain::validation::{FieldRule, Schema};

static PRODUCT_SCHEMA: Schema = Schema {
    entity: "Product",
    fields: &[FieldRule::optional("name"), FieldRule::optional("client")],
};

/// Product document; both fields are optional strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            client: Some(client.into()),
        }
    }
}

impl Entity for Product {
    const COLLECTION: &'static str = "products";

    fn schema() -> &'static Schema {
        &PRODUCT_SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_product_is_valid() {
        assert_eq!(Product::from_candidate(&json!({})).unwrap(), Product::default());
    }

    #[test]
    fn non_string_name_fails() {
        assert!(Product::from_candidate(&json!({ "name": 42 })).is_err());
        assert!(Product::from_candidate(&json!({ "client": ["Acme"] })).is_err());
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let product = Product {
            name: Some("Widget".to_string()),
            client: None,
        };
        assert_eq!(serde_json::to_value(&product).unwrap(), json!({ "name": "Widget" }));
    }
}
