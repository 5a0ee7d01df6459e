//! Empty collection skeleton used by `pmc init`.

use crate::model::{Collection, Description, Info, Variable, SCHEMA_V2_1};

pub const DEFAULT_NAME: &str = "Tymbl API - Complete Collection";
pub const DEFAULT_DESCRIPTION: &str = "Complete Tymbl API Collection with all endpoints";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const TOKEN_PLACEHOLDER: &str = "your_jwt_token_here";

/// Collection with the v2.1.0 schema, no sections and the `base_url` / `token` variables.
pub fn new_collection(name: &str, description: Option<&str>, base_url: &str) -> Collection {
    Collection {
        info: Info {
            name: name.to_string(),
            description: description.map(Description::from),
            schema: Some(SCHEMA_V2_1.to_string()),
            ..Info::default()
        },
        item: Vec::new(),
        variable: Some(vec![
            Variable::string("base_url", base_url),
            Variable::string("token", TOKEN_PLACEHOLDER),
        ]),
        ..Collection::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skeleton_shape() {
        let c = new_collection(DEFAULT_NAME, Some(DEFAULT_DESCRIPTION), DEFAULT_BASE_URL);
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(
            value,
            json!({
                "info": {
                    "name": "Tymbl API - Complete Collection",
                    "description": "Complete Tymbl API Collection with all endpoints",
                    "schema": SCHEMA_V2_1
                },
                "item": [],
                "variable": [
                    {"key": "base_url", "value": "http://localhost:8080", "type": "string"},
                    {"key": "token", "value": "your_jwt_token_here", "type": "string"}
                ]
            })
        );
    }

    #[test]
    fn description_is_optional() {
        let c = new_collection("Staging", None, "https://staging.example.com");
        assert!(c.info.description.is_none());
        assert_eq!(c.variables()[0].value, Some("https://staging.example.com".into()));
        assert_eq!(c.endpoint_count(), 0);
    }
}
