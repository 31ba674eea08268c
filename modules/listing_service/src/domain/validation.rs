//! JSON Schema validation for listing payloads
//!
//! The schema is compiled once at startup and shared by the create and update
//! handlers, so both apply the same required-field set.

use crate::contract::ListingError;
use jsonschema::Validator;
use serde_json::{json, Map, Value};

/// Required fields used when configuration does not override them
pub const DEFAULT_REQUIRED_FIELDS: &[&str] = &["address", "city", "state"];

const STRING_FIELDS: &[&str] = &["address", "zip_code", "city", "state"];
const COUNT_FIELDS: &[&str] = &["beds", "baths", "sqft", "year_built"];
const NUMBER_FIELDS: &[&str] = &["market_price"];

fn is_listing_field(name: &str) -> bool {
    STRING_FIELDS
        .iter()
        .chain(COUNT_FIELDS)
        .chain(NUMBER_FIELDS)
        .any(|f| *f == name)
}

/// Build the listing JSON Schema for the given required-field set.
///
/// Optional fields also accept `null`, read as the zero value. Required
/// fields reject `null`, and required strings must be non-empty.
pub fn listing_schema<S: AsRef<str>>(required: &[S]) -> Value {
    let required: Vec<&str> = required.iter().map(|r| r.as_ref()).collect();
    let is_required = |name: &str| required.contains(&name);
    let type_of = |name: &str, ty: &str| {
        if is_required(name) {
            json!(ty)
        } else {
            json!([ty, "null"])
        }
    };

    let mut properties = Map::new();
    for &name in STRING_FIELDS {
        let mut prop = json!({ "type": type_of(name, "string") });
        if is_required(name) {
            prop["minLength"] = json!(1);
        }
        properties.insert(name.to_string(), prop);
    }
    for &name in COUNT_FIELDS {
        properties.insert(
            name.to_string(),
            json!({ "type": type_of(name, "integer"), "minimum": 0, "maximum": u32::MAX }),
        );
    }
    for &name in NUMBER_FIELDS {
        properties.insert(
            name.to_string(),
            json!({ "type": type_of(name, "number"), "minimum": 0 }),
        );
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Compiled validator for create and update payloads
pub struct ListingValidator {
    validator: Validator,
    required: Vec<String>,
}

impl ListingValidator {
    /// Compile the listing schema. Fails if a required field is not a listing field.
    pub fn new<S: AsRef<str>>(required: &[S]) -> Result<Self, ListingError> {
        let required: Vec<&str> = required.iter().map(|r| r.as_ref()).collect();
        if let Some(unknown) = required.iter().find(|r| !is_listing_field(r)) {
            return Err(ListingError::validation(format!(
                "'{}' is not a listing field and cannot be required",
                unknown
            )));
        }

        let schema = listing_schema(&required);
        let validator = Validator::new(&schema).map_err(|e| {
            ListingError::validation(format!("Invalid listing JSON Schema: {}", e))
        })?;

        Ok(Self {
            validator,
            required: required.iter().map(|r| r.to_string()).collect(),
        })
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    /// Validate a decoded JSON payload, reporting every failing keyword
    pub fn validate(&self, payload: &Value) -> Result<(), ListingError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(payload)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{}: {}", path, e)
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ListingError::validation(errors.join("; ")))
        }
    }
}

impl std::fmt::Debug for ListingValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingValidator")
            .field("required", &self.required)
            .finish()
    }
}
