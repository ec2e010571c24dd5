//! Schema registry
//!
//! Static descriptions of the forms the application can render: each form
//! type maps to an ordered list of field descriptors. The registry is built
//! once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::error::FormError;

// ============================================================================
// Field Descriptors
// ============================================================================

/// Input widget kind for a single field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    /// Single selection from a fixed option list
    #[serde(alias = "dropdown")]
    Choice,
}

/// Static declaration of one form input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field name, unique within its schema
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Human-readable label shown next to the input
    pub label: String,
    /// Declared but not enforced at commit time, see
    /// [`FormSession::missing_required`](super::FormSession::missing_required)
    pub required: bool,
    /// Option list, non-empty only for [`FieldKind::Choice`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// Declare a non-choice field
    pub fn new(name: &str, kind: FieldKind, label: &str, required: bool) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            label: label.to_owned(),
            required,
            options: Vec::new(),
        }
    }

    /// Declare a choice field with its option list
    pub fn choice(name: &str, label: &str, required: bool, options: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            kind: FieldKind::Choice,
            label: label.to_owned(),
            required,
            options: options.iter().map(|o| (*o).to_owned()).collect(),
        }
    }
}

/// An ordered set of field descriptors for one form type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub form_type: String,
    pub fields: Vec<FieldDescriptor>,
}

// ============================================================================
// Registry
// ============================================================================

/// Mapping from form type identifier to its schema.
///
/// Registration order is preserved and drives the order of the form type
/// selector in the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: Vec<FormSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema during construction, builder style
    pub fn with(mut self, schema: FormSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// The three schemas the application ships with
    pub fn builtin() -> Self {
        Self::new()
            .with(FormSchema {
                form_type: "userInformation".to_owned(),
                fields: vec![
                    FieldDescriptor::new("firstName", FieldKind::Text, "First Name", true),
                    FieldDescriptor::new("lastName", FieldKind::Text, "Last Name", true),
                    FieldDescriptor::new("age", FieldKind::Number, "Age", false),
                ],
            })
            .with(FormSchema {
                form_type: "addressInformation".to_owned(),
                fields: vec![
                    FieldDescriptor::new("street", FieldKind::Text, "Street", true),
                    FieldDescriptor::new("city", FieldKind::Text, "City", true),
                    FieldDescriptor::choice(
                        "state",
                        "State",
                        true,
                        &["California", "Texas", "New York"],
                    ),
                    FieldDescriptor::new("zipCode", FieldKind::Text, "Zip Code", false),
                ],
            })
            .with(FormSchema {
                form_type: "paymentInformation".to_owned(),
                fields: vec![
                    FieldDescriptor::new("cardNumber", FieldKind::Text, "Card Number", true),
                    FieldDescriptor::new("expiryDate", FieldKind::Date, "Expiry Date", true),
                    FieldDescriptor::new("cvv", FieldKind::Password, "CVV", true),
                    FieldDescriptor::new("cardholderName", FieldKind::Text, "Cardholder Name", true),
                ],
            })
    }

    /// Look up the schema for a form type
    pub fn lookup(&self, form_type: &str) -> Result<&FormSchema, FormError> {
        self.schemas
            .iter()
            .find(|s| s.form_type == form_type)
            .ok_or_else(|| FormError::UnknownFormType(form_type.to_owned()))
    }

    pub fn is_registered(&self, form_type: &str) -> bool {
        self.schemas.iter().any(|s| s.form_type == form_type)
    }

    /// Registered form type identifiers, in registration order
    pub fn form_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|s| s.form_type.as_str())
    }
}

/// Humanize a camelCase form type identifier for display by inserting a
/// space before each uppercase letter: `userInformation` -> `user Information`
pub fn display_label(form_type: &str) -> String {
    let mut out = String::with_capacity(form_type.len() + 4);
    for ch in form_type.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_registers_three_types_in_order() {
        let registry = SchemaRegistry::builtin();
        let types: Vec<_> = registry.form_types().collect();
        assert_eq!(
            types,
            vec!["userInformation", "addressInformation", "paymentInformation"]
        );
    }

    #[test]
    fn builtin_field_names_are_unique_per_schema() {
        let registry = SchemaRegistry::builtin();
        for form_type in registry.form_types() {
            let schema = registry.lookup(form_type).unwrap();
            let names: HashSet<_> = schema.fields.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names.len(), schema.fields.len(), "{form_type}");
        }
    }

    #[test]
    fn lookup_unknown_type_fails() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(
            registry.lookup("bankInformation"),
            Err(FormError::UnknownFormType("bankInformation".to_owned()))
        );
    }

    #[test]
    fn choice_fields_carry_options() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.lookup("addressInformation").unwrap();
        let state = schema.fields.iter().find(|f| f.name == "state").unwrap();
        assert_eq!(state.kind, FieldKind::Choice);
        assert_eq!(state.options, vec!["California", "Texas", "New York"]);
        for field in schema.fields.iter().filter(|f| f.kind != FieldKind::Choice) {
            assert!(field.options.is_empty());
        }
    }

    #[test]
    fn schema_serializes_with_camel_case_names_and_lowercase_kinds() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.lookup("userInformation").unwrap();
        let json = serde_json::to_value(schema).unwrap();
        assert_eq!(json["formType"], "userInformation");
        assert_eq!(json["fields"][0]["name"], "firstName");
        assert_eq!(json["fields"][0]["type"], "text");
        assert_eq!(json["fields"][2]["type"], "number");
        assert_eq!(json["fields"][2]["required"], false);
        // non-choice fields omit the options list entirely
        assert!(json["fields"][0].get("options").is_none());
    }

    #[test]
    fn dropdown_alias_deserializes_to_choice() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{"name":"state","type":"dropdown","label":"State","required":true,"options":["California"]}"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldKind::Choice);
    }

    #[test]
    fn display_label_splits_camel_case() {
        assert_eq!(display_label("userInformation"), "user Information");
        assert_eq!(display_label("paymentInformation"), "payment Information");
        assert_eq!(display_label("plain"), "plain");
    }
}
