//! Form field access as seen by a button handler.
//!
//! The shell reads the DOM and hands the controller a [`Form`] snapshot;
//! handlers never touch the view directly.

use std::collections::BTreeMap;

/// A single named form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

impl FieldValue {
    /// The field's text value. Checkboxes answer an empty string.
    pub fn value(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Whether the field is a checked checkbox. Text fields answer `false`.
    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checkbox(true))
    }
}

/// Snapshot of a page's named form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: BTreeMap<String, FieldValue>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text input.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Text(value.to_string()));
        self
    }

    /// Add a checkbox input.
    pub fn checkbox(mut self, name: &str, checked: bool) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Checkbox(checked));
        self
    }

    /// Look up a field by name.
    pub fn input(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
