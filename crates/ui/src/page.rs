//! Per-request page state handed to controllers.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{ControllerError, ControllerResult};
use crate::form::{FieldValue, Form};

/// Key/value data extracted from the current page URL.
///
/// Controllers pass these through to the resource layer unchanged; the
/// resource decides which keys identify the entity in view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RouteParams(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Everything a controller sees while serving one page interaction: the
/// route parameters, the form snapshot, and the page view model.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    params: RouteParams,
    form: Form,
    view_model: Map<String, Value>,
}

impl PageContext {
    pub fn new(params: RouteParams) -> Self {
        Self {
            params,
            form: Form::new(),
            view_model: Map::new(),
        }
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.form = form;
        self
    }

    /// Route parameters of the current page.
    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Look up a named form input; absence is a view/controller mismatch.
    pub fn input(&self, name: &str) -> ControllerResult<&FieldValue> {
        self.form
            .input(name)
            .ok_or_else(|| ControllerError::MissingInput(name.to_string()))
    }

    /// Merge a JSON object patch into the page view model and return the
    /// merged view model. Non-object patches replace nothing.
    pub fn update_view_model(&mut self, patch: Value) -> &Map<String, Value> {
        if let Value::Object(entries) = patch {
            for (key, value) in entries {
                self.view_model.insert(key, value);
            }
        }
        &self.view_model
    }

    /// Current page view model.
    pub fn view_model(&self) -> &Map<String, Value> {
        &self.view_model
    }
}
