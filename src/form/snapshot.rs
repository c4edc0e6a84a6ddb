//! Read-only view of a submitted form.
//!
//! The validator never talks to a page directly. Whatever hosts the form
//! (a browser binding, a test, a JSON file) hands over a [`FormSnapshot`]:
//! the submitted values, the controls the browser currently reports as
//! failing its built-in constraints, and the text of the labels on the page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A file selected in a file input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub name: String,
    pub size: u64,
}

/// A submitted value: plain text, or a file reference for file inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    File(FileRef),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<FileRef> for FieldValue {
    fn from(value: FileRef) -> Self {
        FieldValue::File(value)
    }
}

/// Element kind of a form control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Input,
    Select,
    #[serde(rename = "textarea")]
    TextArea,
    #[default]
    #[serde(other)]
    Other,
}

impl ControlKind {
    /// Whether the user types or picks a value in this control
    pub fn is_editable(self) -> bool {
        !matches!(self, ControlKind::Other)
    }
}

/// A control failing the browser's native constraint validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidControl {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(rename = "tag", default)]
    pub kind: ControlKind,
    /// Declared `type` attribute, e.g. `"email"`; empty for selects and textareas
    #[serde(rename = "type", default)]
    pub input_type: String,
    #[serde(default)]
    pub value_missing: bool,
    #[serde(default)]
    pub type_mismatch: bool,
}

impl InvalidControl {
    pub fn new(kind: ControlKind, name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: name.to_string(),
            kind,
            input_type: String::new(),
            value_missing: false,
            type_mismatch: false,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_type(mut self, input_type: &str) -> Self {
        self.input_type = input_type.to_string();
        self
    }

    pub fn value_missing(mut self) -> Self {
        self.value_missing = true;
        self
    }

    pub fn type_mismatch(mut self) -> Self {
        self.type_mismatch = true;
        self
    }
}

/// What the validator needs to know about a submitted form
pub trait FormSnapshot {
    /// The submitted value for `name`, if the form sent one
    fn value(&self, name: &str) -> Option<&FieldValue>;

    /// Controls currently failing native constraint validation
    fn invalid_controls(&self) -> &[InvalidControl];

    /// Text of the label attached to the control with this `id`
    fn label_for(&self, id: &str) -> Option<&str>;
}

/// A snapshot held entirely in memory.
///
/// Deserializes from
/// `{"values": {...}, "invalid": [...], "labels": {...}}`, where a text
/// value is a JSON string, a file is `{"name": ..., "size": ...}` and
/// `null` stands for a field the form did not send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSnapshot {
    #[serde(default)]
    values: HashMap<String, Option<FieldValue>>,
    #[serde(default)]
    invalid: Vec<InvalidControl>,
    #[serde(default)]
    labels: HashMap<String, String>,
}

impl StaticSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the submitted value for a field
    pub fn with_value(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.to_string(), Some(value.into()));
        self
    }

    /// Drops the value for a field, as if the form never sent it
    pub fn without_value(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }

    pub fn with_invalid(mut self, control: InvalidControl) -> Self {
        self.invalid.push(control);
        self
    }

    pub fn with_label(mut self, id: &str, text: &str) -> Self {
        self.labels.insert(id.to_string(), text.to_string());
        self
    }
}

impl FormSnapshot for StaticSnapshot {
    fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    fn invalid_controls(&self) -> &[InvalidControl] {
        &self.invalid
    }

    fn label_for(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }
}
