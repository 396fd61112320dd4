//! Record access for batch cleaning

use std::borrow::Cow;

use serde_json::{Map, Value};

/// One tabular row: column name to JSON value
pub type Row = Map<String, Value>;

/// A record exposing named text fields
///
/// `None` means the field is null or missing. Implementations may coerce
/// non-string scalars to their string form.
pub trait TextRecord {
    /// Read a field as text
    fn field(&self, column: &str) -> Option<Cow<'_, str>>;

    /// Overwrite a field with text
    fn set_field(&mut self, column: &str, value: String);

    /// Read the text column
    fn text(&self, column: &str) -> Option<Cow<'_, str>> {
        self.field(column)
    }

    /// Overwrite the text column
    fn set_text(&mut self, column: &str, value: String) {
        self.set_field(column, value)
    }
}

impl TextRecord for Row {
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        match self.get(column)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    fn set_field(&mut self, column: &str, value: String) {
        self.insert(column.to_string(), Value::String(value));
    }
}

impl TextRecord for Option<String> {
    fn field(&self, _column: &str) -> Option<Cow<'_, str>> {
        self.as_deref().map(Cow::Borrowed)
    }

    fn set_field(&mut self, _column: &str, value: String) {
        *self = Some(value);
    }
}
