//! Raw form snapshots and field error lists

use std::collections::HashMap;

/// Raw string values of a form, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a field, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a field's raw value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// A message attached to one named input
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldError {
    field: String,
    message: String,
}

/// Ordered field errors, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    items: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. The first message for a field wins;
    /// later ones are ignored. Returns whether the error was kept.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) -> bool {
        let field = field.into();
        if self.contains(&field) {
            return false;
        }
        self.items.push(FieldError {
            field,
            message: message.into(),
        });
        true
    }

    pub fn contains(&self, field: &str) -> bool {
        self.items.iter().any(|e| e.field == field)
    }

    /// Message recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Field names in the order their errors were recorded
    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|e| e.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
