//! Field-level validation of request payloads.
//!
//! Payloads collect every failing field into a [`ModelState`] rather than
//! stopping at the first problem, so callers receive the full list of
//! messages in one response.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelState(BTreeMap<String, Vec<String>>);

impl ModelState {
    /// Creates an empty (valid) model state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Returns `true` when no field has recorded a message.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the recorded messages keyed by field name.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }

    /// Returns the messages recorded for one field.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Checks a required text field and its maximum length.
    ///
    /// Whitespace-only values count as missing.
    pub fn require_text(&mut self, field: &str, value: Option<&str>, max_chars: usize) {
        match value {
            Some(text) if !text.trim().is_empty() => self.limit_text(field, Some(text), max_chars),
            _ => self.add_error(field, format!("The {field} field is required.")),
        }
    }

    /// Checks the maximum length of an optional text field.
    pub fn limit_text(&mut self, field: &str, value: Option<&str>, max_chars: usize) {
        if value.is_some_and(|text| text.chars().count() > max_chars) {
            self.add_error(
                field,
                format!("{field} cannot be longer than {max_chars} characters."),
            );
        }
    }

    /// Checks that a required non-text field was supplied.
    pub fn require<T>(&mut self, field: &str, value: Option<&T>) {
        if value.is_none() {
            self.add_error(field, format!("The {field} field is required."));
        }
    }

    /// Converts the collected state into a result.
    ///
    /// # Errors
    ///
    /// Returns the model state itself when any field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_valid() { Ok(()) } else { Err(self) }
    }
}

/// Payloads that can report field-level validation failures.
pub trait Validate {
    /// Validates every field and returns the collected messages.
    fn validate(&self) -> ModelState;
}
