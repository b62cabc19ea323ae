//! Per-field and per-form validation state

use std::collections::BTreeMap;

use crate::error::FieldValidationError;
use crate::error::ValidationError;

use super::FieldValue;
use super::Rule;

/// Validation state for a single named field.
///
/// A field starts pristine (neither touched nor dirty) and validation is
/// suppressed until it leaves that state: `touched` is set once the field
/// has lost focus, `dirty` once its value has changed from the initial one.
#[derive(Debug)]
pub struct FieldState {
    value: FieldValue,
    rules: Vec<Rule>,
    touched: bool,
    dirty: bool,
}

impl FieldState {
    /// Creates a pristine field with an initial value and its rules.
    pub fn new(value: impl Into<FieldValue>, rules: Vec<Rule>) -> Self {
        Self {
            value: value.into(),
            rules,
            touched: false,
            dirty: false,
        }
    }

    /// Current value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Whether the field has lost focus at least once.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Whether the value has changed from its initial value.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    fn errors(&self) -> Vec<String> {
        if !(self.touched || self.dirty) {
            return Vec::new();
        }
        // Every rule runs in declaration order; all violations report.
        self.rules
            .iter()
            .filter(|rule| !rule.check(&self.value))
            .map(|rule| rule.message().to_string())
            .collect()
    }
}

/// Validation state for a whole form: a mapping from field name to
/// [`FieldState`].
///
/// Derived views (`errors`, `is_valid`) are recomputed from current state on
/// every call, never cached across mutations.
#[derive(Debug, Default)]
pub struct FormValidation {
    fields: BTreeMap<String, FieldState>,
}

impl FormValidation {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pristine field (builder style).
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        rules: Vec<Rule>,
    ) -> Self {
        self.fields.insert(name.into(), FieldState::new(value, rules));
        self
    }

    /// Returns the state of a field, if it exists.
    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Validates one field, returning every violated rule's message in rule
    /// declaration order.
    ///
    /// Returns the empty list while the field is pristine (neither touched
    /// nor dirty), and for unknown field names.
    pub fn validate_field(&self, name: &str) -> Vec<String> {
        self.fields.get(name).map(FieldState::errors).unwrap_or_default()
    }

    /// Marks every field touched, then reports whether the whole form is
    /// valid. Typically called on submit.
    ///
    /// The touch pass is an observable side effect: it forces all error
    /// messages to materialize, so this is not a pure query.
    pub fn validate_all_fields(&mut self) -> bool {
        for field in self.fields.values_mut() {
            field.touched = true;
        }
        self.is_valid()
    }

    /// Marks a field as touched. Idempotent; unknown names are ignored.
    pub fn touch_field(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.touched = true;
        }
    }

    /// Marks a field as dirty. Idempotent; unknown names are ignored.
    pub fn dirty_field(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.dirty = true;
        }
    }

    /// Sets a field's value and marks it dirty.
    ///
    /// Does not mark the field touched: typing alone, without blur, only
    /// surfaces errors through the dirty flag.
    pub fn update_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = value.into();
            field.dirty = true;
        }
    }

    /// Current error messages for every field, recomputed from scratch.
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.errors()))
            .collect()
    }

    /// `true` iff every field's error list is empty.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|field| field.errors().is_empty())
    }

    /// Bundles the current failures into a [`ValidationError`], or `None`
    /// when the form is valid.
    ///
    /// Pristine fields contribute nothing; call
    /// [`validate_all_fields`](Self::validate_all_fields) first to force a
    /// full submit-time check.
    pub fn validation_error(&self) -> Option<ValidationError> {
        let fields: Vec<FieldValidationError> = self
            .fields
            .iter()
            .flat_map(|(name, field)| {
                field
                    .errors()
                    .into_iter()
                    .map(|message| FieldValidationError::new(name.clone(), message))
                    .collect::<Vec<_>>()
            })
            .collect();

        if fields.is_empty() {
            None
        } else {
            Some(ValidationError::new(fields))
        }
    }
}
