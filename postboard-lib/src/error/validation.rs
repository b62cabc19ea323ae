//! Validation error types

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A form submission that failed validation.
///
/// Produced purely by the form-validation module; never by the HTTP
/// classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Every field failure, in field order, one entry per violated rule.
    pub fields: Vec<FieldValidationError>,
}

impl ValidationError {
    /// Creates a validation error from field failures.
    pub fn new(fields: Vec<FieldValidationError>) -> Self {
        Self { fields }
    }

    /// Returns `true` if the given field has at least one failure.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed for {} field(s)", self.fields.len())?;
        for field in &self.fields {
            write!(f, "; {}", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
