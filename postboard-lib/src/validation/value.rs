//! Scalar field values

/// A scalar value held by a form field.
///
/// Form fields are heterogeneous (a post title is text, an author id is a
/// number), so the validation map stores this enum rather than a single
/// generic type. Rules are typed over `FieldValue` and decide per variant
/// whether they apply.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value entered yet.
    Missing,
    /// Free-form text.
    Text(String),
    /// Integer input.
    Int(i64),
    /// Floating-point input.
    Float(f64),
}

impl FieldValue {
    /// Returns `true` if no value has been entered.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Missing,
        }
    }
}
