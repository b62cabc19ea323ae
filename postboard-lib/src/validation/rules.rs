//! Validation rules

use std::sync::OnceLock;

use regex::Regex;

use super::FieldValue;

type Predicate = Box<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// A single validation rule: a predicate over a field value plus the
/// human-readable message reported when the predicate fails.
///
/// Built-in constructors carry a default message that callers can replace
/// with [`Rule::with_message`].
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Creates a rule from an arbitrary predicate.
    pub fn custom<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Replaces the rule's message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns the failure message for this rule.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs the predicate against a value. `true` means the value passes.
    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value)
    }

    /// Requires a value to be present: fails on [`FieldValue::Missing`] and
    /// on text whose trimmed length is zero. Numbers always pass.
    pub fn required() -> Self {
        Self::custom(
            |value| match value {
                FieldValue::Missing => false,
                FieldValue::Text(s) => !s.trim().is_empty(),
                FieldValue::Int(_) | FieldValue::Float(_) => true,
            },
            "This field is required",
        )
    }

    /// Requires text to be at least `min` characters long.
    ///
    /// Non-text values pass; combine with [`Rule::required`] to enforce
    /// presence.
    pub fn min_length(min: usize) -> Self {
        Self::custom(
            move |value| match value {
                FieldValue::Text(s) => s.chars().count() >= min,
                _ => true,
            },
            format!("Minimum length is {min} characters"),
        )
    }

    /// Requires text to be at most `max` characters long.
    pub fn max_length(max: usize) -> Self {
        Self::custom(
            move |value| match value {
                FieldValue::Text(s) => s.chars().count() <= max,
                _ => true,
            },
            format!("Maximum length is {max} characters"),
        )
    }

    /// Requires text shaped like `local@domain.tld`.
    pub fn email() -> Self {
        Self::custom(
            |value| match value {
                FieldValue::Text(s) => email_regex().is_match(s),
                _ => false,
            },
            "Invalid email address",
        )
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = Rule::required();
        assert!(!rule.check(&FieldValue::Missing));
        assert!(!rule.check(&FieldValue::Text("".into())));
        assert!(!rule.check(&FieldValue::Text("   ".into())));
        assert!(rule.check(&FieldValue::Text("hi".into())));
        assert!(rule.check(&FieldValue::Int(0)));
        assert!(rule.check(&FieldValue::Float(0.0)));
    }

    #[test]
    fn test_length_bounds() {
        assert!(Rule::min_length(3).check(&FieldValue::Text("abc".into())));
        assert!(!Rule::min_length(3).check(&FieldValue::Text("ab".into())));
        assert!(Rule::max_length(3).check(&FieldValue::Text("abc".into())));
        assert!(!Rule::max_length(3).check(&FieldValue::Text("abcd".into())));
        // Counted in chars, not bytes.
        assert!(Rule::max_length(3).check(&FieldValue::Text("äöü".into())));
    }

    #[test]
    fn test_email_shape() {
        let rule = Rule::email();
        assert!(rule.check(&FieldValue::Text("a@b.co".into())));
        assert!(!rule.check(&FieldValue::Text("a@b".into())));
        assert!(!rule.check(&FieldValue::Text("a b@c.co".into())));
        assert!(!rule.check(&FieldValue::Text("".into())));
        assert!(!rule.check(&FieldValue::Missing));
    }

    #[test]
    fn test_message_override() {
        let rule = Rule::min_length(3).with_message("Too short");
        assert_eq!(rule.message(), "Too short");
        let rule = Rule::required();
        assert_eq!(rule.message(), "This field is required");
    }
}
