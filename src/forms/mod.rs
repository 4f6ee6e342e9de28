//! Draft form state and validation for the client-creation wizard.

use std::fmt::{Display, Formatter};

pub mod client;
pub mod contact;
pub mod contract;

/// What is wrong with a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
    InvalidPhone,
    InvalidUrl,
    InvalidNumber,
    InvalidPercentage,
    InvalidCurrency,
    NoContacts,
}

impl Display for FieldErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldErrorKind::Required => write!(f, "is required"),
            FieldErrorKind::InvalidEmail => write!(f, "is not a valid email"),
            FieldErrorKind::InvalidPhone => write!(f, "is not a valid phone number"),
            FieldErrorKind::InvalidUrl => write!(f, "is not a valid url"),
            FieldErrorKind::InvalidNumber => write!(f, "is not a valid number"),
            FieldErrorKind::InvalidPercentage => write!(f, "must be between 0 and 100"),
            FieldErrorKind::InvalidCurrency => write!(f, "is not a valid currency code"),
            FieldErrorKind::NoContacts => write!(f, "needs at least one primary contact"),
        }
    }
}

/// One failed field, named by its wire (camelCase) field key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

/// Every validation failure currently present, in guard order.
///
/// The report collects all failures instead of stopping at the first, so a
/// caller can surface each broken field at once. Guard order is fixed, so the
/// first entry is always the first guard that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, kind: FieldErrorKind) {
        self.errors.push(FieldError {
            field: field.into(),
            kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The first failing guard, if any.
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Converts an empty report to `Ok(value)` and a non-empty one to `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationReport> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{} {}", error.field, error.kind)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_keeps_guard_order() {
        let mut report = ValidationReport::new();
        report.push("name", FieldErrorKind::Required);
        report.push("website", FieldErrorKind::InvalidUrl);

        assert_eq!(report.len(), 2);
        assert_eq!(report.first().map(|e| e.field.as_str()), Some("name"));
        assert!(report.contains("website"));
    }

    #[test]
    fn empty_report_converts_to_ok() {
        let report = ValidationReport::new();
        assert_eq!(report.into_result(42), Ok(42));
    }

    #[test]
    fn report_renders_every_failure() {
        let mut report = ValidationReport::new();
        report.push("name", FieldErrorKind::Required);
        report.push("emails", FieldErrorKind::InvalidEmail);

        assert_eq!(
            report.to_string(),
            "name is required; emails is not a valid email"
        );
    }
}
