use serde::Deserialize;

use crate::domain::contact::{Gender, PrimaryContact};
use crate::domain::types::{Email, NonEmptyString, PhoneNumber, WebUrl};
use crate::forms::{FieldErrorKind, ValidationReport};

/// Draft state of the add-contact dialog.
///
/// Holds raw input exactly as typed. `build` validates the draft and produces
/// a [`PrimaryContact`] without touching the parent's contact list; on failure
/// the caller keeps the dialog open and the draft intact.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// Optional, but email-validated by `build` when present.
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub designation: String,
    /// Optional, but URL-validated by `build` when present.
    pub linkedin: String,
    pub is_primary: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and, on success, produces the finished contact.
    ///
    /// First name and phone are required; email and LinkedIn are optional but
    /// must be well-formed when present. All failures are reported together.
    pub fn build(&self) -> Result<PrimaryContact, ValidationReport> {
        let mut report = ValidationReport::new();

        let first_name = match NonEmptyString::new(self.first_name.clone()) {
            Ok(name) => Some(name),
            Err(_) => {
                report.push("firstName", FieldErrorKind::Required);
                None
            }
        };

        let phone = match self.parse_phone() {
            Ok(phone) => Some(phone),
            Err(kind) => {
                report.push("phone", kind);
                None
            }
        };

        let email = if self.email.trim().is_empty() {
            None
        } else {
            match Email::new(self.email.clone()) {
                Ok(email) => Some(email),
                Err(_) => {
                    report.push("email", FieldErrorKind::InvalidEmail);
                    None
                }
            }
        };

        let linkedin = if self.linkedin.trim().is_empty() {
            None
        } else {
            match WebUrl::new(self.linkedin.clone()) {
                Ok(url) => Some(url),
                Err(_) => {
                    report.push("linkedin", FieldErrorKind::InvalidUrl);
                    None
                }
            }
        };

        let (Some(first_name), Some(phone)) = (first_name, phone) else {
            return Err(report);
        };
        if !report.is_empty() {
            return Err(report);
        }

        Ok(PrimaryContact {
            first_name,
            last_name: non_blank(&self.last_name),
            gender: if self.gender.trim().is_empty() {
                None
            } else {
                Some(Gender::from(self.gender.as_str()))
            },
            email,
            phone,
            designation: non_blank(&self.designation),
            linkedin,
            is_primary: self.is_primary,
        })
    }

    fn parse_phone(&self) -> Result<PhoneNumber, FieldErrorKind> {
        if self.phone.trim().is_empty() {
            return Err(FieldErrorKind::Required);
        }
        let result = if self.country_code.trim().is_empty() {
            PhoneNumber::new(self.phone.clone())
        } else {
            PhoneNumber::with_country_code(&self.country_code, &self.phone)
        };
        result.map_err(|_| FieldErrorKind::InvalidPhone)
    }

    /// Clears the dialog back to its empty shape after a successful add.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Sam".into(),
            phone: "501112222".into(),
            country_code: "966".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn builds_contact_with_minimal_fields() {
        let contact = valid_form().build().expect("minimal form is valid");
        assert_eq!(contact.first_name.as_str(), "Sam");
        assert_eq!(contact.phone.as_str(), "+966501112222");
        assert!(contact.email.is_none());
    }

    #[test]
    fn missing_first_name_and_phone_both_reported() {
        let form = ContactForm::default();
        let report = form.build().expect_err("empty form rejected");
        assert!(report.contains("firstName"));
        assert!(report.contains("phone"));
    }

    #[test]
    fn blank_optional_fields_are_accepted() {
        let contact = valid_form().build().expect("blank optionals are valid");
        assert!(contact.email.is_none());
        assert!(contact.linkedin.is_none());
        assert!(contact.last_name.is_none());
    }

    #[test]
    fn invalid_email_rejected_when_present() {
        let mut form = valid_form();
        form.email = "not-an-email".into();
        let report = form.build().expect_err("bad email rejected");
        assert_eq!(report.first().map(|e| e.field.as_str()), Some("email"));
    }

    #[test]
    fn invalid_linkedin_rejected_when_present() {
        let mut form = valid_form();
        form.linkedin = "linkedin dot com".into();
        let report = form.build().expect_err("bad url rejected");
        assert!(report.contains("linkedin"));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut form = valid_form();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
