use crate::domain::client::ClientDraft;
use crate::domain::types::{parse_email_list, WebUrl};
use crate::forms::{FieldErrorKind, ValidationReport};

/// Validates the aggregate draft ahead of submission.
///
/// Guards run in fixed order: name, phone, address, at least one primary
/// contact, every email well-formed, every optional URL well-formed. Unlike a
/// first-failure-only check, all failing guards are collected so the caller
/// can surface them together; assembly aborts if the report is non-empty.
pub fn validate_for_submit(draft: &ClientDraft) -> ValidationReport {
    let mut report = ValidationReport::new();

    if draft.name.trim().is_empty() {
        report.push("name", FieldErrorKind::Required);
    }
    if draft.phone_number.trim().is_empty() {
        report.push("phoneNumber", FieldErrorKind::Required);
    }
    if draft.address.trim().is_empty() {
        report.push("address", FieldErrorKind::Required);
    }
    if draft.primary_contacts.is_empty() {
        report.push("primaryContacts", FieldErrorKind::NoContacts);
    }
    // Contact emails are constructed validated; the aggregate multi-email
    // string is checked here.
    if !draft.emails.trim().is_empty() && parse_email_list(&draft.emails).is_err() {
        report.push("emails", FieldErrorKind::InvalidEmail);
    }
    check_optional_url(&draft.website, "website", &mut report);
    check_optional_url(&draft.google_maps_link, "googleMapsLink", &mut report);

    report
}

/// Empty is valid: these are optional fields.
fn check_optional_url(raw: &str, field: &str, report: &mut ValidationReport) {
    if !raw.trim().is_empty() && WebUrl::new(raw).is_err() {
        report.push(field, FieldErrorKind::InvalidUrl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::ContactForm;

    fn well_formed_draft() -> ClientDraft {
        let contact = ContactForm {
            first_name: "Sam".into(),
            phone: "501112222".into(),
            country_code: "966".into(),
            ..ContactForm::default()
        }
        .build()
        .expect("valid contact");

        ClientDraft {
            name: "Acme".into(),
            phone_number: "501234567".into(),
            address: "Riyadh".into(),
            primary_contacts: vec![contact],
            ..ClientDraft::default()
        }
    }

    #[test]
    fn well_formed_draft_passes() {
        assert!(validate_for_submit(&well_formed_draft()).is_empty());
    }

    #[test]
    fn guard_order_is_fixed() {
        let draft = ClientDraft {
            website: "nope".into(),
            ..ClientDraft::default()
        };
        let report = validate_for_submit(&draft);
        let fields: Vec<_> = report.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "phoneNumber", "address", "primaryContacts", "website"]
        );
    }

    #[test]
    fn bad_multi_email_string_is_reported() {
        let mut draft = well_formed_draft();
        draft.emails = "ok@acme.example, broken@".into();
        let report = validate_for_submit(&draft);
        assert!(report.contains("emails"));
    }

    #[test]
    fn empty_urls_are_valid() {
        let mut draft = well_formed_draft();
        draft.website = String::new();
        draft.google_maps_link = String::new();
        assert!(validate_for_submit(&draft).is_empty());
    }

    #[test]
    fn malformed_maps_link_is_reported() {
        let mut draft = well_formed_draft();
        draft.google_maps_link = "maps dot google".into();
        let report = validate_for_submit(&draft);
        assert_eq!(
            report.first().map(|e| e.field.as_str()),
            Some("googleMapsLink")
        );
    }
}
