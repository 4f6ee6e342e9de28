//! The client-creation wizard orchestrator.
//!
//! A single state value driven by tagged actions through [`WizardState::apply`],
//! so the whole tab/form machine is testable without any UI. Tab navigation
//! clamps to the four steps and never blocks on validation; the submit guards
//! run once, when a payload is requested.

use thiserror::Error;

use crate::domain::client::ClientDraft;
use crate::domain::contract::ContractForm;
use crate::domain::upload::{UploadError, UploadSlots};
use crate::forms::contact::ContactForm;
use crate::forms::ValidationReport;
use crate::payload::SubmissionPayload;

/// The four wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardTab {
    #[default]
    GeneralInfo,
    ContactInfo,
    ContractInfo,
    Documents,
}

impl WizardTab {
    pub const ALL: [WizardTab; 4] = [
        WizardTab::GeneralInfo,
        WizardTab::ContactInfo,
        WizardTab::ContractInfo,
        WizardTab::Documents,
    ];

    /// The following tab, clamped at the last one.
    pub fn next(self) -> Self {
        match self {
            WizardTab::GeneralInfo => WizardTab::ContactInfo,
            WizardTab::ContactInfo => WizardTab::ContractInfo,
            WizardTab::ContractInfo | WizardTab::Documents => WizardTab::Documents,
        }
    }

    /// The preceding tab, clamped at the first one.
    pub fn previous(self) -> Self {
        match self {
            WizardTab::GeneralInfo | WizardTab::ContactInfo => WizardTab::GeneralInfo,
            WizardTab::ContractInfo => WizardTab::ContactInfo,
            WizardTab::Documents => WizardTab::ContractInfo,
        }
    }
}

/// Scalar draft fields addressable by [`WizardAction::SetField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Emails,
    PhoneNumber,
    Website,
    Industry,
    ClientStage,
    ClientSource,
    ClientSegment,
    ClientPriority,
    Address,
    GoogleMapsLink,
    CountryOfBusiness,
}

/// A state transition of the wizard.
#[derive(Clone, Debug, PartialEq)]
pub enum WizardAction {
    SetField {
        field: ClientField,
        value: String,
    },
    /// Validates the contact dialog draft and appends the finished contact.
    AddContact(ContactForm),
    /// Removes the contact at this position; out-of-range indices are ignored.
    RemoveContact(usize),
    SetBusinessLines(Vec<String>),
    /// Atomically stores committed contract terms under a selected business line.
    CommitContract {
        business: String,
        contract: ContractForm,
    },
    AttachFile {
        slot: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
    RemoveFile(String),
    NextTab,
    PrevTab,
    GoToTab(WizardTab),
    Reset,
}

/// Errors surfaced by wizard transitions and submission.
#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("{0}")]
    Validation(ValidationReport),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("line of business '{0}' is not selected")]
    UnknownBusinessLine(String),

    #[error("a submission is already in flight")]
    SubmitInFlight,
}

/// The wizard's complete state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    pub draft: ClientDraft,
    pub tab: WizardTab,
    pub uploads: UploadSlots,
    /// Failures from the most recent rejected action or submit attempt.
    pub errors: ValidationReport,
    /// True while a submission is in flight; gates the submit control.
    pub loading: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action, mutating the state on success.
    ///
    /// A rejected action leaves the draft untouched apart from the stored
    /// error report; a successful one clears any stale report.
    pub fn apply(&mut self, action: WizardAction) -> Result<(), WizardError> {
        match action {
            WizardAction::SetField { field, value } => {
                self.set_field(field, value);
            }
            WizardAction::AddContact(form) => match form.build() {
                Ok(contact) => self.draft.primary_contacts.push(contact),
                Err(report) => {
                    self.errors = report.clone();
                    return Err(WizardError::Validation(report));
                }
            },
            WizardAction::RemoveContact(index) => {
                if index < self.draft.primary_contacts.len() {
                    self.draft.primary_contacts.remove(index);
                }
            }
            WizardAction::SetBusinessLines(lines) => {
                // Dropping a line also drops its committed contract.
                self.draft
                    .contracts
                    .retain(|business, _| lines.iter().any(|l| l == business));
                self.draft.line_of_business = lines;
            }
            WizardAction::CommitContract { business, contract } => {
                if !self.draft.line_of_business.iter().any(|l| l == &business) {
                    return Err(WizardError::UnknownBusinessLine(business));
                }
                self.draft.contracts.insert(business, contract);
            }
            WizardAction::AttachFile {
                slot,
                file_name,
                content_type,
                bytes,
            } => {
                if let Err(err) = self.uploads.attach(slot, file_name, content_type, bytes) {
                    return Err(WizardError::Upload(err));
                }
            }
            WizardAction::RemoveFile(slot) => {
                self.uploads.remove(&slot);
            }
            WizardAction::NextTab => self.tab = self.tab.next(),
            WizardAction::PrevTab => self.tab = self.tab.previous(),
            WizardAction::GoToTab(tab) => self.tab = tab,
            WizardAction::Reset => *self = Self::default(),
        }
        self.errors = ValidationReport::new();
        Ok(())
    }

    fn set_field(&mut self, field: ClientField, value: String) {
        let slot = match field {
            ClientField::Name => &mut self.draft.name,
            ClientField::Emails => &mut self.draft.emails,
            ClientField::PhoneNumber => &mut self.draft.phone_number,
            ClientField::Website => &mut self.draft.website,
            ClientField::Industry => &mut self.draft.industry,
            ClientField::ClientStage => &mut self.draft.client_stage,
            ClientField::ClientSource => &mut self.draft.client_source,
            ClientField::ClientSegment => &mut self.draft.client_segment,
            ClientField::ClientPriority => &mut self.draft.client_priority,
            ClientField::Address => &mut self.draft.address,
            ClientField::GoogleMapsLink => &mut self.draft.google_maps_link,
            ClientField::CountryOfBusiness => &mut self.draft.country_of_business,
        };
        *slot = value;
    }

    /// Runs the submit guards and assembles the payload, marking the wizard
    /// loading on success. At most one submission may be in flight.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, WizardError> {
        if self.loading {
            return Err(WizardError::SubmitInFlight);
        }
        match SubmissionPayload::assemble(&self.draft, &self.uploads) {
            Ok(payload) => {
                self.errors = ValidationReport::new();
                self.loading = true;
                Ok(payload)
            }
            Err(report) => {
                self.errors = report.clone();
                Err(WizardError::Validation(report))
            }
        }
    }

    /// Acknowledges a successful submission: the wizard resets to its initial
    /// empty state.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Acknowledges a failed submission: the draft is preserved so the user
    /// can correct and retry.
    pub fn submit_failed(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{ConsultingContract, ContractForm};
    use crate::domain::upload::CR_COPY_SLOT;

    fn consulting() -> ContractForm {
        ContractForm::Consulting(ConsultingContract {
            technical_notes: None,
            financial_notes: None,
        })
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = WizardState::new();
        state.apply(WizardAction::PrevTab).expect("prev applies");
        assert_eq!(state.tab, WizardTab::GeneralInfo);

        for _ in 0..6 {
            state.apply(WizardAction::NextTab).expect("next applies");
        }
        assert_eq!(state.tab, WizardTab::Documents);
    }

    #[test]
    fn rejected_contact_leaves_contacts_untouched() {
        let mut state = WizardState::new();
        let mut form = ContactForm::new();
        form.first_name = "Sam".into();
        form.phone = "501112222".into();
        form.country_code = "966".into();
        form.email = "broken@".into();

        let err = state
            .apply(WizardAction::AddContact(form))
            .expect_err("invalid email");
        assert!(matches!(err, WizardError::Validation(_)));
        assert!(state.draft.primary_contacts.is_empty());
        assert!(state.errors.contains("email"));
    }

    #[test]
    fn contacts_are_removable_by_index() {
        let mut state = WizardState::new();
        for name in ["Sam", "Lina"] {
            let mut form = ContactForm::new();
            form.first_name = name.into();
            form.phone = "501112222".into();
            form.country_code = "966".into();
            state
                .apply(WizardAction::AddContact(form))
                .expect("contact added");
        }

        state
            .apply(WizardAction::RemoveContact(0))
            .expect("in-range removal");
        assert_eq!(state.draft.primary_contacts.len(), 1);
        assert_eq!(state.draft.primary_contacts[0].first_name.as_str(), "Lina");

        let before = state.clone();
        state
            .apply(WizardAction::RemoveContact(5))
            .expect("out-of-range removal is a no-op");
        assert_eq!(
            state.draft.primary_contacts,
            before.draft.primary_contacts
        );
    }

    #[test]
    fn commit_requires_selected_business_line() {
        let mut state = WizardState::new();
        let err = state
            .apply(WizardAction::CommitContract {
                business: "HR Consulting".into(),
                contract: consulting(),
            })
            .expect_err("line not selected");
        assert_eq!(
            err,
            WizardError::UnknownBusinessLine("HR Consulting".into())
        );

        state
            .apply(WizardAction::SetBusinessLines(vec!["HR Consulting".into()]))
            .expect("lines set");
        state
            .apply(WizardAction::CommitContract {
                business: "HR Consulting".into(),
                contract: consulting(),
            })
            .expect("commit succeeds");
        assert!(state.draft.contracts.contains_key("HR Consulting"));
    }

    #[test]
    fn deselecting_a_line_drops_its_contract() {
        let mut state = WizardState::new();
        state
            .apply(WizardAction::SetBusinessLines(vec![
                "HR Consulting".into(),
                "Recruitment".into(),
            ]))
            .expect("lines set");
        state
            .apply(WizardAction::CommitContract {
                business: "HR Consulting".into(),
                contract: consulting(),
            })
            .expect("commit succeeds");

        state
            .apply(WizardAction::SetBusinessLines(vec!["Recruitment".into()]))
            .expect("lines narrowed");
        assert!(state.draft.contracts.is_empty());
    }

    #[test]
    fn oversized_upload_is_rejected_and_slots_unchanged() {
        let mut state = WizardState::new();
        let err = state
            .apply(WizardAction::AttachFile {
                slot: CR_COPY_SLOT.into(),
                file_name: "cr.pdf".into(),
                content_type: "application/pdf".into(),
                bytes: vec![0u8; crate::domain::upload::MAX_UPLOAD_BYTES + 1],
            })
            .expect_err("too large");
        assert_eq!(err, WizardError::Upload(UploadError::TooLarge));
        assert!(state.uploads.is_empty());
    }

    #[test]
    fn submit_gate_allows_one_in_flight_request() {
        let mut state = WizardState::new();
        let mut form = ContactForm::new();
        form.first_name = "Sam".into();
        form.phone = "501112222".into();
        form.country_code = "966".into();
        state.apply(WizardAction::AddContact(form)).expect("contact");
        for (field, value) in [
            (ClientField::Name, "Acme"),
            (ClientField::PhoneNumber, "501234567"),
            (ClientField::Address, "Riyadh"),
        ] {
            state
                .apply(WizardAction::SetField {
                    field,
                    value: value.into(),
                })
                .expect("field set");
        }

        let _payload = state.begin_submit().expect("guards pass");
        assert!(state.loading);
        assert_eq!(state.begin_submit(), Err(WizardError::SubmitInFlight));

        state.submit_failed();
        assert!(!state.loading);
        assert_eq!(state.draft.name, "Acme");

        let _payload = state.begin_submit().expect("retry allowed");
        state.submit_succeeded();
        assert_eq!(state, WizardState::default());
    }

    #[test]
    fn failed_guards_store_the_full_report() {
        let mut state = WizardState::new();
        let err = state.begin_submit().expect_err("empty draft");
        let WizardError::Validation(report) = err else {
            panic!("expected validation failure");
        };
        assert!(report.contains("name"));
        assert!(report.contains("phoneNumber"));
        assert!(report.contains("address"));
        assert!(report.contains("primaryContacts"));
        assert_eq!(state.errors, report);
        assert!(!state.loading);
    }
}
