//! Final submission assembly.
//!
//! A [`SubmissionPayload`] is the multipart/form-data body expressed
//! independently of any HTTP library: an ordered list of named text and file
//! parts. Scalar draft fields become text parts, array/object fields are
//! JSON-encoded first, and conditional contract fields appear only when their
//! contract type or level is actually selected.

use crate::domain::client::ClientDraft;
use crate::domain::contract::{ContractForm, LevelBasedContract};
use crate::domain::types::parse_email_list;
use crate::domain::upload::UploadSlots;
use crate::forms::client::validate_for_submit;
use crate::forms::ValidationReport;

/// A single named part of the multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
    Text(String),
    File {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// The assembled multipart submission, ready to hand to a gateway.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionPayload {
    parts: Vec<Part>,
}

impl SubmissionPayload {
    /// Runs the submit guards over the draft and, if they pass, assembles the
    /// full multipart body. A non-empty report aborts assembly entirely: no
    /// partial submission is ever produced.
    pub fn assemble(
        draft: &ClientDraft,
        uploads: &UploadSlots,
    ) -> Result<Self, ValidationReport> {
        let report = validate_for_submit(draft);
        if !report.is_empty() {
            return Err(report);
        }

        let mut payload = Self::default();

        payload.push_text("name", draft.name.trim());
        payload.push_text("phoneNumber", draft.phone_number.trim());
        payload.push_text("address", draft.address.trim());
        payload.push_optional("website", &draft.website);
        payload.push_optional("industry", &draft.industry);
        payload.push_optional("clientStage", &draft.client_stage);
        payload.push_optional("clientSource", &draft.client_source);
        payload.push_optional("clientSegment", &draft.client_segment);
        payload.push_optional("clientPriority", &draft.client_priority);
        payload.push_optional("googleMapsLink", &draft.google_maps_link);
        payload.push_optional("countryOfBusiness", &draft.country_of_business);

        // Guards already proved the email string parses; an empty string means
        // the optional field was left blank and is omitted entirely.
        if let Ok(emails) = parse_email_list(&draft.emails)
            && !emails.is_empty()
        {
            payload.push_json("emails", &emails)?;
        }
        if !draft.line_of_business.is_empty() {
            payload.push_json("lineOfBusiness", &draft.line_of_business)?;
        }
        payload.push_json("primaryContacts", &draft.primary_contacts)?;

        for contract in draft.contracts.values() {
            payload.append_contract(contract)?;
        }

        for (slot, file) in uploads.iter() {
            payload.parts.push(Part {
                name: slot.to_string(),
                value: PartValue::File {
                    file_name: file.file_name.clone(),
                    content_type: file.content_type.clone(),
                    bytes: file.bytes.clone(),
                },
            });
        }

        Ok(payload)
    }

    /// Flattens one committed contract into its conditional parts.
    ///
    /// Absent optional fields are omitted, never sent as null or zero. The
    /// part names are the backend's flat field map and carry no business-line
    /// discriminator; see [`ClientDraft::contracts`].
    fn append_contract(&mut self, contract: &ContractForm) -> Result<(), ValidationReport> {
        match contract {
            ContractForm::Standard(c) => {
                self.push_text("contractType", c.contract_type.to_string());
                if let Some(percentage) = c.percentage {
                    self.push_text("fixedPercentage", percentage.to_string());
                }
                if let Some(advance) = &c.advance {
                    self.push_text("advanceMoney", advance.amount.to_string());
                    self.push_text("advanceCurrency", advance.currency.as_str());
                }
                if let Some(notes) = &c.notes {
                    self.push_text("contractNotes", notes.as_str());
                }
            }
            ContractForm::LevelBased(c) => self.append_level_based(c)?,
            ContractForm::Consulting(c) => {
                if let Some(notes) = &c.technical_notes {
                    self.push_text("technicalProposalNotes", notes.as_str());
                }
                if let Some(notes) = &c.financial_notes {
                    self.push_text("financialProposalNotes", notes.as_str());
                }
            }
            ContractForm::Outsourcing(c) => {
                self.push_text("outsourcingPricing", c.pricing.to_string());
                if let Some(category) = &c.service_category {
                    self.push_text("serviceCategory", category);
                }
                if let Some(count) = c.resource_count {
                    self.push_text("resourceCount", count.to_string());
                }
                if let Some(months) = c.duration_months {
                    self.push_text("durationMonths", months.to_string());
                }
                if let Some(sla) = &c.sla_terms {
                    self.push_text("slaTerms", sla.as_str());
                }
                if let Some(cost) = &c.total_cost {
                    self.push_text("totalCost", cost.amount.to_string());
                    self.push_text("totalCostCurrency", cost.currency.as_str());
                }
            }
        }
        Ok(())
    }

    fn append_level_based(&mut self, contract: &LevelBasedContract) -> Result<(), ValidationReport> {
        self.push_text("contractType", contract.contract_type.to_string());
        let labels: Vec<&str> = contract.levels.keys().map(|l| l.label()).collect();
        self.push_json("levelTypes", &labels)?;

        // Only committed (selected) levels contribute parts; the field names
        // come from the static per-level field map.
        for (level, terms) in &contract.levels {
            let map = level.field_map();
            if let Some(percentage) = terms.percentage {
                self.push_text(map.percentage, percentage.to_string());
            }
            if let Some(notes) = &terms.notes {
                self.push_text(map.notes, notes.as_str());
            }
            if let Some(advance) = &terms.advance {
                self.push_text(map.money, advance.amount.to_string());
                self.push_text(map.currency, advance.currency.as_str());
            }
        }
        Ok(())
    }

    fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(Part {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
    }

    /// Appends a scalar part only when the raw input is non-blank.
    fn push_optional(&mut self, name: &str, raw: &str) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            self.push_text(name, trimmed);
        }
    }

    fn push_json<T: serde::Serialize>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<(), ValidationReport> {
        // Serialization of already-validated domain values cannot fail in
        // practice; a failure still must not panic.
        let encoded = serde_json::to_string(value).map_err(|_| {
            let mut report = ValidationReport::new();
            report.push(name, crate::forms::FieldErrorKind::Required);
            report
        })?;
        self.push_text(name, encoded);
        Ok(())
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Consumes the payload, yielding its parts in assembly order.
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Looks up a text part by name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(value) if p.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether a file part with this slot name is present.
    pub fn has_file(&self, name: &str) -> bool {
        self.parts
            .iter()
            .any(|p| p.name == name && matches!(p.value, PartValue::File { .. }))
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }
}
