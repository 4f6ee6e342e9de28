use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::contact::PrimaryContact;
use crate::domain::contract::ContractForm;
use crate::domain::types::ClientRef;

/// The aggregate draft edited by the client-creation wizard.
///
/// Scalar fields hold raw user input; they are validated once, at submit.
/// Contacts and contracts are validated eagerly by their sub-forms and land
/// here already well-formed. The draft is never persisted: it lives only for
/// the lifetime of an open wizard.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    // Identity.
    pub name: String,
    /// Comma-joined list as typed by the user; split and validated at submit.
    pub emails: String,
    pub phone_number: String,
    pub website: String,

    // Classification.
    pub industry: String,
    pub client_stage: String,
    pub client_source: String,
    pub client_segment: String,
    pub client_priority: String,

    // Location.
    pub address: String,
    pub google_maps_link: String,
    pub country_of_business: String,

    pub primary_contacts: Vec<PrimaryContact>,
    pub line_of_business: Vec<String>,
    /// Committed contract terms keyed by line of business.
    ///
    /// The backend field map is flat (`contractType`, `fixedPercentage`, ...),
    /// so contract parts carry no per-line discriminator on the wire: the
    /// backend can attribute terms to at most one committed contract per
    /// draft. Committing contracts for several lines reuses the same part
    /// names, the later line overriding the earlier one server-side.
    pub contracts: BTreeMap<String, ContractForm>,
}

impl ClientDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The client record acknowledged by the backend after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClient {
    pub id: ClientRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
