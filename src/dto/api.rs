//! Wire shapes of the client-creation endpoint.
//!
//! The backend contract recognizes exactly one success envelope,
//! `{ success, data: { data: { _id, ... } } }`. Anything else is a decode
//! failure surfaced to the caller, never a silent success.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::client::CreatedClient;
use crate::domain::types::{ClientRef, TypeConstraintError};

/// Canonical success envelope of `POST /api/clients`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CreateClientEnvelope {
    pub success: bool,
    pub data: CreateClientData,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CreateClientData {
    pub data: CreatedClientDto,
}

/// The created record inside the envelope.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CreatedClientDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<CreateClientEnvelope> for CreatedClient {
    type Error = TypeConstraintError;

    fn try_from(envelope: CreateClientEnvelope) -> Result<Self, Self::Error> {
        let dto = envelope.data.data;
        Ok(CreatedClient {
            id: ClientRef::new(dto.id)?,
            name: dto.name,
            created_at: dto.created_at,
        })
    }
}

/// Error envelope the backend uses for rejected submissions.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ApiErrorEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_envelope_decodes() {
        let body = r#"{"success":true,"data":{"data":{"_id":"66f","name":"Acme"}}}"#;
        let envelope: CreateClientEnvelope = serde_json::from_str(body).expect("canonical shape");
        let created = CreatedClient::try_from(envelope).expect("valid id");
        assert_eq!(created.id.as_str(), "66f");
        assert_eq!(created.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn alternate_envelope_shapes_fail_to_decode() {
        for body in [
            r#"{"success":true,"client":{"_id":"66f"}}"#,
            r#"{"success":true,"result":{"_id":"66f"}}"#,
            r#"{"success":true,"data":{"_id":"66f"}}"#,
        ] {
            assert!(
                serde_json::from_str::<CreateClientEnvelope>(body).is_err(),
                "shape must be rejected: {body}"
            );
        }
    }

    #[test]
    fn blank_id_is_rejected() {
        let body = r#"{"success":true,"data":{"data":{"_id":"  "}}}"#;
        let envelope: CreateClientEnvelope = serde_json::from_str(body).expect("decodes");
        assert!(CreatedClient::try_from(envelope).is_err());
    }
}
