//! Remote-backend boundary.
//!
//! The wizard core never talks HTTP directly; it hands an assembled
//! [`SubmissionPayload`] to a [`ClientGateway`], and autocomplete goes through
//! a [`LookupGateway`]. The REST implementations live in [`http`]; tests can
//! substitute the mocks from [`mock`].

use crate::domain::client::CreatedClient;
use crate::dto::lookup::LocationSuggestion;
use crate::payload::SubmissionPayload;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use errors::{GatewayError, GatewayResult, VALIDATION_FAILED_MESSAGE};

/// Creates client records on the remote CRM backend.
#[allow(async_fn_in_trait)]
pub trait ClientGateway {
    /// Submits one assembled multipart payload, returning the created record
    /// acknowledged by the backend.
    async fn create_client(&self, payload: SubmissionPayload) -> GatewayResult<CreatedClient>;
}

/// Public autocomplete services used while filling the location fields.
#[allow(async_fn_in_trait)]
pub trait LookupGateway {
    /// Free-text location search.
    async fn search_locations(&self, query: &str) -> GatewayResult<Vec<LocationSuggestion>>;

    /// Common names of all countries.
    async fn list_countries(&self) -> GatewayResult<Vec<String>>;
}
