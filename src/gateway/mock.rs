//! Mock gateway implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::CreatedClient;
use crate::dto::lookup::LocationSuggestion;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{ClientGateway, LookupGateway};
use crate::payload::SubmissionPayload;

mock! {
    pub Gateway {}

    impl ClientGateway for Gateway {
        async fn create_client(&self, payload: SubmissionPayload) -> GatewayResult<CreatedClient>;
    }

    impl LookupGateway for Gateway {
        async fn search_locations(&self, query: &str) -> GatewayResult<Vec<LocationSuggestion>>;
        async fn list_countries(&self) -> GatewayResult<Vec<String>>;
    }
}
