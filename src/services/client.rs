use log::error;

use crate::domain::client::CreatedClient;
use crate::gateway::ClientGateway;
use crate::services::{ServiceError, ServiceResult};
use crate::wizard::WizardState;

/// Runs the submit guards, sends the assembled payload, and settles the
/// wizard state according to the outcome.
///
/// On success the wizard resets to its initial empty state and the caller is
/// expected to navigate to the returned client. On any failure the draft is
/// preserved so the user can correct and retry; there is no automatic retry.
pub async fn submit_client<G>(gateway: &G, wizard: &mut WizardState) -> ServiceResult<CreatedClient>
where
    G: ClientGateway + ?Sized,
{
    let payload = wizard.begin_submit().map_err(ServiceError::from)?;

    match gateway.create_client(payload).await {
        Ok(created) => {
            wizard.submit_succeeded();
            Ok(created)
        }
        Err(err) => {
            error!("client creation failed: {err}");
            wizard.submit_failed();
            Err(err.into())
        }
    }
}
