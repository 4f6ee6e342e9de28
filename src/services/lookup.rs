use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::error;

use crate::dto::lookup::LocationSuggestion;
use crate::gateway::LookupGateway;
use crate::services::{ServiceError, ServiceResult};

/// Delay before an autocomplete keystroke actually fires a lookup.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Last-keystroke-wins debouncer for autocomplete lookups.
///
/// Every call bumps a shared generation counter and sleeps for the configured
/// delay; if a newer call arrived meanwhile, the older one is abandoned. An
/// already in-flight network request is not cancelled, matching the fixed
/// one-request-at-a-time behavior the UI relies on.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Waits out the delay; returns `false` when a newer keystroke superseded
    /// this one.
    pub async fn fire(&self) -> bool {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == generation
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// Debounced location autocomplete.
///
/// Returns `Ok(None)` when the keystroke was superseded before firing, and
/// `Ok(Some(suggestions))` once a query actually reaches the lookup service.
/// A blank query short-circuits to an empty suggestion list.
pub async fn suggest_locations<G>(
    gateway: &G,
    debouncer: &Debouncer,
    query: &str,
) -> ServiceResult<Option<Vec<LocationSuggestion>>>
where
    G: LookupGateway + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Ok(Some(Vec::new()));
    }
    if !debouncer.fire().await {
        return Ok(None);
    }

    gateway
        .search_locations(query)
        .await
        .map(Some)
        .map_err(|err| {
            error!("location lookup failed: {err}");
            ServiceError::from(err)
        })
}

/// Country names for the country-of-business selector, sorted by the gateway.
pub async fn list_countries<G>(gateway: &G) -> ServiceResult<Vec<String>>
where
    G: LookupGateway + ?Sized,
{
    gateway.list_countries().await.map_err(|err| {
        error!("country lookup failed: {err}");
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::mock::MockGateway;

    fn riyadh() -> LocationSuggestion {
        LocationSuggestion {
            display_name: "Riyadh, Saudi Arabia".into(),
            lat: "24.63".into(),
            lon: "46.71".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_keystroke_never_queries() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_search_locations()
            .times(1)
            .returning(|_| Ok(vec![riyadh()]));
        let debouncer = Debouncer::default();

        let older = suggest_locations(&gateway, &debouncer, "Riy");
        let newer = suggest_locations(&gateway, &debouncer, "Riyadh");
        let (older, newer) = tokio::join!(older, newer);

        assert_eq!(older.expect("no error"), None);
        let suggestions = newer.expect("no error").expect("newest fires");
        assert_eq!(suggestions[0].display_name, "Riyadh, Saudi Arabia");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_query_short_circuits() {
        let mut gateway = MockGateway::new();
        gateway.expect_search_locations().times(0);
        let debouncer = Debouncer::default();

        let result = suggest_locations(&gateway, &debouncer, "   ")
            .await
            .expect("no error");
        assert_eq!(result, Some(Vec::new()));
    }

    #[tokio::test]
    async fn countries_come_back_as_plain_names() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_list_countries()
            .times(1)
            .returning(|| Ok(vec!["Egypt".into(), "Saudi Arabia".into()]));

        let countries = list_countries(&gateway).await.expect("no error");
        assert_eq!(countries, vec!["Egypt", "Saudi Arabia"]);
    }
}
