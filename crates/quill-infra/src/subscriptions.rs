//! In-memory subscriber statistics.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{SubscriptionPeriod, SubscriptionStatistics, SubscriptionSummary};
use quill_core::DomainError;
use quill_core::ports::SubscriptionRepository;

#[derive(Default)]
struct OrganizationSubscriptions {
    summary: Option<SubscriptionSummary>,
    periods: Vec<SubscriptionPeriod>,
}

/// Subscriber summaries and period statistics keyed by organization.
pub struct InMemorySubscriptionRepository {
    store: RwLock<HashMap<Uuid, OrganizationSubscriptions>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    pub async fn set_summary(&self, organization_id: Uuid, summary: SubscriptionSummary) {
        let mut store = self.store.write().await;
        store.entry(organization_id).or_default().summary = Some(summary);
    }

    /// Append periods, keeping them sorted by start date.
    pub async fn add_periods(&self, organization_id: Uuid, periods: Vec<SubscriptionPeriod>) {
        let mut store = self.store.write().await;
        let entry = store.entry(organization_id).or_default();
        entry.periods.extend(periods);
        entry.periods.sort_by_key(|p| p.start_date);
    }
}

impl Default for InMemorySubscriptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn summary(
        &self,
        organization_id: Uuid,
    ) -> Result<Option<SubscriptionSummary>, DomainError> {
        let store = self.store.read().await;
        Ok(store.get(&organization_id).and_then(|s| s.summary))
    }

    async fn statistics(
        &self,
        organization_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<SubscriptionStatistics>, DomainError> {
        let store = self.store.read().await;
        let Some(entry) = store.get(&organization_id) else {
            tracing::debug!(%organization_id, "No subscription statistics recorded");
            return Ok(None);
        };

        let periods = entry
            .periods
            .iter()
            .filter(|p| start <= p.start_date && p.start_date < end)
            .cloned()
            .collect();

        Ok(Some(SubscriptionStatistics { periods }))
    }
}
