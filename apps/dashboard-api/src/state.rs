//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::DomainError;
use quill_core::domain::Organization;
use quill_core::ports::{Clock, OrganizationRepository, PostRepository, SubscriptionRepository};
use quill_infra::{DashboardFixtures, DashboardStores, SystemClock};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub organizations: Arc<dyn OrganizationRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub clock: Arc<dyn Clock>,
    pub api_base_url: String,
    pub analytics_window_months: u32,
}

impl AppState {
    /// Build the application state, seeding stores from fixtures when configured.
    pub async fn new(config: &AppConfig) -> Self {
        let stores = match &config.fixtures_path {
            Some(path) => {
                let seeded = match DashboardFixtures::from_file(path).await {
                    Ok(fixtures) => DashboardStores::seed(fixtures).await,
                    Err(e) => Err(e),
                };
                seeded.unwrap_or_else(|e| {
                    tracing::error!(
                        "Failed to load fixtures from {}: {}. Starting with empty stores.",
                        path.display(),
                        e
                    );
                    DashboardStores::empty()
                })
            }
            None => {
                tracing::warn!("FIXTURES_PATH not set. Starting with empty stores.");
                DashboardStores::empty()
            }
        };

        tracing::info!("Application state initialized");

        Self::from_stores(stores, Arc::new(SystemClock), config)
    }

    pub fn from_stores(stores: DashboardStores, clock: Arc<dyn Clock>, config: &AppConfig) -> Self {
        Self {
            organizations: stores.organizations,
            posts: stores.posts,
            subscriptions: stores.subscriptions,
            clock,
            api_base_url: config.api_base_url.clone(),
            analytics_window_months: config.analytics_window_months,
        }
    }

    /// Resolve an organization by name or fail with `NotFound`.
    pub async fn find_organization(&self, name: &str) -> Result<Organization, DomainError> {
        self.organizations
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::organization_not_found(name))
    }
}
