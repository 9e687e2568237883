//! Seeding the in-memory stores from a JSON document.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Organization, Post, SubscriptionPeriod, SubscriptionSummary};

use crate::organizations::InMemoryOrganizationRepository;
use crate::posts::InMemoryPostRepository;
use crate::subscriptions::InMemorySubscriptionRepository;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{entity} references unknown organization {organization_id}")]
    UnknownOrganization {
        entity: &'static str,
        organization_id: Uuid,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSubscriptions {
    pub organization_id: Uuid,
    pub total_count: Option<u64>,
    #[serde(default)]
    pub periods: Vec<SubscriptionPeriod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub user_id: Uuid,
    pub organization_id: Uuid,
}

/// Everything the dashboard can show, as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardFixtures {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub subscriptions: Vec<OrganizationSubscriptions>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl DashboardFixtures {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// The in-memory repositories behind the dashboard.
#[derive(Clone)]
pub struct DashboardStores {
    pub organizations: Arc<InMemoryOrganizationRepository>,
    pub posts: Arc<InMemoryPostRepository>,
    pub subscriptions: Arc<InMemorySubscriptionRepository>,
}

impl DashboardStores {
    pub fn empty() -> Self {
        Self {
            organizations: Arc::new(InMemoryOrganizationRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
        }
    }

    /// Load fixtures into fresh stores. Every post, subscription record and
    /// membership must point at a listed organization.
    pub async fn seed(fixtures: DashboardFixtures) -> Result<Self, FixtureError> {
        let stores = Self::empty();

        for organization in fixtures.organizations {
            stores.organizations.insert(organization).await;
        }

        for post in fixtures.posts {
            stores.require_organization("post", post.organization_id).await?;
            stores.posts.insert(post).await;
        }

        for record in fixtures.subscriptions {
            stores
                .require_organization("subscription", record.organization_id)
                .await?;
            if let Some(total_count) = record.total_count {
                stores
                    .subscriptions
                    .set_summary(record.organization_id, SubscriptionSummary { total_count })
                    .await;
            }
            stores
                .subscriptions
                .add_periods(record.organization_id, record.periods)
                .await;
        }

        for membership in fixtures.memberships {
            stores
                .require_organization("membership", membership.organization_id)
                .await?;
            stores
                .organizations
                .add_member(membership.user_id, membership.organization_id)
                .await;
        }

        tracing::info!("Dashboard stores seeded from fixtures");
        Ok(stores)
    }

    async fn require_organization(
        &self,
        entity: &'static str,
        organization_id: Uuid,
    ) -> Result<(), FixtureError> {
        if self.organizations.contains(organization_id).await {
            Ok(())
        } else {
            Err(FixtureError::UnknownOrganization {
                entity,
                organization_id,
            })
        }
    }
}
