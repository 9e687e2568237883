use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Organization, Post, SubscriptionStatistics, SubscriptionSummary};
use crate::error::DomainError;

/// Posts of an organization, in the order the listing returns them.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts, including drafts and scheduled posts when
    /// `show_unpublished` is set.
    async fn list_by_organization(
        &self,
        organization_id: Uuid,
        show_unpublished: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<Post>, DomainError>;
}

/// Subscriber figures of an organization.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn summary(
        &self,
        organization_id: Uuid,
    ) -> Result<Option<SubscriptionSummary>, DomainError>;

    /// Periods starting within `[start, end)`.
    async fn statistics(
        &self,
        organization_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<SubscriptionStatistics>, DomainError>;
}

/// Organizations and who belongs to them.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Organization>, DomainError>;

    /// Organizations the user is a member of.
    async fn list_member_organizations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Organization>, DomainError>;
}
