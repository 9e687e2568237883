//! In-memory organization directory.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Organization;
use quill_core::DomainError;
use quill_core::ports::OrganizationRepository;

#[derive(Default)]
struct Directory {
    organizations: Vec<Organization>,
    members: HashMap<Uuid, HashSet<Uuid>>,
}

/// Organizations and their members.
pub struct InMemoryOrganizationRepository {
    directory: RwLock<Directory>,
}

impl InMemoryOrganizationRepository {
    pub fn new() -> Self {
        Self {
            directory: RwLock::new(Directory::default()),
        }
    }

    pub async fn insert(&self, organization: Organization) {
        let mut directory = self.directory.write().await;
        directory.organizations.push(organization);
    }

    pub async fn add_member(&self, user_id: Uuid, organization_id: Uuid) {
        let mut directory = self.directory.write().await;
        directory
            .members
            .entry(user_id)
            .or_default()
            .insert(organization_id);
    }

    pub async fn contains(&self, organization_id: Uuid) -> bool {
        let directory = self.directory.read().await;
        directory.organizations.iter().any(|o| o.id == organization_id)
    }
}

impl Default for InMemoryOrganizationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Organization>, DomainError> {
        let directory = self.directory.read().await;
        let found = directory
            .organizations
            .iter()
            .find(|o| o.name == name)
            .cloned();

        tracing::debug!(organization = %name, found = found.is_some(), "Looked up organization");
        Ok(found)
    }

    async fn list_member_organizations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Organization>, DomainError> {
        let directory = self.directory.read().await;
        let Some(memberships) = directory.members.get(&user_id) else {
            return Ok(Vec::new());
        };

        Ok(directory
            .organizations
            .iter()
            .filter(|o| memberships.contains(&o.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = InMemoryOrganizationRepository::new();
        let acme = Organization::new("acme", "github");
        repo.insert(acme.clone()).await;

        assert_eq!(repo.find_by_name("acme").await.unwrap(), Some(acme));
        assert_eq!(repo.find_by_name("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_member_organizations() {
        let repo = InMemoryOrganizationRepository::new();
        let acme = Organization::new("acme", "github");
        let other = Organization::new("other", "github");
        repo.insert(acme.clone()).await;
        repo.insert(other).await;

        let user = Uuid::new_v4();
        repo.add_member(user, acme.id).await;

        assert_eq!(repo.list_member_organizations(user).await.unwrap(), vec![acme]);
        assert!(
            repo.list_member_organizations(Uuid::new_v4())
                .await
                .unwrap()
                .is_empty()
        );
    }
}
