use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization entity - the owner of posts and subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    /// Hosting platform the organization was imported from, e.g. `github`.
    pub platform: String,
}

impl Organization {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            platform: platform.into(),
        }
    }
}
