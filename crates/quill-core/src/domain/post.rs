use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - an article written by an organization for its subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    /// Markdown body.
    pub body: String,
    pub slug: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notify_subscribers: bool,
    pub visibility: Visibility,
    #[serde(default)]
    pub paid_subscribers_only: bool,
    #[serde(default)]
    pub web_view_count: Option<u64>,
    #[serde(default)]
    pub email_sent_to_count: Option<u64>,
}

impl Post {
    /// Create an unscheduled public draft.
    pub fn draft(
        organization_id: Uuid,
        title: impl Into<String>,
        slug: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            title: title.into(),
            body: body.into(),
            slug: slug.into(),
            published_at: None,
            notify_subscribers: false,
            visibility: Visibility::Public,
            paid_subscribers_only: false,
            web_view_count: None,
            email_sent_to_count: None,
        }
    }

    /// Whether the post is live at `now`.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|at| at <= now)
    }
}

/// Who can read a post.
///
/// Values other than the known ones are kept verbatim so they can still be
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    Public,
    Private,
    Unlisted,
    Other(String),
}

impl Visibility {
    pub fn as_str(&self) -> &str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Unlisted => "unlisted",
            Visibility::Other(value) => value,
        }
    }
}

impl From<String> for Visibility {
    fn from(value: String) -> Self {
        match value.as_str() {
            "public" => Visibility::Public,
            "private" => Visibility::Private,
            "unlisted" => Visibility::Unlisted,
            _ => Visibility::Other(value),
        }
    }
}

impl From<Visibility> for String {
    fn from(value: Visibility) -> Self {
        match value {
            Visibility::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
