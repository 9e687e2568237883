//! Display-ready projection of a single post.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::markdown;
use super::relative_time::RelativeTime;
use crate::domain::{Post, Visibility};

/// Separator between adjacent metadata fragments.
pub const METADATA_SEPARATOR: &str = " \u{00b7} ";

/// Where a post stands relative to its publication date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulingState {
    Published { distance: RelativeTime },
    PublishingAndSending { distance: RelativeTime },
    Publishing { distance: RelativeTime },
    NotScheduled,
}

impl SchedulingState {
    pub fn classify(
        published_at: Option<DateTime<Utc>>,
        notify_subscribers: bool,
        now: DateTime<Utc>,
    ) -> Self {
        let Some(at) = published_at else {
            return SchedulingState::NotScheduled;
        };

        let distance = RelativeTime::between(now, at);
        if distance.is_past() {
            SchedulingState::Published { distance }
        } else if notify_subscribers {
            SchedulingState::PublishingAndSending { distance }
        } else {
            SchedulingState::Publishing { distance }
        }
    }

    pub fn label(&self) -> String {
        match self {
            SchedulingState::Published { distance } => format!("Published {}", distance.ago()),
            SchedulingState::PublishingAndSending { distance } => {
                format!("Publishing and sending in {distance}")
            }
            SchedulingState::Publishing { distance } => format!("Publishing in {distance}"),
            SchedulingState::NotScheduled => "Not scheduled".to_string(),
        }
    }
}

impl fmt::Display for SchedulingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Icon shown next to the access label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessIndicator {
    Monetary,
    OpenAccess,
}

/// Who can read a post, as shown to the maintainer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessLevel {
    /// Anything other than public, shown by its visibility name.
    Restricted(Visibility),
    PaidSubscribers,
    Public,
}

impl AccessLevel {
    pub fn classify(visibility: &Visibility, paid_subscribers_only: bool) -> Self {
        match visibility {
            Visibility::Public if paid_subscribers_only => AccessLevel::PaidSubscribers,
            Visibility::Public => AccessLevel::Public,
            other => AccessLevel::Restricted(other.clone()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            AccessLevel::Restricted(visibility) => capitalize_words(visibility.as_str()),
            AccessLevel::PaidSubscribers => "Paid subscribers".to_string(),
            AccessLevel::Public => "Public".to_string(),
        }
    }

    pub fn indicator(&self) -> Option<AccessIndicator> {
        match self {
            AccessLevel::Restricted(_) => None,
            AccessLevel::PaidSubscribers => Some(AccessIndicator::Monetary),
            AccessLevel::Public => Some(AccessIndicator::OpenAccess),
        }
    }
}

/// View and email counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementCounters {
    pub views: Option<u64>,
    pub receivers: Option<u64>,
}

impl EngagementCounters {
    /// Zero views are still shown; zero receivers are not.
    pub fn from_post(post: &Post) -> Self {
        Self {
            views: post.web_view_count,
            receivers: post.email_sent_to_count.filter(|&n| n != 0),
        }
    }

    pub fn views_label(&self) -> Option<String> {
        self.views.map(|n| counted(n, "view"))
    }

    pub fn receivers_label(&self) -> Option<String> {
        self.receivers.map(|n| counted(n, "receiver"))
    }
}

/// A post prepared for the maintainer's post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostViewModel {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Absent when the body has no image; the list shows a placeholder.
    pub preview_image_url: Option<String>,
    pub scheduling: SchedulingState,
    pub access: AccessLevel,
    pub engagement: EngagementCounters,
}

impl PostViewModel {
    pub fn build(post: &Post, now: DateTime<Utc>) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            description: markdown::description(&post.body).to_string(),
            preview_image_url: markdown::preview_image_url(&post.body).map(str::to_string),
            scheduling: SchedulingState::classify(
                post.published_at,
                post.notify_subscribers,
                now,
            ),
            access: AccessLevel::classify(&post.visibility, post.paid_subscribers_only),
            engagement: EngagementCounters::from_post(post),
        }
    }

    /// Scheduling, access, views and receivers, in display order.
    pub fn metadata_fragments(&self) -> Vec<String> {
        let mut fragments = vec![self.scheduling.label(), self.access.label()];
        fragments.extend(self.engagement.views_label());
        fragments.extend(self.engagement.receivers_label());
        fragments
    }

    pub fn metadata_line(&self) -> String {
        self.metadata_fragments().join(METADATA_SEPARATOR)
    }
}

fn counted(n: u64, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}
