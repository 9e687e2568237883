//! The maintainer's post list for one organization.

use chrono::{DateTime, Utc};

use super::post::PostViewModel;
use crate::domain::{Organization, Post};

/// Message shown instead of an empty post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

const NO_POSTS: EmptyState = EmptyState {
    title: "No Posts yet",
    message: "Create your first post to start engaging with your subscribers",
};

/// Every post of an organization, drafts included, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsOverview {
    pub organization_name: String,
    pub posts: Vec<PostViewModel>,
}

impl PostsOverview {
    pub fn build(organization: &Organization, posts: &[Post], now: DateTime<Utc>) -> Self {
        Self {
            organization_name: organization.name.clone(),
            posts: posts
                .iter()
                .map(|post| PostViewModel::build(post, now))
                .collect(),
        }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.posts.is_empty().then_some(NO_POSTS)
    }

    pub fn new_post_href(&self) -> String {
        format!("/maintainer/{}/posts/new", self.organization_name)
    }

    pub fn post_href(&self, post: &PostViewModel) -> String {
        format!("/maintainer/{}/posts/{}", self.organization_name, post.slug)
    }
}
