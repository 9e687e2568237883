//! Post list handlers.

use actix_web::{HttpResponse, web};

use quill_core::PostsOverview;
use quill_core::view::{AccessIndicator, PostViewModel, SchedulingState};
use quill_shared::ApiResponse;
use quill_shared::dto::{
    AccessResponse, EmptyStateResponse, PostItemResponse, PostsOverviewResponse,
    SchedulingResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/organizations/{name}/posts
///
/// Every post of the organization, drafts and scheduled posts included.
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    let organization = state.find_organization(&name).await?;
    let now = state.clock.now();

    let posts = state
        .posts
        .list_by_organization(organization.id, true, now)
        .await?;
    let overview = PostsOverview::build(&organization, &posts, now);

    Ok(HttpResponse::Ok().json(ApiResponse::ok(overview_response(&overview))))
}

fn overview_response(overview: &PostsOverview) -> PostsOverviewResponse {
    PostsOverviewResponse {
        organization: overview.organization_name.clone(),
        new_post_href: overview.new_post_href(),
        posts: overview
            .posts
            .iter()
            .map(|post| post_item(post, overview.post_href(post)))
            .collect(),
        empty_state: overview.empty_state().map(|empty| EmptyStateResponse {
            title: empty.title.to_string(),
            message: empty.message.to_string(),
        }),
    }
}

fn post_item(post: &PostViewModel, href: String) -> PostItemResponse {
    PostItemResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        slug: post.slug.clone(),
        href,
        description: post.description.clone(),
        preview_image_url: post.preview_image_url.clone(),
        scheduling: SchedulingResponse {
            state: scheduling_key(&post.scheduling).to_string(),
            label: post.scheduling.label(),
        },
        access: AccessResponse {
            label: post.access.label(),
            indicator: post.access.indicator().map(|i| indicator_key(i).to_string()),
        },
        views: post.engagement.views_label(),
        receivers: post.engagement.receivers_label(),
        metadata: post.metadata_line(),
    }
}

fn scheduling_key(state: &SchedulingState) -> &'static str {
    match state {
        SchedulingState::Published { .. } => "published",
        SchedulingState::PublishingAndSending { .. } => "publishing_and_sending",
        SchedulingState::Publishing { .. } => "publishing",
        SchedulingState::NotScheduled => "not_scheduled",
    }
}

fn indicator_key(indicator: AccessIndicator) -> &'static str {
    match indicator {
        AccessIndicator::Monetary => "monetary",
        AccessIndicator::OpenAccess => "open_access",
    }
}
