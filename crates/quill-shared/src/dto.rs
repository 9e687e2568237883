//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::ApiOperation;

/// Scheduling state of a post with its display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingResponse {
    /// `published`, `publishing_and_sending`, `publishing` or `not_scheduled`.
    pub state: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessResponse {
    pub label: String,
    /// `monetary` or `open_access`; absent for restricted posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
}

/// One row of the maintainer's post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostItemResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub href: String,
    pub description: String,
    pub preview_image_url: Option<String>,
    pub scheduling: SchedulingResponse,
    pub access: AccessResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receivers: Option<String>,
    /// All metadata fragments joined with a middle dot.
    pub metadata: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyStateResponse {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsOverviewResponse {
    pub organization: String,
    pub new_post_href: String,
    pub posts: Vec<PostItemResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyStateResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowResponse {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPointResponse {
    pub start_date: String,
    pub end_date: String,
    pub subscribers: u64,
    pub new_subscribers: u64,
    pub cancelled_subscribers: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsPanelResponse {
    pub total_subscribers: Option<u64>,
    pub periods: Vec<ChartPointResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub window: WindowResponse,
    /// Absent when the organization has no statistics.
    pub panel: Option<AnalyticsPanelResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStatusResponse {
    pub organization: String,
    pub is_admin: bool,
}

/// Request to render code samples for one API operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSamplesRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub operation: ApiOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSampleResponse {
    pub key: String,
    pub label: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSamplesResponse {
    pub default_tab: String,
    pub tabs: Vec<CodeSampleResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_samples_request_reads_operation_object() {
        let req: CodeSamplesRequest = serde_json::from_str(
            r#"{
                "method": "post",
                "path": "/v1/posts",
                "operation": {
                    "operationId": "posts:create",
                    "tags": ["Posts"],
                    "request_body_example": { "title": "Hello" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(req.operation.operation_id.as_deref(), Some("posts:create"));
        assert_eq!(req.operation.tags, ["Posts"]);
        assert_eq!(
            req.operation.request_body_example,
            Some(serde_json::json!({ "title": "Hello" }))
        );
    }

    #[test]
    fn test_code_samples_request_operation_defaults() {
        let req: CodeSamplesRequest =
            serde_json::from_str(r#"{ "method": "get", "path": "/v1/posts" }"#).unwrap();
        assert_eq!(req.operation, ApiOperation::default());
    }
}
