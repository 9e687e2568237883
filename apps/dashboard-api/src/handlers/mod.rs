//! HTTP handlers and route configuration.

mod analytics;
mod docs;
mod health;
mod organizations;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/organizations/{name}")
                    .route("/posts", web::get().to(posts::list_posts))
                    .route("/analytics", web::get().to(analytics::subscriber_analytics)),
            )
            .route(
                "/users/{user_id}/organizations/{name}/admin",
                web::get().to(organizations::admin_status),
            )
            .route("/docs/code-samples", web::post().to(docs::code_samples)),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};

    use quill_core::ports::FixedClock;
    use quill_infra::{DashboardFixtures, DashboardStores};

    use super::configure_routes;
    use crate::config::AppConfig;
    use crate::state::AppState;

    const ORG_ID: &str = "0b7c2d4e-1a2b-4c3d-8e9f-001122334455";
    const EMPTY_ORG_ID: &str = "5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d";
    const USER_ID: &str = "9d1e6b52-3c4f-4a5b-8c7d-66778899aabb";

    async fn test_state() -> AppState {
        let fixtures = json!({
            "organizations": [
                { "id": ORG_ID, "name": "acme", "platform": "github" },
                { "id": EMPTY_ORG_ID, "name": "quiet", "platform": "github" }
            ],
            "posts": [
                {
                    "id": "6f1c7a3e-8f2d-4e59-9a43-4b1f0f3d2a10",
                    "organization_id": ORG_ID,
                    "title": "Launch",
                    "body": "We launched. Details follow.\n\n![cover](https://cdn.example.com/launch.png)",
                    "slug": "launch",
                    "published_at": "2024-06-01T00:00:00Z",
                    "visibility": "public",
                    "paid_subscribers_only": true,
                    "web_view_count": 0,
                    "email_sent_to_count": 0
                },
                {
                    "id": "7a2d8b4f-902e-4f6a-8b54-5c2a1e4e3b21",
                    "organization_id": ORG_ID,
                    "title": "Roadmap",
                    "body": "Coming soon",
                    "slug": "roadmap",
                    "published_at": "2024-07-01T00:00:00Z",
                    "notify_subscribers": true,
                    "visibility": "public",
                    "email_sent_to_count": 12
                },
                {
                    "id": "8b3e9c5a-a13f-4a7b-9c65-6d3b2f5f4c32",
                    "organization_id": ORG_ID,
                    "title": "Notes",
                    "body": "Internal",
                    "slug": "notes",
                    "visibility": "private"
                }
            ],
            "subscriptions": [{
                "organization_id": ORG_ID,
                "total_count": 42,
                "periods": [
                    { "start_date": "2024-03-01T00:00:00Z", "end_date": "2024-04-01T00:00:00Z", "subscribers": 30 },
                    { "start_date": "2024-04-01T00:00:00Z", "end_date": "2024-05-01T00:00:00Z", "subscribers": 35 },
                    { "start_date": "2024-05-01T00:00:00Z", "end_date": "2024-06-01T00:00:00Z", "subscribers": 40 },
                    { "start_date": "2024-06-01T00:00:00Z", "end_date": "2024-07-01T00:00:00Z", "subscribers": 42 }
                ]
            }],
            "memberships": [{ "user_id": USER_ID, "organization_id": ORG_ID }]
        });

        let fixtures = DashboardFixtures::from_json(&fixtures.to_string()).unwrap();
        let stores = DashboardStores::seed(fixtures).await.unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();

        AppState::from_stores(stores, Arc::new(FixedClock(now)), &AppConfig::default())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_posts_overview() {
        let (status, body) = get_json("/api/organizations/acme/posts").await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["new_post_href"], "/maintainer/acme/posts/new");
        assert!(data.get("empty_state").is_none());

        let posts = data["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 3);

        let launch = &posts[0];
        assert_eq!(launch["href"], "/maintainer/acme/posts/launch");
        assert_eq!(launch["description"], "We launched");
        assert_eq!(
            launch["preview_image_url"],
            "https://cdn.example.com/launch.png"
        );
        assert_eq!(launch["scheduling"]["state"], "published");
        assert_eq!(launch["access"]["indicator"], "monetary");
        assert_eq!(
            launch["metadata"],
            "Published 14 days ago · Paid subscribers · 0 views"
        );

        let roadmap = &posts[1];
        assert_eq!(
            roadmap["scheduling"]["label"],
            "Publishing and sending in 16 days"
        );
        assert!(roadmap.get("views").is_none());
        assert_eq!(roadmap["receivers"], "12 receivers");
        assert_eq!(roadmap["preview_image_url"], Value::Null);

        let notes = &posts[2];
        assert_eq!(notes["metadata"], "Not scheduled · Private");
        assert!(notes["access"].get("indicator").is_none());
    }

    #[actix_web::test]
    async fn test_posts_overview_empty_state() {
        let (status, body) = get_json("/api/organizations/quiet/posts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["empty_state"]["title"], "No Posts yet");
        assert_eq!(body["data"]["posts"], json!([]));
    }

    #[actix_web::test]
    async fn test_unknown_organization_is_problem_document() {
        let (status, body) = get_json("/api/organizations/missing/posts").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["title"], "Not Found");
    }

    #[actix_web::test]
    async fn test_analytics_window_and_panel() {
        let (status, body) = get_json("/api/organizations/acme/analytics").await;
        assert_eq!(status, StatusCode::OK);

        let data = &body["data"];
        assert_eq!(data["window"]["start"], "2024-04-01T00:00:00+00:00");
        assert_eq!(data["window"]["end"], "2024-06-01T00:00:00+00:00");
        assert_eq!(data["panel"]["total_subscribers"], 42);

        let subscribers: Vec<_> = data["panel"]["periods"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["subscribers"].as_u64().unwrap())
            .collect();
        assert_eq!(subscribers, [35, 40]);
    }

    #[actix_web::test]
    async fn test_analytics_without_statistics() {
        let (status, body) = get_json("/api/organizations/quiet/analytics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["panel"], Value::Null);
    }

    #[actix_web::test]
    async fn test_admin_status() {
        let (_, body) = get_json(&format!("/api/users/{USER_ID}/organizations/acme/admin")).await;
        assert_eq!(body["data"]["is_admin"], true);

        let (_, body) = get_json(&format!("/api/users/{USER_ID}/organizations/quiet/admin")).await;
        assert_eq!(body["data"]["is_admin"], false);

        let (status, body) =
            get_json(&format!("/api/users/{USER_ID}/organizations/missing/admin")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_admin"], false);
    }

    #[actix_web::test]
    async fn test_code_samples() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/docs/code-samples")
            .set_json(json!({
                "method": "get",
                "path": "/v1/posts",
                "operation": { "operationId": "posts:list_posts", "tags": ["Posts"] }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let tabs = body["data"]["tabs"].as_array().unwrap();
        assert_eq!(body["data"]["default_tab"], "curl");
        assert_eq!(tabs[0]["language"], "bash");
        assert!(
            tabs[0]["code"]
                .as_str()
                .unwrap()
                .starts_with("curl -X GET https://api.example.com/v1/posts")
        );
        assert!(
            tabs[1]["code"]
                .as_str()
                .unwrap()
                .contains("client.posts.listPosts()")
        );
    }

    #[actix_web::test]
    async fn test_malformed_user_id_is_bad_request_problem() {
        let (status, body) = get_json("/api/users/not-a-uuid/organizations/acme/admin").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Bad Request");
        assert!(body["detail"].as_str().is_some());
    }

    #[actix_web::test]
    async fn test_code_samples_missing_field_is_bad_request_problem() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/docs/code-samples")
            .set_json(json!({ "path": "/v1" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["type"], "about:blank");
        assert!(body["detail"].as_str().unwrap().contains("method"));
    }

    #[actix_web::test]
    async fn test_code_samples_rejects_bad_method() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/docs/code-samples")
            .set_json(json!({ "method": "FETCH", "path": "/v1/posts" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
