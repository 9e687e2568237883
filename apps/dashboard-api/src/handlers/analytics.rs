//! Subscriber analytics handler.

use actix_web::{HttpResponse, web};

use quill_core::TrailingWindow;
use quill_core::view::AnalyticsPanel;
use quill_shared::ApiResponse;
use quill_shared::dto::{
    AnalyticsPanelResponse, AnalyticsResponse, ChartPointResponse, WindowResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/organizations/{name}/analytics
pub async fn subscriber_analytics(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    let organization = state.find_organization(&name).await?;
    let window =
        TrailingWindow::ending_at_month_start(state.clock.now(), state.analytics_window_months)?;

    let summary = state.subscriptions.summary(organization.id).await?;
    let statistics = state
        .subscriptions
        .statistics(organization.id, window.start, window.end)
        .await?;

    tracing::debug!(
        organization = %organization.name,
        start = %window.start,
        end = %window.end,
        "Queried subscriber statistics"
    );

    let panel = AnalyticsPanel::build(summary, statistics.as_ref());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(AnalyticsResponse {
        window: WindowResponse {
            start: window.start.to_rfc3339(),
            end: window.end.to_rfc3339(),
        },
        panel: panel.map(panel_response),
    })))
}

fn panel_response(panel: AnalyticsPanel) -> AnalyticsPanelResponse {
    AnalyticsPanelResponse {
        total_subscribers: panel.total_subscribers,
        periods: panel
            .chart
            .into_iter()
            .map(|point| ChartPointResponse {
                start_date: point.start_date.to_rfc3339(),
                end_date: point.end_date.to_rfc3339(),
                subscribers: point.subscribers,
                new_subscribers: point.new_subscribers,
                cancelled_subscribers: point.cancelled_subscribers,
            })
            .collect(),
    }
}
