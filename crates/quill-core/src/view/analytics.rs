//! Subscriber analytics shown beside the post list.

use chrono::{DateTime, Utc};

use crate::domain::{SubscriptionStatistics, SubscriptionSummary};

/// One bar of the subscriber chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub subscribers: u64,
    pub new_subscribers: u64,
    pub cancelled_subscribers: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsPanel {
    /// Subscriber total, absent while the summary is unavailable.
    pub total_subscribers: Option<u64>,
    pub chart: Vec<ChartPoint>,
}

impl AnalyticsPanel {
    /// Returns `None` when there are no statistics to chart.
    pub fn build(
        summary: Option<SubscriptionSummary>,
        statistics: Option<&SubscriptionStatistics>,
    ) -> Option<Self> {
        let statistics = statistics?;

        Some(Self {
            total_subscribers: summary.map(|s| s.total_count),
            chart: statistics
                .periods
                .iter()
                .map(|period| ChartPoint {
                    start_date: period.start_date,
                    end_date: period.end_date,
                    subscribers: period.subscribers,
                    new_subscribers: period.new_subscribers,
                    cancelled_subscribers: period.cancelled_subscribers,
                })
                .collect(),
        })
    }
}
