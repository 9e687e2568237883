use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate subscriber figures for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPeriod {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub subscribers: u64,
    #[serde(default)]
    pub new_subscribers: u64,
    #[serde(default)]
    pub cancelled_subscribers: u64,
    /// Earnings in cents.
    #[serde(default)]
    pub earnings: u64,
}

/// Period statistics in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatistics {
    pub periods: Vec<SubscriptionPeriod>,
}

/// Subscriber totals for an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub total_count: u64,
}
