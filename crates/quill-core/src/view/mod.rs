//! View models - render-ready projections recomputed on every request.

mod analytics;
pub mod markdown;
mod overview;
mod post;
mod relative_time;

pub use analytics::{AnalyticsPanel, ChartPoint};
pub use overview::{EmptyState, PostsOverview};
pub use post::{
    AccessIndicator, AccessLevel, EngagementCounters, METADATA_SEPARATOR, PostViewModel,
    SchedulingState,
};
pub use relative_time::RelativeTime;
