//! Domain entities - the data the dashboard renders.

mod operation;
mod organization;
mod post;
mod subscription;

pub use operation::ApiOperation;
pub use organization::Organization;
pub use post::{Post, Visibility};
pub use subscription::{SubscriptionPeriod, SubscriptionStatistics, SubscriptionSummary};
