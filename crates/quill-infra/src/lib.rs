//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Everything here is in-memory; stores are seeded from a JSON fixture file.

pub mod clock;
pub mod fixtures;
pub mod organizations;
pub mod posts;
pub mod subscriptions;

pub use clock::SystemClock;
pub use fixtures::{DashboardFixtures, DashboardStores, FixtureError};
pub use organizations::InMemoryOrganizationRepository;
pub use posts::InMemoryPostRepository;
pub use subscriptions::InMemorySubscriptionRepository;
