//! # Quill Core
//!
//! The domain layer of the Quill maintainer dashboard.
//! This crate turns posts, subscription statistics and API operations into
//! render-ready view models. It performs no I/O; data arrives through the
//! traits in [`ports`].

pub mod code_samples;
pub mod domain;
pub mod error;
pub mod membership;
pub mod ports;
pub mod view;
pub mod window;

pub use error::DomainError;
pub use membership::is_organization_admin;
pub use view::{PostViewModel, PostsOverview};
pub use window::TrailingWindow;
