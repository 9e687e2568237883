//! # Quill Shared
//!
//! Wire types shared between the dashboard API and its front end.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
