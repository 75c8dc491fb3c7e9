//! HTTP presentation adapter
//!
//! Serves the dashboard as a JSON API: each client opens a session that owns
//! an independent `SelectionState`, and every response carries a freshly
//! resolved `DashboardView` built from the shared, read-only context.

pub mod error_response;
pub mod middleware;
pub mod service;
pub mod sessions;
pub mod types;


pub use error_response::{ApiError, ErrorResponse};
pub use service::DashboardService;
pub use sessions::SessionRegistry;
