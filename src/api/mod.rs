//! HTTP API module for the Settlement Comparator.
//!
//! This module exposes the comparison, the document export and the share
//! link over REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ComparisonRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
