//! HTTP surface for the meeting bridge.
//!
//! One route:
//! - POST /api/v1/meetings - validate, authorize, start a meeting, announce it
//!
//! Every request flows through the dispatch wrapper in `routes`, which owns
//! the case-insensitive path match, the 404, and the per-request audit log.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
