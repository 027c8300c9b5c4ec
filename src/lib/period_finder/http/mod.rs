//! axum layer in front of the period queries.
//!
//! Handlers only read the clock and the shared state, then delegate to
//! [`helpers`](crate::period_finder::helpers) for the answer.
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
