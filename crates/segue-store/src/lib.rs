//! Durable append-only storage for song transitions.
//!
//! The [`TransitionLog`] is the source of truth for the whole system: the
//! in-memory graph is replayed from it at startup and every new transition
//! is committed here before the graph sees it.

mod error;
mod log;

pub use error::{StoreError, StoreResult};
pub use log::TransitionLog;
