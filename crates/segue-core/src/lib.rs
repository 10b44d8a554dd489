//! Core domain model for the Segue transition graph.
//!
//! A [`TransitionGraph`] is the canonical in-memory directed graph of song
//! transitions, replayed from the append-only log at startup and extended
//! one edge at a time. [`weak_components`] and [`longest_path`] are pure
//! read-only queries over its current state, recomputed on demand.

mod components;
mod graph;
mod longest;
mod record;
mod song;

pub use components::weak_components;
pub use graph::TransitionGraph;
pub use longest::{longest_path, longest_path_bounded, SearchBudget, SearchOutcome};
pub use record::TransitionRecord;
pub use song::{Song, LABEL_SEPARATOR};
