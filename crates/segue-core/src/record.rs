//! Log record types shared between the store and the graph.

use serde::{Deserialize, Serialize};

use crate::song::Song;

/// An immutable transition entry as stored in the append-only log.
///
/// Ids are positive, strictly increasing, and assigned by the log at append
/// time. Records are never mutated or deleted; the in-memory graph collapses
/// duplicate (from, to) pairs, the log does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Log-assigned identifier.
    pub id: i64,
    /// Source song of the transition.
    pub from: Song,
    /// Destination song of the transition.
    pub to: Song,
    /// Optional free-text note about the transition.
    pub note: Option<String>,
}
