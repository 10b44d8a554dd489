//! Song identity and display labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when joining artist and title into a display label.
pub const LABEL_SEPARATOR: &str = " – ";

/// Identity of a song: an (artist, title) pair.
///
/// Two songs denote the same graph node iff both fields compare
/// byte-for-byte equal. No case or whitespace normalization happens here;
/// callers trim input before constructing a `Song`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Performing artist.
    pub artist: String,
    /// Track title.
    pub title: String,
}

impl Song {
    /// Create a song identity from its two fields.
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    /// Display label: artist and title joined with the fixed separator.
    ///
    /// The label is derived from the identity and never settable on its own.
    pub fn label(&self) -> String {
        format!("{}{}{}", self.artist, LABEL_SEPARATOR, self.title)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.artist, LABEL_SEPARATOR, self.title)
    }
}
