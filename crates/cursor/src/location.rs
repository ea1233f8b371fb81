use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One navigable unit of change, positioned in both compared documents
///
/// The id is an opaque token: unique within one diff/highlight pass and
/// stable for the lifetime of that pass. Ordinal navigation goes through
/// the cursor index, never through the id.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{} (before: {}, after: {})", id, before_offset, after_offset)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChangeLocation {
    /// Opaque identifier shared by every highlight span of this change
    pub id: String,

    /// Offset of the change in the before document's plain text
    pub before_offset: usize,

    /// Offset of the change in the after document's plain text
    pub after_offset: usize,
}

impl ChangeLocation {
    /// Create a new change location
    pub fn new(id: impl Into<String>, before_offset: usize, after_offset: usize) -> Self {
        Self {
            id: id.into(),
            before_offset,
            after_offset,
        }
    }
}
