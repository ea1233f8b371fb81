use crate::location::ChangeLocation;

/// A wrap-around cursor over a fixed, ordered list of change locations
///
/// The list is set at construction and never changes for the cursor's
/// lifetime. Navigation is cyclic: advancing past the last location wraps
/// to the first, retreating past the first wraps to the last. An empty
/// list is a valid, designed state in which every navigation call is a
/// no-op returning `None`.
///
/// All operations are constant time and allocation-free.
#[derive(Debug, Clone)]
pub struct ChangeCursor {
    /// The tracked locations, ordered by position in the after document
    locations: Vec<ChangeLocation>,

    /// Index of the current location; meaningless when `locations` is empty
    index: usize,
}

impl ChangeCursor {
    /// Create a cursor over an ordered list of locations (empty permitted)
    pub fn new(locations: Vec<ChangeLocation>) -> Self {
        Self {
            locations,
            index: 0,
        }
    }

    /// Move forward one location, wrapping from last to first.
    ///
    /// Returns the location at the new index, or `None` if the cursor is
    /// empty (in which case the index does not move).
    pub fn advance(&mut self) -> Option<&ChangeLocation> {
        if self.locations.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.locations.len();
        self.locations.get(self.index)
    }

    /// Move backward one location, wrapping from first to last.
    pub fn retreat(&mut self) -> Option<&ChangeLocation> {
        if self.locations.is_empty() {
            return None;
        }
        self.index = (self.index + self.locations.len() - 1) % self.locations.len();
        self.locations.get(self.index)
    }

    /// Get the current location without moving, or `None` if empty
    pub fn current(&self) -> Option<&ChangeLocation> {
        self.locations.get(self.index)
    }

    /// Get the current index (0 in the empty state)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the number of tracked locations
    pub fn count(&self) -> usize {
        self.locations.len()
    }

    /// Check if the cursor tracks no locations
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Force the index back to the first location (a no-op when empty)
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Get the tracked locations
    pub fn locations(&self) -> &[ChangeLocation] {
        &self.locations
    }
}
