//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::rules::MoveOrdering;

/// Alpha-beta search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum plies below each root move before falling back to the
    /// static leaf value (`None` = search to terminal states).
    pub depth_limit: Option<u32>,

    /// Move priority table.
    pub ordering: MoveOrdering,
}

impl SearchConfig {
    /// Unbounded search with heuristic ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_depth_limit(mut self, depth: Option<u32>) -> Self {
        self.depth_limit = depth;
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}
