//! Category Entities
//!
//! Grand categories group category references by completion status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to one category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub uid: String,
    pub link: String,
    pub title: String,
}

/// Top-level grouping, split by how complete each category is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandCategory {
    pub title: String,
    pub finished: Vec<Category>,
    pub wip: Vec<Category>,
    pub stubs: Vec<Category>,
}

/// Which section of a grand category a category sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionStatus {
    Finished,
    Wip,
    Stubs,
}

impl CompletionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CompletionStatus::Finished => "Finished",
            CompletionStatus::Wip => "In progress",
            CompletionStatus::Stubs => "Stubs",
        }
    }

    /// CSS modifier used by the tile sections
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::Finished => "finished",
            CompletionStatus::Wip => "wip",
            CompletionStatus::Stubs => "stubs",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl GrandCategory {
    /// Sections in display order: finished, wip, stubs
    pub fn sections(&self) -> [(CompletionStatus, &[Category]); 3] {
        [
            (CompletionStatus::Finished, self.finished.as_slice()),
            (CompletionStatus::Wip, self.wip.as_slice()),
            (CompletionStatus::Stubs, self.stubs.as_slice()),
        ]
    }

    /// Number of categories across all sections
    pub fn len(&self) -> usize {
        self.finished.len() + self.wip.len() + self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
