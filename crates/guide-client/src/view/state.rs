//! Load state machine
//!
//! Uninitialized -> Loading -> Loaded | Failed, no re-entry.

use crate::domain::GrandCategory;
use crate::error::FetchError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loading,
    Loaded,
    Failed(FetchError),
}

impl Phase {
    pub fn is_settled(&self) -> bool {
        matches!(self, Phase::Loaded | Phase::Failed(_))
    }
}

/// Result of one fetch continuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Vec<GrandCategory>),
    Failed(FetchError),
    /// The view went away before the response arrived
    Detached,
}

/// The view's only piece of state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryList {
    phase: Phase,
    categories: Vec<GrandCategory>,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn categories(&self) -> &[GrandCategory] {
        &self.categories
    }

    /// Enter Loading. Returns false if a load was already started, in which
    /// case no request should be issued.
    pub fn begin_load(&mut self) -> bool {
        if self.phase != Phase::Uninitialized {
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    /// Settle a pending load. Returns true if the state changed.
    ///
    /// Failures keep whatever categories were held before.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        match outcome {
            Outcome::Loaded(categories) => {
                self.categories = categories;
                self.phase = Phase::Loaded;
                true
            }
            Outcome::Failed(error) => {
                self.phase = Phase::Failed(error);
                true
            }
            Outcome::Detached => false,
        }
    }
}
