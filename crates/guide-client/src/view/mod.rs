//! Category list view
//!
//! Framework-independent core of the home view: the load state machine, the
//! one-shot fetch continuation and the headless driver the tests mount.

mod diagnostics;
mod fetch;
mod headless;
mod liveness;
mod state;

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use fetch::{load_once, run_fetch, StateSlot};
pub use headless::CategoryListView;
pub use liveness::Liveness;
pub use state::{CategoryList, Outcome, Phase};
