//! Fetch continuation
//!
//! The single call site where fetch failures are caught.

use crate::api::CategorySource;
use crate::view::{CategoryList, Diagnostics, Liveness, Outcome};

/// Fetch once and turn the result into an [`Outcome`].
///
/// A response arriving after `liveness` was revoked yields
/// [`Outcome::Detached`] and reports nothing. Otherwise every failure is
/// reported to `diagnostics` exactly once.
pub async fn run_fetch<S, D>(source: &S, liveness: &Liveness, diagnostics: &D) -> Outcome
where
    S: CategorySource + ?Sized,
    D: Diagnostics + ?Sized,
{
    let result = source.fetch_all_categories().await;

    if !liveness.is_alive() {
        log::debug!("view torn down before the category response arrived, dropping it");
        return Outcome::Detached;
    }

    match result {
        Ok(categories) => {
            log::info!("loaded {} grand categories", categories.len());
            Outcome::Loaded(categories)
        }
        Err(error) => {
            diagnostics.report(&error);
            Outcome::Failed(error)
        }
    }
}

/// Wherever a view keeps its [`CategoryList`]: a plain value, a signal.
pub trait StateSlot {
    /// Run `f` against the held state. `None` if the slot is gone.
    fn update<R>(&mut self, f: impl FnOnce(&mut CategoryList) -> R) -> Option<R>;
}

impl StateSlot for CategoryList {
    fn update<R>(&mut self, f: impl FnOnce(&mut CategoryList) -> R) -> Option<R> {
        Some(f(self))
    }
}

/// Full mount step: enter Loading, fetch, settle the slot.
///
/// Issues no request unless the slot was still Uninitialized. A detached
/// outcome never touches the slot. Returns true if the state was settled.
pub async fn load_once<W, S, D>(slot: &mut W, source: &S, liveness: &Liveness, diagnostics: &D) -> bool
where
    W: StateSlot,
    S: CategorySource + ?Sized,
    D: Diagnostics + ?Sized,
{
    if !slot.update(|state| state.begin_load()).unwrap_or(false) {
        log::debug!("category list already mounted, not fetching again");
        return false;
    }

    match run_fetch(source, liveness, diagnostics).await {
        Outcome::Detached => false,
        outcome => slot.update(|state| state.apply(outcome)).unwrap_or(false),
    }
}
