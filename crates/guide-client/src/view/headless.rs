//! Headless Category List View
//!
//! Drives [`CategoryList`] without a UI framework. The Leptos component in
//! the frontend crate runs the same [`load_once`] step against a signal.

use crate::api::CategorySource;
use crate::domain::GrandCategory;
use crate::tiles::{render_tiles, TileRenderer};
use crate::view::{load_once, CategoryList, Diagnostics, Liveness, LogDiagnostics};

pub struct CategoryListView<S, D = LogDiagnostics> {
    source: S,
    diagnostics: D,
    state: CategoryList,
    liveness: Liveness,
}

impl<S: CategorySource> CategoryListView<S> {
    pub fn new(source: S) -> Self {
        Self::with_diagnostics(source, LogDiagnostics)
    }
}

impl<S: CategorySource, D: Diagnostics> CategoryListView<S, D> {
    pub fn with_diagnostics(source: S, diagnostics: D) -> Self {
        Self {
            source,
            diagnostics,
            state: CategoryList::new(),
            liveness: Liveness::new(),
        }
    }

    /// Issue the view's one fetch and settle the state.
    ///
    /// Only the first call does anything.
    pub async fn mount(&mut self) {
        load_once(&mut self.state, &self.source, &self.liveness, &self.diagnostics).await;
    }

    pub fn teardown(&self) {
        self.liveness.revoke();
    }

    /// Token handed to anything that must stop once the view is gone
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    pub fn state(&self) -> &CategoryList {
        &self.state
    }

    pub fn categories(&self) -> &[GrandCategory] {
        self.state.categories()
    }

    /// One tile per grand category, in order
    pub fn render<R: TileRenderer + ?Sized>(&self, renderer: &mut R) -> Vec<R::Output> {
        render_tiles(self.categories(), renderer)
    }
}
