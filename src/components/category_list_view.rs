//! Category List View Component
//!
//! Fetches the grand categories once on mount and renders one tile each.
//! Failures are logged and leave the list empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use guide_client::{
    load_once, render_tiles, ApiClient, CategoryList, GrandCategory, Liveness, LogDiagnostics, StateSlot,
};

use crate::components::{GrandCategoryTile, Tiles};
use crate::context::AppContext;

/// View state held in a signal; gone once the owner is disposed
struct SignalSlot(WriteSignal<CategoryList>);

impl StateSlot for SignalSlot {
    fn update<R>(&mut self, f: impl FnOnce(&mut CategoryList) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

#[component]
pub fn CategoryListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(CategoryList::new());

    // Revoked when the view is disposed so a late response is dropped
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.revoke()
    });

    // Load on mount
    Effect::new(move |_| {
        let client = ApiClient::new(ctx.api_config().clone());
        let liveness = liveness.clone();
        spawn_local(async move {
            let mut slot = SignalSlot(set_state);
            load_once(&mut slot, &client, &liveness, &LogDiagnostics).await;
        });
    });

    let loading = move || state.with(|s| !s.phase().is_settled());
    let tiles = move || {
        state.with(|s| {
            render_tiles(s.categories(), &mut |grand: &GrandCategory| {
                view! { <GrandCategoryTile val=grand.clone() /> }.into_any()
            })
        })
    };

    view! {
        <div class="category-list" aria-busy=move || loading().to_string()>
            <Tiles space="1em">
                {tiles}
            </Tiles>
        </div>
    }
}
