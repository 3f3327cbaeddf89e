//! Guide Frontend App
//!
//! Home page: the tiled category list.

use leptos::prelude::*;

use guide_client::ApiConfig;

use crate::components::CategoryListView;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("guide API endpoint: {}", config.endpoint());
    provide_context(AppContext::new(config));

    view! {
        <main class="home">
            <CategoryListView />
        </main>
    }
}
