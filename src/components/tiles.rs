//! Tiles Component
//!
//! Wrapping layout container with uniform spacing.

use leptos::prelude::*;

#[component]
pub fn Tiles(
    /// CSS length between tiles, e.g. "1em"
    #[prop(into)]
    space: String,
    children: Children,
) -> impl IntoView {
    let style = format!("display: flex; flex-wrap: wrap; gap: {space}; padding: {space};");

    view! {
        <div class="tiles" style=style>
            {children()}
        </div>
    }
}
