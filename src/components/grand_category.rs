//! Grand Category Tile
//!
//! One tile: the grand category title, then its finished, wip and stub
//! categories as link lists. Empty sections are skipped; a grand category
//! with no categories at all says so.

use leptos::prelude::*;

use guide_client::GrandCategory;

#[component]
pub fn GrandCategoryTile(val: GrandCategory) -> impl IntoView {
    let sections = val
        .sections()
        .into_iter()
        .filter(|(_, categories)| !categories.is_empty())
        .map(|(status, categories)| {
            let links = categories
                .iter()
                .map(|category| {
                    view! {
                        <li data-uid=category.uid.clone()>
                            <a href=category.link.clone()>{category.title.clone()}</a>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <section class=format!("grand-category-section {}", status.as_str())>
                    <h3>{status.label()}</h3>
                    <ul>{links}</ul>
                </section>
            }
        })
        .collect_view();

    let empty = val.is_empty().then(|| {
        view! { <p class="grand-category-empty">"No categories yet"</p> }
    });

    view! {
        <div class="grand-category-tile" data-count=val.len().to_string()>
            <h2>{val.title.clone()}</h2>
            {sections}
            {empty}
        </div>
    }
}
