//! UI Components
//!
//! Leptos components for the home view.

mod category_list_view;
mod grand_category;
mod tiles;

pub use category_list_view::CategoryListView;
pub use grand_category::GrandCategoryTile;
pub use tiles::Tiles;
