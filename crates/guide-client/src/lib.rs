//! Guide Client
//!
//! Layered like the frontend it serves:
//! - domain: records served by the guide API
//! - transport / api: HTTP seam and the all-categories client
//! - view: load state machine for the category list
//! - tiles: rendering contract for the tiled home view

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod tiles;
pub mod transport;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, CategorySource};
pub use config::ApiConfig;
pub use domain::{Cat, Category, CompletionStatus, Description, GrandCategory, Item, Kind, Note, Valoration};
pub use error::{FetchError, FetchResult};
pub use tiles::{render_tiles, TileRenderer};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
pub use view::{load_once, run_fetch, StateSlot, CategoryList, CategoryListView, Diagnostics, Liveness, LogDiagnostics, Outcome, Phase};
