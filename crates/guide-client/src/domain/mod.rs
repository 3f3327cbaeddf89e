//! Domain Layer
//!
//! Record shapes served by the guide API.
//! Pure data: the only dependency is serde for decoding.

mod category;
mod item;

pub use category::{Category, CompletionStatus, GrandCategory};
pub use item::{Cat, Description, Item, Kind, Note, Valoration};
