//! Media module for item representation and field selection.

pub mod fields;
pub mod item;

pub use fields::{DETAIL_FIELDS, FLAT_LIST_FIELDS, ID_ONLY_FIELDS};
pub use item::{MediaItem, MediaType};
