//! Filesystem module.
//!
//! Provides:
//! - Directory management
//! - Writing the output document

pub mod paths;
pub mod persist;

pub use paths::ensure_parent_dir;
pub use persist::save_document;
