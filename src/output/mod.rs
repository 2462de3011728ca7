//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::Console;
pub use progress::create_item_bar;
pub use stats::{failure_note, print_run_summary};
