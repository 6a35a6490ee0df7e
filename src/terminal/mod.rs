//! Shared terminal utilities.
//!
//! Box drawing, ANSI helpers and the screen guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
