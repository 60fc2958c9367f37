//! Host terminal and platform capabilities.

mod capabilities;

pub use capabilities::{OsCapabilities, Platform, SHIFT_CURSOR_ON_LINE_RESET_VAR};
