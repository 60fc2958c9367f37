//! `ansi_text` - terminal text primitives
//!
//! Measures how many columns an ANSI-styled string occupies, strips the
//! control codes out of it, and builds the cursor movement and visibility
//! sequences that progress bars, prompts and spinners write to the terminal.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow ansi::strip::strip etc
#![allow(clippy::missing_errors_doc)] // Errors are documented on the enum
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Generators are obviously pure
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical

pub mod ansi;
pub mod error;
pub mod event;
pub mod terminal;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};

// Re-export the measuring and generating primitives
pub use ansi::cursor::{
    CursorControl, clear_to_end_of_line, cursor_back, cursor_down, cursor_forward, cursor_restore,
    cursor_save, cursor_up, hide_cursor, show_cursor,
};
pub use ansi::strip::{has_control_codes, strip};
pub use ansi::{control, sgr};
pub use terminal::{OsCapabilities, Platform};
pub use unicode::{JoinState, printing_width, printing_width_stripped};
