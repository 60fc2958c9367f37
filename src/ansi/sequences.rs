//! Constant ANSI escape sequences.
//!
//! These are the fixed outputs of the parameterless generators in
//! [`crate::ansi::cursor`], for callers that want a `&'static str`.

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Save cursor position (SCO).
pub const CURSOR_SAVE: &str = "\x1b[s";

/// Restore cursor position (SCO).
pub const CURSOR_RESTORE: &str = "\x1b[u";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Reset all graphic attributes.
pub const RESET: &str = "\x1b[0m";
