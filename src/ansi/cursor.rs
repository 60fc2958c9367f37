//! Cursor movement and visibility sequences.
//!
//! The relative movements and the fixed sequences are free functions. The
//! operations that depend on the platform (absolute column positioning and
//! the line moves built on it) live on [`CursorControl`], which is handed
//! its [`OsCapabilities`] once instead of looking them up on every call.

use super::{control, control_n, write_control};
use crate::terminal::OsCapabilities;
use std::io::{self, Write};

fn movement(n: u32, cmd: &str) -> String {
    if n == 0 {
        return String::new();
    }
    control_n(n, cmd)
}

/// Move the cursor up `n` lines (`ESC[nA`). Empty for `n == 0`.
#[must_use]
pub fn cursor_up(n: u32) -> String {
    movement(n, "A")
}

/// Move the cursor down `n` lines (`ESC[nB`). Empty for `n == 0`.
#[must_use]
pub fn cursor_down(n: u32) -> String {
    movement(n, "B")
}

/// Move the cursor forward `n` columns (`ESC[nC`). Empty for `n == 0`.
#[must_use]
pub fn cursor_forward(n: u32) -> String {
    movement(n, "C")
}

/// Move the cursor back `n` columns (`ESC[nD`). Empty for `n == 0`.
#[must_use]
pub fn cursor_back(n: u32) -> String {
    movement(n, "D")
}

/// Show the cursor.
#[must_use]
pub fn show_cursor() -> String {
    control("", "?25h")
}

/// Hide the cursor.
#[must_use]
pub fn hide_cursor() -> String {
    control("", "?25l")
}

/// Save the cursor position.
#[must_use]
pub fn cursor_save() -> String {
    control("", "s")
}

/// Restore the saved cursor position.
#[must_use]
pub fn cursor_restore() -> String {
    control("", "u")
}

/// Clear from the cursor to the end of the line.
#[must_use]
pub fn clear_to_end_of_line() -> String {
    control("", "K")
}

/// Sequence generator bound to the capabilities of one platform.
///
/// Cheap to copy and safe to share between threads; build it once at
/// startup and pass it to whatever renders frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorControl {
    caps: OsCapabilities,
}

impl CursorControl {
    /// Create a generator for the given capabilities.
    #[must_use]
    pub const fn new(caps: OsCapabilities) -> Self {
        Self { caps }
    }

    /// Create a generator for the current platform, see
    /// [`OsCapabilities::detect`].
    #[must_use]
    pub fn detect() -> Self {
        Self::new(OsCapabilities::detect())
    }

    /// The capabilities this generator was built with.
    #[must_use]
    pub const fn capabilities(&self) -> OsCapabilities {
        self.caps
    }

    /// Move the cursor to column `n` (1-based) of the current line.
    ///
    /// On platforms that report [`OsCapabilities::shift_cursor_on_line_reset`]
    /// the absolute move is followed by `ESC[1D` to land on the intended
    /// column.
    #[must_use]
    pub fn cursor_horizontal_absolute(&self, n: u32) -> String {
        let mut seq = control_n(n, "G");
        if self.caps.shift_cursor_on_line_reset() {
            seq.push_str(&control("1", "D"));
        }
        seq
    }

    /// Write [`Self::cursor_horizontal_absolute`] to a writer.
    pub fn write_cursor_horizontal_absolute(&self, w: &mut impl Write, n: u32) -> io::Result<()> {
        write!(w, "{}{n}G", super::CSI)?;
        if self.caps.shift_cursor_on_line_reset() {
            write_control(w, "1", "D")?;
        }
        Ok(())
    }

    /// Move to column 1 of the next line.
    #[must_use]
    pub fn next_line(&self) -> String {
        cursor_down(1) + &self.cursor_horizontal_absolute(1)
    }

    /// Move to column 1 of the previous line.
    #[must_use]
    pub fn previous_line(&self) -> String {
        cursor_up(1) + &self.cursor_horizontal_absolute(1)
    }

    /// Write [`Self::next_line`] to a writer.
    pub fn write_next_line(&self, w: &mut impl Write) -> io::Result<()> {
        write_control(w, "1", "B")?;
        self.write_cursor_horizontal_absolute(w, 1)
    }

    /// Write [`Self::previous_line`] to a writer.
    pub fn write_previous_line(&self, w: &mut impl Write) -> io::Result<()> {
        write_control(w, "1", "A")?;
        self.write_cursor_horizontal_absolute(w, 1)
    }
}
