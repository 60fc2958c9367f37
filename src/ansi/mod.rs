//! ANSI escape sequence generation and stripping.

pub mod cursor;
pub mod sequences;
pub mod strip;

pub use sequences::*;

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

/// The escape character that starts every control sequence.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Build a control sequence: `ESC [ args cmd`.
///
/// Every generator in this crate is a specialization of this function.
/// Neither argument is validated, so `control("", "?25h")` is how private
/// modes are expressed.
#[must_use]
pub fn control(args: &str, cmd: &str) -> String {
    let mut seq = String::with_capacity(CSI.len() + args.len() + cmd.len());
    seq.push_str(CSI);
    seq.push_str(args);
    seq.push_str(cmd);
    seq
}

/// Write a control sequence to a writer without building a `String`.
pub fn write_control(w: &mut impl Write, args: &str, cmd: &str) -> io::Result<()> {
    w.write_all(CSI.as_bytes())?;
    w.write_all(args.as_bytes())?;
    w.write_all(cmd.as_bytes())
}

/// Build a control sequence whose argument is a number, e.g. `ESC [ 3 A`.
pub(crate) fn control_n(n: u32, cmd: &str) -> String {
    let mut seq = String::with_capacity(CSI.len() + 10 + cmd.len());
    seq.push_str(CSI);
    // Writing into a String cannot fail.
    let _ = write!(seq, "{n}");
    seq.push_str(cmd);
    seq
}

/// Generate a Select Graphic Rendition sequence (`ESC [ params m`).
///
/// The parameters are not interpreted; `sgr(31)` and `sgr("1;31")` are both
/// accepted and rendered through `Display`.
#[must_use]
pub fn sgr(params: impl Display) -> String {
    let mut seq = String::from(CSI);
    let _ = write!(seq, "{params}m");
    seq
}

/// Write an SGR sequence to a writer.
pub fn write_sgr(w: &mut impl Write, params: impl Display) -> io::Result<()> {
    write!(w, "{CSI}{params}m")
}

/// Human-readable wrapper that shows `ESC` in place of the raw escape byte.
///
/// Handy for log messages and assertion output.
#[derive(Clone, Copy, Debug)]
pub struct Readable<'a>(pub &'a str);

impl Display for Readable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.0.chars() {
            match ch {
                ESC => f.write_str("ESC")?,
                '\r' => f.write_str("\\r")?,
                '\n' => f.write_str("\\n")?,
                other => f.write_char(other)?,
            }
        }
        Ok(())
    }
}
