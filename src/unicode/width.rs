//! Printing width calculation for terminal rendering.
//!
//! Width here is a count of codepoints, not East Asian cell widths: every
//! printable codepoint is one column, newlines are zero, and a zero-width
//! joiner folds the codepoint after it into the glyph before it.

use crate::ansi::strip::strip;

/// Zero-width joiner.
pub const ZWJ: char = '\u{200D}';

/// State of the joiner walk over a codepoint sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinState {
    /// Each codepoint is counted on its own.
    #[default]
    Normal,
    /// The previous codepoint was a joiner; the next one is absorbed.
    JoinerPending,
}

impl JoinState {
    /// Consume one codepoint, returning the next state and the width it adds.
    #[must_use]
    pub fn step(self, c: char) -> (Self, usize) {
        match (self, c) {
            (Self::JoinerPending, _) => (Self::Normal, 0),
            (Self::Normal, ZWJ) => (Self::JoinerPending, 0),
            (Self::Normal, '\n') => (Self::Normal, 0),
            (Self::Normal, _) => (Self::Normal, 1),
        }
    }
}

/// Walk `s` with [`JoinState`], returning the width and the final state.
///
/// A trailing joiner leaves the walk in [`JoinState::JoinerPending`] without
/// affecting the width already counted.
#[must_use]
pub fn walk(s: &str) -> (usize, JoinState) {
    s.chars()
        .fold((0, JoinState::Normal), |(width, state), c| {
            let (next, w) = state.step(c);
            (width + w, next)
        })
}

/// Printing width of text that is already free of control codes.
#[must_use]
pub fn printing_width_stripped(s: &str) -> usize {
    walk(s).0
}

/// Number of terminal columns `s` occupies once its ANSI control codes and
/// carriage returns are removed.
///
/// ```
/// use ansi_text::printing_width;
///
/// assert_eq!(printing_width("\x1b[1;32mok\x1b[0m"), 2);
/// assert_eq!(printing_width("a\nb"), 2);
/// ```
#[must_use]
pub fn printing_width(s: &str) -> usize {
    printing_width_stripped(&strip(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_codes_only() {
        assert_eq!(printing_width(""), 0);
        assert_eq!(printing_width("\x1b[31m"), 0);
        assert_eq!(printing_width("\x1b[1m\x1b[0m\r"), 0);
    }

    #[test]
    fn test_ascii_width() {
        assert_eq!(printing_width("abc"), 3);
        assert_eq!(printing_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(printing_width("  padded  "), 10);
    }

    #[test]
    fn test_newlines_are_zero() {
        assert_eq!(printing_width("a\nb"), 2);
        assert_eq!(printing_width("\n\n"), 0);
        assert_eq!(printing_width("a\r\nb"), 2);
    }

    #[test]
    fn test_joiner_absorbs_next_codepoint() {
        assert_eq!(printing_width("a\u{200d}b"), 1);
        // Man + ZWJ + laptop: counted as the first codepoint only.
        assert_eq!(printing_width("👨\u{200d}💻"), 1);
        // Two joins in a family sequence.
        assert_eq!(printing_width("👨\u{200d}👩\u{200d}👧"), 1);
    }

    #[test]
    fn test_joiner_absorbs_any_codepoint() {
        assert_eq!(printing_width("\u{200d}\n"), 0);
        assert_eq!(printing_width("\u{200d}\u{200d}x"), 1);
        assert_eq!(printing_width("x\u{200d}\u{200d}y"), 2);
    }

    #[test]
    fn test_trailing_joiner() {
        assert_eq!(printing_width("a\u{200d}"), 1);
        assert_eq!(walk("a\u{200d}"), (1, JoinState::JoinerPending));
        assert_eq!(walk("a\u{200d}b"), (1, JoinState::Normal));
        assert_eq!(walk(""), (0, JoinState::Normal));
    }

    #[test]
    fn test_codes_between_joiner_and_glyph() {
        // Stripping happens first, so the styled glyph is still absorbed.
        assert_eq!(printing_width("a\u{200d}\x1b[31mb\x1b[0m"), 1);
    }

    #[test]
    fn test_unrecognized_codes_count() {
        // ESC [ ? 2 5 h, one column per codepoint.
        assert_eq!(printing_width("\x1b[?25h"), 6);
    }

    #[test]
    fn test_wide_characters_count_once() {
        assert_eq!(printing_width("漢字"), 2);
        assert_eq!(printing_width("é"), 1);
        assert_eq!(printing_width("e\u{301}"), 2);
    }

    #[test]
    fn test_step_transitions() {
        assert_eq!(JoinState::Normal.step('a'), (JoinState::Normal, 1));
        assert_eq!(JoinState::Normal.step('\n'), (JoinState::Normal, 0));
        assert_eq!(JoinState::Normal.step(ZWJ), (JoinState::JoinerPending, 0));
        assert_eq!(JoinState::JoinerPending.step('a'), (JoinState::Normal, 0));
        assert_eq!(JoinState::JoinerPending.step(ZWJ), (JoinState::Normal, 0));
    }
}
