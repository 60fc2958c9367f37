//! Removal of ANSI control codes from rendered text.
//!
//! Only the single-group shape `ESC [ <digits and ;>+ <ASCII letter>` and a
//! bare carriage return are recognized. Private modes (`ESC[?25h`),
//! parameterless sequences (`ESC[K`), OSC strings and lone escapes are left
//! in place and therefore still count towards the printing width.

const ESC_BYTE: u8 = 0x1b;

/// Length of the control sequence at the start of `bytes`, if it has the
/// recognized shape. `bytes[0]` must be `ESC`.
fn control_len(bytes: &[u8]) -> Option<usize> {
    if bytes.get(1) != Some(&b'[') {
        return None;
    }
    let params = bytes[2..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b';')
        .count();
    if params == 0 {
        return None;
    }
    let end = 2 + params;
    match bytes.get(end) {
        Some(b) if b.is_ascii_alphabetic() => Some(end + 1),
        _ => None,
    }
}

/// Strip ANSI control codes and carriage returns from `s`.
///
/// Runs a single left-to-right pass; matches never overlap and the leftmost
/// one wins. A sequence that only becomes well formed after an inner one or
/// a `\r` is removed (`ESC[1` `ESC[2m` `m`, `ESC[3` `\r` `m`) is not
/// re-scanned, so `strip(&strip(s)) == strip(s)` only holds when every `ESC`
/// in `s` starts a complete sequence. Call it again if split sequences must
/// go too.
#[must_use]
pub fn strip(s: &str) -> String {
    let bytes = s.as_bytes();
    if !bytes.iter().any(|&b| b == ESC_BYTE || b == b'\r') {
        return s.to_owned();
    }

    let mut out = String::with_capacity(s.len());
    // Start of the pending run of text that is copied verbatim.
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                out.push_str(&s[start..i]);
                i += 1;
                start = i;
            }
            ESC_BYTE => match control_len(&bytes[i..]) {
                Some(len) => {
                    out.push_str(&s[start..i]);
                    i += len;
                    start = i;
                }
                None => i += 1,
            },
            // Non-ASCII bytes are skipped one at a time; slicing only ever
            // happens at ASCII positions, which are always char boundaries.
            _ => i += 1,
        }
    }
    out.push_str(&s[start..]);
    out
}

/// Check whether [`strip`] would remove anything from `s`.
#[must_use]
pub fn has_control_codes(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| match b {
        b'\r' => true,
        ESC_BYTE => control_len(&bytes[i..]).is_some(),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip(""), "");
        assert_eq!(strip("hello"), "hello");
        assert_eq!(strip("[31m"), "[31m");
        assert_eq!(strip("日本語 ✓"), "日本語 ✓");
    }

    #[test]
    fn test_strips_sgr() {
        assert_eq!(strip("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip("\x1b[1;4;38;5;208mbold\x1b[0m!"), "bold!");
        assert_eq!(strip("a\x1b[2Kb"), "ab");
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(strip("\x1b[3Aup\x1b[12Gcol"), "upcol");
        assert_eq!(strip("\x1b[1B\x1b[1G"), "");
    }

    #[test]
    fn test_strips_carriage_returns() {
        assert_eq!(strip("a\rb"), "ab");
        assert_eq!(strip("\r\n"), "\n");
        assert_eq!(strip("\r\r\r"), "");
    }

    #[test]
    fn test_unrecognized_shapes_pass_through() {
        // Private mode, no parameters, non-CSI escapes, lone ESC.
        assert_eq!(strip("\x1b[?25h"), "\x1b[?25h");
        assert_eq!(strip("\x1b[K"), "\x1b[K");
        assert_eq!(strip("\x1b[s"), "\x1b[s");
        assert_eq!(strip("\x1b7"), "\x1b7");
        assert_eq!(strip("\x1b]8;;\x1b\\"), "\x1b]8;;\x1b\\");
        assert_eq!(strip("\x1b"), "\x1b");
        assert_eq!(strip("x\x1b["), "x\x1b[");
    }

    #[test]
    fn test_terminator_must_be_ascii_letter() {
        assert_eq!(strip("\x1b[31"), "\x1b[31");
        assert_eq!(strip("\x1b[31~"), "\x1b[31~");
        assert_eq!(strip("\x1b[31_x"), "\x1b[31_x");
        assert_eq!(strip("\x1b[31é"), "\x1b[31é");
    }

    #[test]
    fn test_failed_match_resumes_after_escape() {
        // The first ESC does not start a valid sequence, the second one does.
        assert_eq!(strip("\x1b\x1b[1m"), "\x1b");
        assert_eq!(strip("\x1b[\x1b[1mx"), "\x1b[x");
    }

    #[test]
    fn test_carriage_return_inside_sequence() {
        // The \r breaks the match, then is removed on its own.
        assert_eq!(strip("\x1b[3\rm"), "\x1b[3m");
        // A second pass sees the sequence the first one exposed.
        assert_eq!(strip(&strip("\x1b[3\rm")), "");
    }

    #[test]
    fn test_strip_is_single_pass() {
        assert_eq!(strip("\x1b[1\x1b[2mm"), "\x1b[1m");
        assert_eq!(strip(&strip("\x1b[1\x1b[2mm")), "");
    }

    #[test]
    fn test_multibyte_neighbours() {
        assert_eq!(strip("é\x1b[1mü\rñ"), "éüñ");
        assert_eq!(strip("\x1b[32m👍\x1b[0m"), "👍");
    }

    #[test]
    fn test_has_control_codes() {
        assert!(!has_control_codes(""));
        assert!(!has_control_codes("plain"));
        assert!(!has_control_codes("\x1b[?25l"));
        assert!(has_control_codes("\x1b[0m"));
        assert!(has_control_codes("line\r"));
        assert!(has_control_codes("\x1b[K\x1b[2K"));
    }

    #[test]
    fn test_has_control_codes_agrees_with_strip() {
        for s in ["", "a", "\x1b[1m", "\x1b[", "\x1b[?1h", "\r", "x\x1b[3;4Hy"] {
            assert_eq!(has_control_codes(s), strip(s) != s, "input {s:?}");
        }
    }
}
