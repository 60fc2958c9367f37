//! Operating-system capability detection.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use std::env;

/// Environment variable that overrides the cursor nudge after absolute
/// column positioning.
pub const SHIFT_CURSOR_ON_LINE_RESET_VAR: &str = "ANSI_TEXT_SHIFT_CURSOR_ON_LINE_RESET";

/// Operating system family the process runs on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS.
    Mac,
    /// Linux, the BSDs and other Unix-likes.
    #[default]
    Unix,
    /// Windows console hosts.
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Map a `std::env::consts::OS` name to a platform family.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "ios" => Self::Mac,
            "windows" => Self::Windows,
            _ => Self::Unix,
        }
    }
}

/// Capabilities of the host OS that affect generated sequences.
///
/// Resolved once and then passed around by value; nothing here is read
/// from global state after construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OsCapabilities {
    platform: Platform,
    shift_cursor_on_line_reset: bool,
}

impl OsCapabilities {
    /// Default capabilities for a platform.
    ///
    /// Only Windows consoles land one column off after `ESC[nG` and need
    /// the compensating `ESC[1D`.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            shift_cursor_on_line_reset: matches!(platform, Platform::Windows),
        }
    }

    /// Detect capabilities for the current process.
    ///
    /// Starts from the current platform's defaults and applies
    /// [`SHIFT_CURSOR_ON_LINE_RESET_VAR`] when set. An unrecognized override
    /// is reported through the log callback and ignored.
    #[must_use]
    pub fn detect() -> Self {
        let override_value = env::var(SHIFT_CURSOR_ON_LINE_RESET_VAR).ok();
        let caps = Self::resolve(Platform::current(), override_value.as_deref());
        emit_log(
            LogLevel::Debug,
            &format!(
                "detected {:?}, shift_cursor_on_line_reset={}",
                caps.platform, caps.shift_cursor_on_line_reset
            ),
        );
        caps
    }

    /// Resolve capabilities from a platform and an optional override value.
    #[must_use]
    pub fn resolve(platform: Platform, override_value: Option<&str>) -> Self {
        let caps = Self::for_platform(platform);
        match override_value.map(Self::parse_override) {
            None => caps,
            Some(Ok(shift)) => caps.with_shift_cursor_on_line_reset(shift),
            Some(Err(err)) => {
                emit_log(LogLevel::Warn, &format!("{err}; using platform default"));
                caps
            }
        }
    }

    /// Parse an override value. Accepts `1/true/yes/on` and `0/false/no/off`,
    /// ignoring case and surrounding whitespace.
    pub fn parse_override(value: &str) -> Result<bool> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(Error::InvalidOverride {
                var: SHIFT_CURSOR_ON_LINE_RESET_VAR,
                value: value.to_string(),
            }),
        }
    }

    /// Force the cursor nudge on or off.
    #[must_use]
    pub const fn with_shift_cursor_on_line_reset(mut self, shift: bool) -> Self {
        self.shift_cursor_on_line_reset = shift;
        self
    }

    /// Platform these capabilities were resolved for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether absolute horizontal positioning must be followed by a
    /// one-column move back.
    #[must_use]
    pub const fn shift_cursor_on_line_reset(&self) -> bool {
        self.shift_cursor_on_line_reset
    }
}
