//! Terminal styling and color detection.

use std::io::IsTerminal;

/// ANSI escape codes used by the text renderers.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings and system names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary text such as counts and footers.
    pub const GRAY: &str = "\x1b[90m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color is
/// disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub good: &'static str,
    pub bad: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            good: colors::GREEN,
            bad: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            muted: "",
            good: "",
            bad: "",
        }
    }

    /// `colored()` when stdout supports ANSI colors, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in the heading style.
    pub fn heading(&self, text: &str) -> String {
        format!("{}{}{}", self.heading, text, self.reset)
    }

    /// Wrap `text` in the muted style.
    pub fn muted(&self, text: &str) -> String {
        format!("{}{}{}", self.muted, text, self.reset)
    }

    /// Render a yes/no flag, colored by whether `yes` is the good outcome.
    pub fn flag(&self, value: bool, yes_is_good: bool) -> String {
        let color = if value == yes_is_good {
            self.good
        } else {
            self.bad
        };
        let label = if value { "YES" } else { "NO" };
        format!("{color}{label}{}", self.reset)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI color codes should be written to stdout.
///
/// Honors `NO_COLOR` (https://no-color.org/) and `TERM=dumb`, and never
/// colors output that is not going to a terminal.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_adds_no_escapes() {
        let palette = ColorPalette::plain();
        assert_eq!(palette.heading("Systems"), "Systems");
        assert_eq!(palette.flag(true, false), "YES");
        assert_eq!(palette.flag(false, true), "NO");
    }

    #[test]
    fn colored_flag_uses_outcome_color() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.flag(false, false), "\x1b[32mNO\x1b[0m");
        assert_eq!(palette.flag(true, false), "\x1b[31mYES\x1b[0m");
    }
}
