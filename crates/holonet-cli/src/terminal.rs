//! Terminal capabilities and the palette derived from them.
//!
//! Capabilities are read through a lookup closure, so callers can describe an
//! environment without touching the process one. [`TerminalCaps::from_env`]
//! is the only place that reads real environment variables.

/// ANSI escape codes used by the text renderers.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse cyan badge for section headings.
    pub const TAG_HEADING: &str = "\x1b[1;7;36m";
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    pub const GRAY: &str = "\x1b[90m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    /// 256-color orange, used for arid climates and the banner.
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const RED: &str = "\x1b[31m";
}

/// Locale variables in the order the C library consults them.
const LOCALE_KEYS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// What the attached terminal can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCaps {
    pub color: bool,
    pub unicode: bool,
}

impl TerminalCaps {
    /// Capabilities of the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Capabilities described by `lookup`, which maps a variable name to its value.
    ///
    /// Color is off when `NO_COLOR` is set to a non-empty value or `TERM` is
    /// `dumb`. Unicode follows the first non-empty locale variable; Windows
    /// consoles without a locale hint are assumed capable unless dumb.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dumb = lookup("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = lookup("NO_COLOR").is_some_and(|value| !value.is_empty());

        let locale = LOCALE_KEYS
            .into_iter()
            .find_map(|key| lookup(key).filter(|value| !value.is_empty()));
        let unicode = match locale {
            Some(value) => {
                let upper = value.to_ascii_uppercase();
                upper.contains("UTF-8") || upper.contains("UTF8")
            }
            None => cfg!(windows) && !dumb,
        };

        Self {
            color: !dumb && !no_color,
            unicode,
        }
    }

    /// Palette matching these capabilities.
    #[must_use]
    pub const fn palette(self) -> ColorPalette {
        if self.color {
            ColorPalette::colored()
        } else {
            ColorPalette::plain()
        }
    }
}

/// Resolved escape codes; every field is empty when color is off.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_heading: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_heading: colors::TAG_HEADING,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_heading: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            orange: "",
            red: "",
        }
    }

    /// Palette for the current process environment.
    #[must_use]
    pub fn detect() -> Self {
        TerminalCaps::from_env().palette()
    }
}

/// Fixed-width bar for a 0-100 level, e.g. `[####......]` for 40.
#[must_use]
pub fn level_bar(level: u8) -> String {
    let filled = usize::from(level.min(100)).div_ceil(10);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn caps(vars: &[(&str, &str)]) -> TerminalCaps {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        TerminalCaps::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn level_bar_rounds_up_and_clamps() {
        assert_eq!(level_bar(0), "[..........]");
        assert_eq!(level_bar(31), "[####......]");
        assert_eq!(level_bar(40), "[####......]");
        assert_eq!(level_bar(100), "[##########]");
        assert_eq!(level_bar(255), "[##########]");
    }

    #[test]
    fn color_is_on_for_an_ordinary_terminal() {
        let caps = caps(&[("TERM", "xterm-256color")]);
        assert!(caps.color);
        assert_eq!(caps.palette().reset, colors::RESET);
    }

    #[test]
    fn no_color_turns_the_palette_plain() {
        let caps = caps(&[("TERM", "xterm-256color"), ("NO_COLOR", "1")]);
        assert!(!caps.color);

        let palette = caps.palette();
        assert!(palette.reset.is_empty());
        assert!(palette.tag_heading.is_empty());
        assert!(palette.orange.is_empty());
    }

    #[test]
    fn empty_no_color_is_ignored() {
        assert!(caps(&[("NO_COLOR", "")]).color);
    }

    #[test]
    fn dumb_terminal_has_no_color() {
        assert!(!caps(&[("TERM", "DUMB")]).color);
    }

    #[test]
    fn utf8_locale_enables_unicode() {
        assert!(caps(&[("LANG", "en_US.UTF-8")]).unicode);
        assert!(caps(&[("LC_CTYPE", "C.utf8")]).unicode);
    }

    #[test]
    fn lc_all_overrides_lang() {
        assert!(!caps(&[("LC_ALL", "C"), ("LANG", "en_US.UTF-8")]).unicode);
        assert!(caps(&[("LC_ALL", ""), ("LANG", "en_US.UTF-8")]).unicode);
    }

    #[test]
    #[cfg(not(windows))]
    fn missing_locale_falls_back_to_ascii() {
        assert!(!caps(&[]).unicode);
    }
}
