//! # Regex Flags

use core::fmt;
use core::str::FromStr;

use crate::errors::{WFError, WFResult};

/// Engine-native regex flags.
///
/// Flags are passed through to the engine; see
/// [`RegexWrapperPattern::compile_with_flags`](crate::regex::RegexWrapperPattern::compile_with_flags)
/// for which engines honour which flags.
///
/// Flags also parse from, and display as, inline-flag letters:
///
/// | letter | flag                   |
/// |--------|------------------------|
/// | `i`    | `case_insensitive`     |
/// | `m`    | `multi_line`           |
/// | `s`    | `dot_matches_new_line` |
/// | `x`    | `ignore_whitespace`    |
/// | `U`    | `swap_greed`           |
/// | `R`    | `crlf`                 |
/// | `u`    | `unicode` (default on) |
///
/// As in an inline group, letters after a `-` turn their flag off; `"-u"`
/// disables unicode.
///
/// ```rust
/// use wordfinder::RegexFlags;
///
/// let flags: RegexFlags = "im".parse().unwrap();
/// assert_eq!(
///     flags,
///     RegexFlags::default()
///         .with_case_insensitive(true)
///         .with_multi_line(true)
/// );
/// assert_eq!(flags.to_string(), "im");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegexFlags {
    /// Match letters regardless of case.
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,

    /// `.` matches `\n`.
    pub dot_matches_new_line: bool,

    /// Ignore pattern whitespace and allow `#` comments.
    pub ignore_whitespace: bool,

    /// Swap the meaning of greedy and lazy repetition.
    pub swap_greed: bool,

    /// Treat `\r\n` as a line terminator in multi-line mode.
    pub crlf: bool,

    /// Unicode-aware character classes.
    pub unicode: bool,
}

impl Default for RegexFlags {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            swap_greed: false,
            crlf: false,
            unicode: true,
        }
    }
}

impl RegexFlags {
    /// Set `case_insensitive`.
    pub fn with_case_insensitive(
        self,
        case_insensitive: bool,
    ) -> Self {
        Self {
            case_insensitive,
            ..self
        }
    }

    /// Set `multi_line`.
    pub fn with_multi_line(
        self,
        multi_line: bool,
    ) -> Self {
        Self { multi_line, ..self }
    }

    /// Set `dot_matches_new_line`.
    pub fn with_dot_matches_new_line(
        self,
        dot_matches_new_line: bool,
    ) -> Self {
        Self {
            dot_matches_new_line,
            ..self
        }
    }

    /// Set `ignore_whitespace`.
    pub fn with_ignore_whitespace(
        self,
        ignore_whitespace: bool,
    ) -> Self {
        Self {
            ignore_whitespace,
            ..self
        }
    }

    /// Set `swap_greed`.
    pub fn with_swap_greed(
        self,
        swap_greed: bool,
    ) -> Self {
        Self { swap_greed, ..self }
    }

    /// Set `crlf`.
    pub fn with_crlf(
        self,
        crlf: bool,
    ) -> Self {
        Self { crlf, ..self }
    }

    /// Set `unicode`.
    pub fn with_unicode(
        self,
        unicode: bool,
    ) -> Self {
        Self { unicode, ..self }
    }

    /// The enabled `imsx` flag letters, in inline-group order.
    ///
    /// These are the flags every engine understands as an inline group.
    pub fn inline_letters(&self) -> String {
        [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
        ]
        .into_iter()
        .filter_map(|(on, c)| on.then_some(c))
        .collect()
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inline_letters())?;
        if self.swap_greed {
            f.write_str("U")?;
        }
        if self.crlf {
            f.write_str("R")?;
        }
        if !self.unicode {
            f.write_str("-u")?;
        }
        Ok(())
    }
}

impl FromStr for RegexFlags {
    type Err = WFError;

    fn from_str(s: &str) -> WFResult<Self> {
        let unsupported = || WFError::UnsupportedFlags {
            flags: s.to_string(),
            engine: "inline-flag",
        };

        let (on, off) = s.split_once('-').unwrap_or((s, ""));
        if off.contains('-') {
            return Err(unsupported());
        }

        let mut flags = Self::default();
        for (letters, value) in [(on, true), (off, false)] {
            for c in letters.chars() {
                let flag = match c {
                    'i' => &mut flags.case_insensitive,
                    'm' => &mut flags.multi_line,
                    's' => &mut flags.dot_matches_new_line,
                    'x' => &mut flags.ignore_whitespace,
                    'U' => &mut flags.swap_greed,
                    'R' => &mut flags.crlf,
                    'u' => &mut flags.unicode,
                    _ => return Err(unsupported()),
                };
                *flag = value;
            }
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let flags = RegexFlags::default();
        assert!(flags.unicode);
        assert!(!flags.case_insensitive);
        assert_eq!(flags.to_string(), "");
        assert_eq!(flags.inline_letters(), "");
    }

    #[test]
    fn test_builders() {
        let flags = RegexFlags::default()
            .with_dot_matches_new_line(true)
            .with_case_insensitive(true)
            .with_ignore_whitespace(true)
            .with_swap_greed(true)
            .with_crlf(true)
            .with_unicode(false);

        assert_eq!(flags.inline_letters(), "isx");
        assert_eq!(flags.to_string(), "isxUR-u");
    }

    #[test]
    fn test_parse() {
        let flags: RegexFlags = "smiUR".parse().unwrap();
        assert_eq!(flags.to_string(), "imsUR");
        assert!(flags.unicode);

        assert_eq!(
            "iq".parse::<RegexFlags>(),
            Err(WFError::UnsupportedFlags {
                flags: "iq".to_string(),
                engine: "inline-flag",
            })
        );
        assert!(matches!(
            "i-m-u".parse::<RegexFlags>(),
            Err(WFError::UnsupportedFlags { .. })
        ));
    }

    #[test]
    fn test_negated_letters() {
        let flags: RegexFlags = "-u".parse().unwrap();
        assert!(!flags.unicode);
        assert_eq!(flags, RegexFlags::default().with_unicode(false));

        let flags: RegexFlags = "i-iu".parse().unwrap();
        assert!(!flags.case_insensitive);
        assert!(!flags.unicode);
    }

    #[test]
    fn test_display_parses_back() {
        for flags in [
            RegexFlags::default(),
            RegexFlags::default().with_unicode(false),
            RegexFlags::default()
                .with_case_insensitive(true)
                .with_swap_greed(true)
                .with_crlf(true)
                .with_unicode(false),
            "msx".parse().unwrap(),
        ] {
            assert_eq!(flags.to_string().parse::<RegexFlags>(), Ok(flags));
        }
    }
}
