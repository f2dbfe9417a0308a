//! # Regex Wrapper

use core::ops::Range;

use crate::errors::{WFError, WFResult};
use crate::regex::regex_flags::RegexFlags;
use crate::regex::regex_matches::RegexMatches;

/// A labeled regex pattern.
///
/// Labels select the engine used by [`RegexWrapperPattern::compile_with_flags`].
/// Plain strings convert to [`RegexWrapperPattern::Adaptive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegexWrapperPattern {
    /// A pattern written for [`regex`].
    Basic(String),

    /// A pattern written for [`fancy_regex`].
    Fancy(String),

    /// Unknown target; try [`regex`], then fall up to [`fancy_regex`].
    Adaptive(String),
}

impl From<&str> for RegexWrapperPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<&String> for RegexWrapperPattern {
    fn from(pattern: &String) -> Self {
        Self::Adaptive(pattern.clone())
    }
}

impl From<String> for RegexWrapperPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexWrapperPattern {
    /// The raw pattern text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) | Self::Fancy(pattern) | Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile with default [`RegexFlags`].
    pub fn compile(&self) -> WFResult<RegexWrapper> {
        self.compile_with_flags(RegexFlags::default())
    }

    /// Compile the pattern.
    ///
    /// The [`regex`] engine honours every [`RegexFlags`] field.
    /// The [`fancy_regex`] engine honours only the `imsx` flags;
    /// `swap_greed`, `crlf`, or disabled `unicode` fail with
    /// [`WFError::UnsupportedFlags`].
    ///
    /// ## Arguments
    /// * `flags` - the engine flags.
    ///
    /// ## Returns
    /// The compiled [`RegexWrapper`], or [`WFError::Pattern`] if the pattern does not parse.
    pub fn compile_with_flags(
        &self,
        flags: RegexFlags,
    ) -> WFResult<RegexWrapper> {
        match self {
            Self::Basic(pattern) => compile_basic(pattern, flags),
            Self::Fancy(pattern) => compile_fancy(pattern, flags),
            Self::Adaptive(pattern) => match compile_basic(pattern, flags) {
                Err(WFError::Pattern { message, .. }) => {
                    log::debug!("falling up to fancy-regex for {pattern:?}: {message}");
                    compile_fancy(pattern, flags)
                }
                result => result,
            },
        }
    }
}

fn compile_basic(
    pattern: &str,
    flags: RegexFlags,
) -> WFResult<RegexWrapper> {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .ignore_whitespace(flags.ignore_whitespace)
        .swap_greed(flags.swap_greed)
        .crlf(flags.crlf)
        .unicode(flags.unicode)
        .build()
        .map(RegexWrapper::Basic)
        .map_err(|err| WFError::Pattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

fn compile_fancy(
    pattern: &str,
    flags: RegexFlags,
) -> WFResult<RegexWrapper> {
    if flags.swap_greed || flags.crlf || !flags.unicode {
        return Err(WFError::UnsupportedFlags {
            flags: flags.to_string(),
            engine: "fancy-regex",
        });
    }

    let letters = flags.inline_letters();
    let source = if letters.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{letters}){pattern}")
    };

    fancy_regex::Regex::new(&source)
        .map(RegexWrapper::Fancy)
        .map_err(|err| WFError::Pattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}

/// A compiled regex, from either engine.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// A [`regex::Regex`].
    Basic(regex::Regex),

    /// A [`fancy_regex::Regex`].
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.engine() == other.engine() && self.as_str() == other.as_str()
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// The compiled pattern text.
    ///
    /// For [`RegexWrapper::Fancy`] this includes any inline flag prefix.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The name of the underlying engine.
    pub fn engine(&self) -> &'static str {
        match self {
            Self::Basic(_) => "regex",
            Self::Fancy(_) => "fancy-regex",
        }
    }

    /// Find the leftmost-first match starting the scan at `start`.
    ///
    /// Anchors and word boundaries see the whole of `text`,
    /// not just `text[start..]`.
    ///
    /// ## Returns
    /// The match bounds relative to `text`, `None` if there is no match,
    /// or [`WFError::Engine`] if the engine gave up.
    pub fn find_at(
        &self,
        text: &str,
        start: usize,
    ) -> WFResult<Option<Range<usize>>> {
        match self {
            Self::Basic(regex) => Ok(regex.find_at(text, start).map(|m| m.range())),
            Self::Fancy(regex) => regex
                .find_from_pos(text, start)
                .map(|m| m.map(|m| m.range()))
                .map_err(|err| WFError::Engine {
                    message: err.to_string(),
                }),
        }
    }

    /// Iterate over successive non-overlapping matches in `text`.
    pub fn find_iter<'a>(
        &'a self,
        text: &'a str,
    ) -> RegexMatches<'a> {
        RegexMatches::borrowed(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(
        regex: &RegexWrapper,
        text: &str,
    ) -> Vec<Range<usize>> {
        regex.find_iter(text).map(|m| m.unwrap()).collect()
    }

    #[test]
    fn test_pattern_from() {
        let pattern: RegexWrapperPattern = r"\w+".into();
        assert_eq!(pattern, RegexWrapperPattern::Adaptive(r"\w+".to_string()));
        assert_eq!(pattern.as_str(), r"\w+");

        let owned = r"\d".to_string();
        assert_eq!(
            RegexWrapperPattern::from(&owned),
            RegexWrapperPattern::from(owned.clone())
        );
    }

    #[test]
    fn test_adaptive_selects_engine() {
        let basic = RegexWrapperPattern::from(r"\w+").compile().unwrap();
        assert_eq!(basic.engine(), "regex");

        // Lookahead needs the fancy engine.
        let fancy = RegexWrapperPattern::from(r"\w+(?=,)").compile().unwrap();
        assert_eq!(fancy.engine(), "fancy-regex");
        assert_eq!(ranges(&fancy, "ab, cd"), vec![0..2]);
    }

    #[test]
    fn test_pattern_error() {
        for pattern in [
            RegexWrapperPattern::Basic("(".to_string()),
            RegexWrapperPattern::Fancy("(".to_string()),
            RegexWrapperPattern::Adaptive("(".to_string()),
        ] {
            match pattern.compile() {
                Err(WFError::Pattern { pattern, .. }) => assert_eq!(pattern, "("),
                other => panic!("unexpected: {other:?}"),
            }
        }

        // Basic never falls up.
        assert!(matches!(
            RegexWrapperPattern::Basic(r"a(?=b)".to_string()).compile(),
            Err(WFError::Pattern { .. })
        ));
    }

    #[test]
    fn test_flags() {
        let flags = RegexFlags::default().with_case_insensitive(true);

        let basic = RegexWrapperPattern::Basic("ab".to_string())
            .compile_with_flags(flags)
            .unwrap();
        assert_eq!(ranges(&basic, "xAB ab"), vec![1..3, 4..6]);

        let fancy = RegexWrapperPattern::Fancy("ab".to_string())
            .compile_with_flags(flags)
            .unwrap();
        assert_eq!(fancy.as_str(), "(?i)ab");
        assert_eq!(ranges(&fancy, "xAB ab"), vec![1..3, 4..6]);

        let dotall = RegexFlags::default()
            .with_dot_matches_new_line(true)
            .with_multi_line(true);
        let basic = RegexWrapperPattern::Basic("^a.b".to_string())
            .compile_with_flags(dotall)
            .unwrap();
        assert_eq!(ranges(&basic, "a\nb\na\nb"), vec![0..3, 4..7]);
    }

    #[test]
    fn test_unsupported_flags() {
        let flags = RegexFlags::default().with_swap_greed(true);

        assert!(
            RegexWrapperPattern::Basic("a+".to_string())
                .compile_with_flags(flags)
                .is_ok()
        );
        assert_eq!(
            RegexWrapperPattern::Fancy("a+".to_string()).compile_with_flags(flags),
            Err(WFError::UnsupportedFlags {
                flags: "U".to_string(),
                engine: "fancy-regex",
            })
        );
        assert!(matches!(
            RegexWrapperPattern::from(r"a(?=b)").compile_with_flags(flags),
            Err(WFError::UnsupportedFlags { .. })
        ));
    }

    #[test]
    fn test_find_at_sees_context() {
        let regex = RegexWrapperPattern::from(r"\bcd").compile().unwrap();
        assert_eq!(regex.find_at("abcd cd", 2).unwrap(), Some(5..7));
    }

    #[test]
    fn test_equality() {
        let a = RegexWrapperPattern::from("foo").compile().unwrap();
        let b = RegexWrapperPattern::Basic("foo".to_string()).compile().unwrap();
        let c = RegexWrapperPattern::Fancy("foo".to_string()).compile().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
