//! # Match Iteration

use core::ops::Range;
use std::borrow::Cow;

use crate::errors::WFResult;
use crate::regex::regex_wrapper::RegexWrapper;

/// Iterator over successive non-overlapping matches of a [`RegexWrapper`].
///
/// Matches are leftmost-first. After an empty match the scan advances by one
/// `char`; an empty match ending where the previous match ended is skipped.
///
/// The regex is either borrowed or owned, so a search can outlive
/// the pattern it was compiled from.
///
/// After an engine error is yielded, the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct RegexMatches<'a> {
    regex: Cow<'a, RegexWrapper>,
    text: &'a str,
    last_end: usize,
    last_match: Option<usize>,
    done: bool,
}

impl<'a> RegexMatches<'a> {
    /// Iterate matches of a borrowed regex.
    pub fn borrowed(
        regex: &'a RegexWrapper,
        text: &'a str,
    ) -> Self {
        Self::new(Cow::Borrowed(regex), text)
    }

    /// Iterate matches of an owned regex.
    pub fn owned(
        regex: RegexWrapper,
        text: &'a str,
    ) -> Self {
        Self::new(Cow::Owned(regex), text)
    }

    /// Iterate matches of a borrowed or owned regex.
    pub fn new(
        regex: Cow<'a, RegexWrapper>,
        text: &'a str,
    ) -> Self {
        Self {
            regex,
            text,
            last_end: 0,
            last_match: None,
            done: false,
        }
    }

    /// The text being scanned.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// The first `char` boundary after `pos`, or `pos + 1` at the end of `text`.
fn next_boundary(
    text: &str,
    pos: usize,
) -> usize {
    match text[pos..].chars().next() {
        Some(c) => pos + c.len_utf8(),
        None => pos + 1,
    }
}

impl Iterator for RegexMatches<'_> {
    type Item = WFResult<Range<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.last_end <= self.text.len() {
            let found = match self.regex.find_at(self.text, self.last_end) {
                Ok(Some(found)) => found,
                Ok(None) => break,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            if found.is_empty() {
                self.last_end = next_boundary(self.text, found.end);
                if self.last_match == Some(found.end) {
                    continue;
                }
            } else {
                self.last_end = found.end;
            }

            self.last_match = Some(found.end);
            return Some(Ok(found));
        }

        self.done = true;
        None
    }
}

impl core::iter::FusedIterator for RegexMatches<'_> {}
