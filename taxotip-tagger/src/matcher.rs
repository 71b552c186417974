use crate::{Result, TaggerError};
use regex::Regex;
use std::fmt::Debug;
use std::ops::Range;
use std::sync::Arc;

/// Word-boundary marker wrapped around every term pattern
pub const WORD_BOUNDARY: &str = r"\b";

/// A compiled search pattern for one term name.
///
/// Two matchers are the same pattern slot when their [`source`](Self::source)
/// strings are equal.
pub trait TermMatcher: Debug + Send + Sync {
    /// The pattern text the matcher was compiled from
    fn source(&self) -> &str;

    /// Returns true if the pattern occurs anywhere in `haystack`
    fn is_match(&self, haystack: &str) -> bool;

    /// Finds the first match starting at or after byte `start`.
    ///
    /// Boundary assertions still look at the text before `start`.
    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>>;

    /// The pattern text with one leading and one trailing word-boundary marker removed
    fn without_boundaries(&self) -> &str {
        let source = self.source();
        let source = source.strip_prefix(WORD_BOUNDARY).unwrap_or(source);
        source.strip_suffix(WORD_BOUNDARY).unwrap_or(source)
    }
}

/// Builds matchers from term display names
pub trait TermMatcherFactory: Debug + Send + Sync {
    fn compile(&self, term_name: &str) -> Result<Arc<dyn TermMatcher>>;
}

/// Case-sensitive whole-word matcher backed by the `regex` crate
#[derive(Debug, Clone)]
pub struct RegexTermMatcher {
    regex: Regex,
}

impl RegexTermMatcher {
    /// Compiles `\b<escaped name>\b`
    pub fn for_term(term_name: &str) -> Result<Self> {
        if term_name.trim().is_empty() {
            return Err(TaggerError::InvalidPattern(
                "Term name cannot be empty".to_string(),
            ));
        }

        let pattern = format!(
            "{WORD_BOUNDARY}{}{WORD_BOUNDARY}",
            regex::escape(term_name)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }
}

impl TermMatcher for RegexTermMatcher {
    fn source(&self) -> &str {
        self.regex.as_str()
    }

    fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    fn find_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        self.regex.find_at(haystack, start).map(|m| m.range())
    }
}

/// Default factory producing [`RegexTermMatcher`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMatcherFactory;

impl TermMatcherFactory for RegexMatcherFactory {
    fn compile(&self, term_name: &str) -> Result<Arc<dyn TermMatcher>> {
        Ok(Arc::new(RegexTermMatcher::for_term(term_name)?))
    }
}
