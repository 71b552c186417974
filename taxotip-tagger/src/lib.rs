//! Term tooltip tagging for rendered HTML
//!
//! This library wraps known term names found in the text of an HTML fragment
//! with replacement markup, leaving existing tags and their attributes alone.
//! Patterns are whole-word, case-sensitive matches on a term's display name.
//!
//! # Examples
//!
//! ```
//! use taxotip_tagger::{annotate, PatternSet, RegexMatcherFactory, TermMatcherFactory};
//!
//! let mut patterns = PatternSet::new();
//! patterns.upsert(
//!     RegexMatcherFactory.compile("Rust").unwrap(),
//!     r#"<abbr title="A language">Rust</abbr>"#.to_string(),
//! );
//!
//! let html = r#"<p>I love <a href="/Rust">Rust</a> programming!</p>"#;
//! let result = annotate(html, &patterns).unwrap();
//! assert_eq!(
//!     result,
//!     r#"<p>I love <a href="/Rust"><abbr title="A language">Rust</abbr></a> programming!</p>"#
//! );
//!
//! // Nothing to tag yields no output at all
//! assert!(annotate("<p>Python</p>", &patterns).is_none());
//! ```

pub mod error;
pub mod matcher;
pub mod overlap;
pub mod pattern;
pub mod rewriter;
pub mod scanner;

pub use error::{Result, TaggerError};
pub use matcher::{RegexMatcherFactory, RegexTermMatcher, TermMatcher, TermMatcherFactory};
pub use overlap::filter_applicable;
pub use pattern::{PatternEntry, PatternSet, Upsert};
pub use rewriter::{replace_terms, rewrite};
pub use scanner::{scan, Span};

/// Filters `patterns` against `html` and rewrites it with the survivors.
///
/// Returns `None` when no pattern occurs in `html`, so callers can tell
/// "nothing to contribute" apart from a rewrite that changed nothing.
pub fn annotate(html: &str, patterns: &PatternSet) -> Option<String> {
    let applicable = filter_applicable(patterns, html);
    if applicable.is_empty() {
        return None;
    }
    Some(rewrite(html, &applicable))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(pairs: &[(&str, &str)]) -> PatternSet {
        let mut set = PatternSet::new();
        for (name, replacement) in pairs {
            set.upsert(
                RegexMatcherFactory.compile(name).unwrap(),
                replacement.to_string(),
            );
        }
        set
    }

    #[test]
    fn test_annotate_empty_patterns() {
        assert!(annotate("<p>Hello world!</p>", &PatternSet::new()).is_none());
    }

    #[test]
    fn test_annotate_simple() {
        let set = set_of(&[("world", "<strong>world</strong>")]);
        assert_eq!(
            annotate("<p>Hello world!</p>", &set).unwrap(),
            "<p>Hello <strong>world</strong>!</p>"
        );
    }

    #[test]
    fn test_annotate_term_only_in_attribute() {
        // The name occurs in the raw field, so it is relevant, but only
        // inside markup: the output is the unchanged HTML.
        let set = set_of(&[("dog", "[dog]")]);
        assert_eq!(
            annotate("<img alt='dog'>", &set).unwrap(),
            "<img alt='dog'>"
        );
    }

    #[test]
    fn test_annotate_longest_term_wins() {
        let set = set_of(&[
            ("Cool World", "<a href=\"cw\">Cool World</a>"),
            ("Hello Cool World", "<a href=\"hcw\">Hello Cool World</a>"),
        ]);
        assert_eq!(
            annotate("Hello Cool World!", &set).unwrap(),
            r#"<a href="hcw">Hello Cool World</a>!"#
        );
    }
}
