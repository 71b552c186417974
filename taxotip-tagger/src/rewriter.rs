use crate::pattern::PatternSet;
use crate::scanner::{scan, Span};
use std::ops::Range;
use tracing::debug;

/// A piece of a text fragment during replacement
enum Piece<'a> {
    /// Byte range of the original text still open to matching
    Plain(Range<usize>),
    /// Inserted replacement markup
    Replaced(&'a str),
}

/// Replaces every occurrence of every pattern in a plain text fragment.
///
/// Patterns are applied one after another in insertion order, so an earlier
/// pattern takes precedence where two matches overlap. Each pattern only
/// searches the stretches of the original text that no earlier pattern
/// replaced; replacement HTML is inserted literally and never searched again.
/// Word boundaries are judged against the original text.
pub fn replace_terms(text: &str, patterns: &PatternSet) -> String {
    let mut pieces = vec![Piece::Plain(0..text.len())];

    for entry in patterns.iter() {
        let mut next = Vec::with_capacity(pieces.len());
        for piece in pieces {
            let range = match piece {
                Piece::Plain(range) => range,
                replaced => {
                    next.push(replaced);
                    continue;
                }
            };

            let mut copied = range.start;
            let mut pos = range.start;
            while pos < range.end {
                let Some(found) = entry.matcher.find_at(text, pos) else {
                    break;
                };
                if found.start >= range.end {
                    break;
                }
                if found.is_empty() || found.end > range.end {
                    // Not a usable match inside this stretch; retry one character later
                    pos = found.start + text[found.start..].chars().next().map_or(1, char::len_utf8);
                    continue;
                }

                if copied < found.start {
                    next.push(Piece::Plain(copied..found.start));
                }
                next.push(Piece::Replaced(&entry.replacement));
                copied = found.end;
                pos = found.end;
            }
            if copied < range.end {
                next.push(Piece::Plain(copied..range.end));
            }
        }
        pieces = next;
    }

    let mut result = String::with_capacity(text.len());
    for piece in pieces {
        match piece {
            Piece::Plain(range) => result.push_str(&text[range]),
            Piece::Replaced(html) => result.push_str(html),
        }
    }
    result
}

/// Applies the patterns to the text between tags, copying tags verbatim.
///
/// When the markup contains a `<` with no closing `>`, the input is returned
/// unchanged.
pub fn rewrite(html: &str, patterns: &PatternSet) -> String {
    if patterns.is_empty() {
        return html.to_string();
    }

    let spans = match scan(html) {
        Ok(spans) => spans,
        Err(e) => {
            debug!(error = %e, "Leaving markup untouched");
            return html.to_string();
        }
    };

    let mut new_html = String::with_capacity(html.len());
    for span in spans {
        match span {
            Span::Markup(tag) => new_html.push_str(tag),
            Span::Text(text) => new_html.push_str(&replace_terms(text, patterns)),
        }
    }

    new_html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{RegexMatcherFactory, TermMatcherFactory};
    use pretty_assertions::assert_eq;

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
    fn test_replace_every_occurrence() {
        let set = set_of(&[("dog", "[dog]")]);
        assert_eq!(replace_terms("dog eat dog", &set), "[dog] eat [dog]");
    }

    #[test]
    fn test_replace_multiple_patterns() {
        let set = set_of(&[("oranges", "<O>"), ("bananas", "<B>")]);
        assert_eq!(
            replace_terms("I like oranges and bananas", &set),
            "I like <O> and <B>"
        );
    }

    #[test]
    fn test_replace_respects_word_boundaries() {
        let set = set_of(&[("test", "[t]")]);
        assert_eq!(
            replace_terms("test testing test! (test)", &set),
            "[t] testing [t]! ([t])"
        );
    }

    #[test]
    fn test_replacement_is_not_searched_again() {
        let set = set_of(&[("cat", "<span title='dog'>cat</span>"), ("dog", "[dog]")]);
        assert_eq!(
            replace_terms("cat dog", &set),
            "<span title='dog'>cat</span> [dog]"
        );
    }

    #[test]
    fn test_first_inserted_pattern_wins_partial_overlap() {
        let set = set_of(&[("York City", "[YC]"), ("New York", "[NY]")]);
        assert_eq!(replace_terms("New York City", &set), "New [YC]");

        let set = set_of(&[("New York", "[NY]"), ("York City", "[YC]")]);
        assert_eq!(replace_terms("New York City", &set), "[NY] City");
    }

    #[test]
    fn test_later_pattern_fills_remaining_text() {
        let set = set_of(&[("York City", "[YC]"), ("New York", "[NY]")]);
        assert_eq!(
            replace_terms("New York City and New York", &set),
            "New [YC] and [NY]"
        );
    }

    #[test]
    fn test_replacement_is_literal() {
        let set = set_of(&[("price", "$1 \\1 ${name}")]);
        assert_eq!(replace_terms("the price", &set), "the $1 \\1 ${name}");
    }

    #[test]
    fn test_replace_multibyte_text() {
        let set = set_of(&[("café", "[café]")]);
        assert_eq!(replace_terms("un café noir", &set), "un [café] noir");
    }

    #[test]
    fn test_rewrite_skips_markup() {
        let set = set_of(&[("dog", "[dog]")]);
        assert_eq!(
            rewrite("<a href='dog'>dog</a>", &set),
            "<a href='dog'>[dog]</a>"
        );
    }

    #[test]
    fn test_rewrite_text_around_tags() {
        let set = set_of(&[("world", "<em>world</em>")]);
        assert_eq!(
            rewrite("world <strong>brave</strong> world!", &set),
            "<em>world</em> <strong>brave</strong> <em>world</em>!"
        );
    }

    #[test]
    fn test_rewrite_without_patterns() {
        let html = "<p>Hello <b>dog</b></p>";
        assert_eq!(rewrite(html, &PatternSet::new()), html);
    }

    #[test]
    fn test_rewrite_unterminated_tag_returns_input() {
        let set = set_of(&[("text", "[text]")]);
        assert_eq!(rewrite("text <div", &set), "text <div");
        assert_eq!(rewrite("<p>text</p><img src='x'", &set), "<p>text</p><img src='x'");
    }
}
