use crate::{Result, TaggerError};

/// A slice of an HTML document, either a tag or the text between tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Everything from `<` up to and including the next `>`
    Markup(&'a str),
    /// Text outside of any tag
    Text(&'a str),
}

impl<'a> Span<'a> {
    /// Returns the raw slice of the span
    pub fn as_str(&self) -> &'a str {
        match self {
            Span::Markup(s) | Span::Text(s) => s,
        }
    }

    /// Returns true if this is a text span
    pub fn is_text(&self) -> bool {
        matches!(self, Span::Text(_))
    }
}

/// Splits HTML into alternating markup and text spans.
///
/// A tag runs from a `<` to the first `>` after it; quotes inside the tag are
/// not special. Concatenating the returned spans reproduces the input exactly.
/// A `<` without a closing `>` anywhere after it yields
/// [`TaggerError::MalformedMarkup`].
pub fn scan(html: &str) -> Result<Vec<Span<'_>>> {
    let mut spans = Vec::new();
    let mut content_start = 0;

    while let Some(rel) = html[content_start..].find('<') {
        let tag_begin = content_start + rel;
        let tag_end = match html[tag_begin..].find('>') {
            Some(rel_end) => tag_begin + rel_end + 1,
            None => return Err(TaggerError::MalformedMarkup { offset: tag_begin }),
        };

        if content_start < tag_begin {
            spans.push(Span::Text(&html[content_start..tag_begin]));
        }
        spans.push(Span::Markup(&html[tag_begin..tag_end]));
        content_start = tag_end;
    }

    if content_start < html.len() {
        spans.push(Span::Text(&html[content_start..]));
    }

    Ok(spans)
}
