// Taxotip - contextual taxonomy tooltips for rendered text
// Copyright (C) 2025 Taxotip Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Turning rich-text term descriptions into tooltip bodies

use crate::settings::TooltipSettings;
use std::collections::HashSet;

/// Tags whose content is removed along with them; never allowed
const STRIPPED_WITH_CONTENT: [&str; 2] = ["script", "style"];

/// Keeps only the allowed inline tags, dropping other tags but not their text
pub fn sanitize_description(raw: &str, allowed_tags: &[String]) -> String {
    let tags: HashSet<&str> = allowed_tags
        .iter()
        .map(String::as_str)
        .filter(|tag| !STRIPPED_WITH_CONTENT.contains(tag))
        .collect();
    let mut builder = ammonia::Builder::default();
    builder.tags(tags).link_rel(None);
    builder.clean(raw).to_string()
}

/// The description with every tag removed and entities decoded
pub fn plain_text(raw: &str) -> String {
    let stripped = ammonia::Builder::empty().clean(raw).to_string();
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Number of characters of visible text in the description
pub fn plain_text_length(raw: &str) -> usize {
    plain_text(raw).chars().count()
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Cuts sanitized HTML to at most `max_chars` characters without ending
/// inside a tag or an entity, then closes any elements left open
fn truncate_markup(sanitized: &str, max_chars: usize, allowed_tags: &[String]) -> String {
    let mut cut = truncate_chars(sanitized, max_chars);
    if let Some(open) = cut.rfind('<') {
        if !cut[open..].contains('>') {
            cut = &cut[..open];
        }
    }
    if let Some(amp) = cut.rfind('&') {
        if !cut[amp..].contains(';') {
            cut = &cut[..amp];
        }
    }
    sanitize_description(cut, allowed_tags)
}

/// Builds the tooltip body for a description.
///
/// Returns `None` when nothing survives sanitizing. Descriptions whose plain
/// text is longer than `settings.summary_length` are cut to that many
/// characters of sanitized HTML, backing off from a split tag or entity,
/// and followed by a "read more" link to
/// `term_url`, which is only resolved in that case.
pub fn summarize<F>(raw: &str, settings: &TooltipSettings, term_url: F) -> anyhow::Result<Option<String>>
where
    F: FnOnce() -> anyhow::Result<String>,
{
    let sanitized = sanitize_description(raw, &settings.allowed_description_tags);
    if sanitized.trim().is_empty() {
        return Ok(None);
    }

    if plain_text_length(raw) <= settings.summary_length {
        return Ok(Some(sanitized));
    }

    let url = term_url()?;
    Ok(Some(format!(
        "{}...<br/><a href='{}'><strong>{}</strong></a>",
        truncate_markup(&sanitized, settings.summary_length, &settings.allowed_description_tags),
        html_escape::encode_single_quoted_attribute(&url),
        settings.read_more_label
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn allowed() -> Vec<String> {
        TooltipSettings::default().allowed_description_tags
    }

    fn url() -> anyhow::Result<String> {
        Ok("https://example.com/taxonomy/term/1".to_string())
    }

    #[test]
    fn test_sanitize_keeps_inline_tags() {
        let html = "<p>A <strong>big</strong> <em>dog</em><br></p>";
        assert_eq!(
            sanitize_description(html, &allowed()),
            "A <strong>big</strong> <em>dog</em><br>"
        );
    }

    #[test]
    fn test_sanitize_drops_scripts_and_blocks() {
        let html = "<div><h2>Title</h2><script>alert(1)</script>text</div>";
        let clean = sanitize_description(html, &allowed());
        assert!(!clean.contains("<script"));
        assert!(!clean.contains("alert"));
        assert!(!clean.contains("<h2>"));
        assert!(clean.contains("Title"));
        assert!(clean.contains("text"));
    }

    #[test]
    fn test_sanitize_never_allows_script() {
        let mut tags = allowed();
        tags.push("script".to_string());
        let clean = sanitize_description("<b>x</b><script>alert(1)</script>", &tags);
        assert_eq!(clean, "<b>x</b>");
    }

    #[test]
    fn test_sanitize_keeps_link_target() {
        let clean = sanitize_description("<a href=\"/x\">x</a>", &allowed());
        assert_eq!(clean, "<a href=\"/x\">x</a>");
    }

    #[test]
    fn test_plain_text_length_ignores_markup() {
        assert_eq!(plain_text_length("<b>ab</b>c"), 3);
        assert_eq!(plain_text_length("Tom &amp; Jerry"), 11);
        assert_eq!(plain_text_length("café"), 4);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_summarize_empty_description() {
        let settings = TooltipSettings::default();
        assert_eq!(summarize("", &settings, url).unwrap(), None);
        assert_eq!(summarize("<p></p>", &settings, url).unwrap(), None);
    }

    #[test]
    fn test_summarize_exactly_at_limit_is_kept_whole() {
        let settings = TooltipSettings::default();
        let text = "a".repeat(100);
        let called = std::cell::Cell::new(false);
        let result = summarize(&text, &settings, || {
            called.set(true);
            url()
        })
        .unwrap();
        assert_eq!(result, Some(text));
        assert!(!called.get());
    }

    #[test]
    fn test_summarize_one_over_limit_is_cut() {
        let settings = TooltipSettings::default();
        let text = "a".repeat(101);
        let result = summarize(&text, &settings, url).unwrap().unwrap();
        assert_eq!(
            result,
            format!(
                "{}...<br/><a href='https://example.com/taxonomy/term/1'><strong>Read More &#9032;</strong></a>",
                "a".repeat(100)
            )
        );
    }

    #[test]
    fn test_summarize_never_cuts_inside_entity() {
        let settings = TooltipSettings::default();
        let text = format!("{}&{}", "a".repeat(98), "b".repeat(10));
        let result = summarize(&text, &settings, url).unwrap().unwrap();
        assert_eq!(
            result,
            format!(
                "{}...<br/><a href='https://example.com/taxonomy/term/1'><strong>Read More &#9032;</strong></a>",
                "a".repeat(98)
            )
        );
    }

    #[test]
    fn test_summarize_entity_before_cut_is_kept() {
        let mut settings = TooltipSettings::default();
        settings.summary_length = 9;
        let result = summarize("Tom &amp; Jerry and friends", &settings, url).unwrap().unwrap();
        assert!(result.starts_with("Tom &amp;..."));
    }

    #[test]
    fn test_summarize_never_cuts_inside_tag_and_closes_open_ones() {
        let mut settings = TooltipSettings::default();
        settings.summary_length = 8;
        let result = summarize("ab <strong>cdefgh</strong> ijklmnop", &settings, url)
            .unwrap()
            .unwrap();
        assert!(result.starts_with("ab ..."));

        settings.summary_length = 14;
        let result = summarize("ab <strong>cdefgh</strong> ijklmnop", &settings, url)
            .unwrap()
            .unwrap();
        assert!(result.starts_with("ab <strong>cde</strong>..."));
    }

    #[test]
    fn test_summarize_url_failure_propagates() {
        let settings = TooltipSettings::default();
        let text = "b".repeat(150);
        let result = summarize(&text, &settings, || Err(anyhow::anyhow!("no route")));
        assert!(result.is_err());
    }
}
