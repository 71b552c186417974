use crate::pattern::PatternSet;
use tracing::debug;

/// Narrows a pattern set down to the patterns worth applying to `source_text`.
///
/// First drops every pattern that does not occur in `source_text`. Then, for
/// every ordered pair of distinct remaining patterns, removes the smaller one
/// when it matches inside the bigger one's pattern text with its outer word
/// boundaries stripped. The pairwise checks run against a snapshot of the
/// relevant patterns taken before any removal, in insertion order, so a
/// pattern already removed still subsumes others.
///
/// An empty result means nothing in the text is eligible for a tooltip.
pub fn filter_applicable(patterns: &PatternSet, source_text: &str) -> PatternSet {
    let mut relevant = patterns.clone();
    relevant.retain(|entry| entry.matcher.is_match(source_text));

    if relevant.is_empty() {
        return relevant;
    }

    let snapshot = relevant.clone();
    for small in snapshot.iter() {
        let subsumed_by = snapshot.iter().find(|big| {
            big.source() != small.source() && small.matcher.is_match(big.matcher.without_boundaries())
        });

        if let Some(big) = subsumed_by {
            debug!(
                small = small.source(),
                big = big.source(),
                "Dropping pattern subsumed by a longer term"
            );
            relevant.retain(|entry| entry.source() != small.source());
        }
    }

    relevant
}
