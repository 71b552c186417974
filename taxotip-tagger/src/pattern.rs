use crate::matcher::TermMatcher;
use std::sync::Arc;

/// One search/replace pair for a single term name
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub matcher: Arc<dyn TermMatcher>,
    pub replacement: String,
}

impl PatternEntry {
    pub fn new(matcher: Arc<dyn TermMatcher>, replacement: impl Into<String>) -> Self {
        Self {
            matcher,
            replacement: replacement.into(),
        }
    }

    pub fn source(&self) -> &str {
        self.matcher.source()
    }
}

/// Outcome of [`PatternSet::upsert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Insertion-ordered pattern slots, at most one per pattern source
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    entries: Vec<PatternEntry>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot for a new pattern, or overwrites only the replacement of
    /// the slot that already holds the same pattern source
    pub fn upsert(&mut self, matcher: Arc<dyn TermMatcher>, replacement: String) -> Upsert {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.source() == matcher.source())
        {
            Some(existing) => {
                existing.replacement = replacement;
                Upsert::Replaced
            }
            None => {
                self.entries.push(PatternEntry::new(matcher, replacement));
                Upsert::Inserted
            }
        }
    }

    pub fn get(&self, source: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.source() == source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn retain(&mut self, keep: impl FnMut(&PatternEntry) -> bool) {
        self.entries.retain(keep);
    }
}

impl FromIterator<PatternEntry> for PatternSet {
    fn from_iter<I: IntoIterator<Item = PatternEntry>>(iter: I) -> Self {
        let mut set = PatternSet::new();
        for entry in iter {
            set.upsert(entry.matcher, entry.replacement);
        }
        set
    }
}
