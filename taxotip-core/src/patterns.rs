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

//! Building term search/replace patterns from vocabularies

use crate::description::summarize;
use crate::render::{TermUrlResolver, TooltipPayload, TooltipRenderer};
use crate::repository::TermRepository;
use crate::settings::TooltipSettings;
use anyhow::{Context, Result};
use taxotip_tagger::{PatternSet, TermMatcherFactory};
use tracing::{debug, warn};

/// Collaborators the builder reads from
#[derive(Clone, Copy)]
pub struct PatternSources<'a> {
    pub terms: &'a dyn TermRepository,
    pub renderer: &'a dyn TooltipRenderer,
    pub urls: &'a dyn TermUrlResolver,
    pub matchers: &'a dyn TermMatcherFactory,
    pub settings: &'a TooltipSettings,
}

/// Accumulates one pattern slot per distinct term name.
///
/// Feed it vocabularies in condition weight order: a later term with the same
/// name keeps the existing slot and replaces its rendered tooltip.
pub struct PatternBuilder<'a> {
    sources: PatternSources<'a>,
    patterns: PatternSet,
}

impl<'a> PatternBuilder<'a> {
    pub fn new(sources: PatternSources<'a>) -> Self {
        Self {
            sources,
            patterns: PatternSet::new(),
        }
    }

    /// Adds the terms of every listed vocabulary.
    ///
    /// Returns the builder and the number of terms that created or updated a
    /// slot. Terms whose name cannot be compiled into a matcher, or whose
    /// description is empty after sanitizing, are skipped.
    pub fn add_vocabulary_terms(mut self, vocabulary_ids: &[String]) -> Result<(Self, usize)> {
        let mut count = 0;

        for vid in vocabulary_ids {
            let terms = self
                .sources
                .terms
                .load_term_tree(vid)
                .with_context(|| format!("Failed to load terms of vocabulary '{}'", vid))?;

            for term in terms {
                let matcher = match self.sources.matchers.compile(&term.name) {
                    Ok(matcher) => matcher,
                    Err(e) => {
                        warn!(term = term.tid, vocabulary = %vid, error = %e, "Skipping term");
                        continue;
                    }
                };

                let urls = self.sources.urls;
                let description = summarize(&term.description, self.sources.settings, || {
                    urls.canonical_term_url(term.tid)
                })
                .with_context(|| format!("Failed to summarize term {}", term.tid))?;

                let Some(description_html) = description else {
                    continue;
                };

                let payload = TooltipPayload {
                    id: term.tooltip_id(),
                    term_name: term.name.clone(),
                    description_html,
                };
                let rendered = self
                    .sources
                    .renderer
                    .render(&payload)
                    .with_context(|| format!("Failed to render tooltip for term {}", term.tid))?;

                let outcome = self.patterns.upsert(matcher, rendered);
                debug!(term = %term.name, vocabulary = %vid, ?outcome, "Term pattern added");
                count += 1;
            }
        }

        Ok((self, count))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn finish(self) -> PatternSet {
        self.patterns
    }
}
