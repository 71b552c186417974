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

//! Entry points used by the rendering layer

use crate::matcher::{admits_field, select_applicable, FieldTarget};
use crate::models::{FieldValue, RenderingContext};
use crate::patterns::{PatternBuilder, PatternSources};
use crate::render::{TermUrlResolver, TooltipRenderer};
use crate::repository::{ConditionRepository, TermRepository};
use crate::settings::TooltipSettings;
use anyhow::{Context, Result};
use std::sync::Arc;
use taxotip_tagger::{annotate, RegexMatcherFactory, TermMatcherFactory};
use tracing::{debug, info};

/// Adds taxonomy tooltips to rendered field text.
///
/// Stateless between calls; share it freely across threads.
#[derive(Clone)]
pub struct TooltipManager {
    conditions: Arc<dyn ConditionRepository>,
    terms: Arc<dyn TermRepository>,
    renderer: Arc<dyn TooltipRenderer>,
    urls: Arc<dyn TermUrlResolver>,
    matchers: Arc<dyn TermMatcherFactory>,
    settings: TooltipSettings,
}

impl TooltipManager {
    pub fn new(
        conditions: Arc<dyn ConditionRepository>,
        terms: Arc<dyn TermRepository>,
        renderer: Arc<dyn TooltipRenderer>,
        urls: Arc<dyn TermUrlResolver>,
    ) -> Self {
        Self {
            conditions,
            terms,
            renderer,
            urls,
            matchers: Arc::new(RegexMatcherFactory),
            settings: TooltipSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: TooltipSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_matcher_factory(mut self, matchers: Arc<dyn TermMatcherFactory>) -> Self {
        self.matchers = matchers;
        self
    }

    /// Returns the field text with tooltip markup added.
    ///
    /// An empty string means no condition applied or no configured term name
    /// occurs in the text; it is not an error. Every condition that passes all
    /// checks adds `tooltip_taxonomy:<id>` to `cache_tags` once.
    pub fn add_tooltip(
        &self,
        view_mode: &str,
        context: &RenderingContext,
        field_name: &str,
        field_value: &FieldValue,
        cache_tags: &mut Vec<String>,
    ) -> Result<String> {
        let conditions = self
            .conditions
            .list_conditions()
            .context("Failed to load tooltip conditions")?;
        let matched = select_applicable(context, &conditions);

        let target = FieldTarget {
            entity_type: &context.entity.entity_type,
            field_name,
            view_mode,
            format: &field_value.format,
        };

        let mut builder = PatternBuilder::new(PatternSources {
            terms: self.terms.as_ref(),
            renderer: self.renderer.as_ref(),
            urls: self.urls.as_ref(),
            matchers: self.matchers.as_ref(),
            settings: &self.settings,
        });

        for condition in matched {
            if !admits_field(condition, &target) {
                continue;
            }

            let (next, added) = builder.add_vocabulary_terms(&condition.vocabularies)?;
            builder = next;
            debug!(condition = %condition.id, added, "Condition applied");

            if !condition.vocabularies.is_empty() {
                cache_tags.push(condition.cache_tag());
            }
        }

        let patterns = builder.finish();
        match annotate(&field_value.text, &patterns) {
            Some(text) => {
                debug!(
                    field = field_name,
                    patterns = patterns.len(),
                    "Tooltips added to field"
                );
                Ok(text)
            }
            None => Ok(String::new()),
        }
    }

    /// Ids of the conditions that use a vocabulary, in weight order
    pub fn has_tooltip(&self, vocabulary_id: &str) -> Result<Vec<String>> {
        let conditions = self
            .conditions
            .list_conditions()
            .context("Failed to load tooltip conditions")?;

        let ids: Vec<String> = conditions
            .into_iter()
            .filter(|condition| condition.uses_vocabulary(vocabulary_id))
            .map(|condition| condition.id)
            .collect();

        if !ids.is_empty() {
            info!(vocabulary = vocabulary_id, conditions = ?ids, "Vocabulary used by tooltip conditions");
        }
        Ok(ids)
    }
}
