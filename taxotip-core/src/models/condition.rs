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

use super::context::RenderingContext;
use super::path_rule::PathRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// View-mode value meaning "every view mode"
pub const ALL_VIEW_MODES: &str = "0";

/// Entity type whose bundle is checked against content-type restrictions
pub const CONTENT_ENTITY_TYPE: &str = "node";

/// Restriction on the bundle of a content-bearing entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeRule {
    pub bundles: BTreeSet<String>,
}

impl ContentTypeRule {
    pub fn new<I, S>(bundles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bundles: bundles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Non-content entities are not restricted by content type
    pub fn evaluate(&self, context: &RenderingContext) -> bool {
        if self.is_empty() || !context.entity.is_content_bearing() {
            return true;
        }
        context
            .entity
            .bundle
            .as_ref()
            .is_some_and(|bundle| self.bundles.contains(bundle))
    }
}

/// The fixed set of visibility rules a condition can carry
#[derive(Debug, Clone, Copy)]
pub enum ConditionRule<'a> {
    Path(&'a PathRule),
    ContentType(&'a ContentTypeRule),
}

impl ConditionRule<'_> {
    pub fn evaluate(&self, context: &RenderingContext) -> bool {
        match self {
            ConditionRule::Path(rule) => !rule.is_empty() && rule.evaluate(&context.request),
            ConditionRule::ContentType(rule) => rule.evaluate(context),
        }
    }
}

/// Administrator-defined rule tying vocabularies to where their terms get tooltips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Ascending order; later conditions win same-name collisions
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub path: Option<PathRule>,
    #[serde(default)]
    pub content_types: Option<ContentTypeRule>,
    #[serde(default)]
    pub view_modes: Vec<String>,
    #[serde(default)]
    pub formats: Vec<String>,
    /// Field keys of the form `entityType-fieldName`
    #[serde(default)]
    pub fields: Vec<String>,
    pub vocabularies: Vec<String>,
}

impl Condition {
    pub fn new(id: impl Into<String>, vocabularies: Vec<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            weight: 0,
            path: None,
            content_types: None,
            view_modes: Vec::new(),
            formats: Vec::new(),
            fields: Vec::new(),
            vocabularies,
        }
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_path(mut self, path: PathRule) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_content_types(mut self, rule: ContentTypeRule) -> Self {
        self.content_types = Some(rule);
        self
    }

    pub fn with_view_modes<S: Into<String>>(mut self, modes: impl IntoIterator<Item = S>) -> Self {
        self.view_modes = modes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_formats<S: Into<String>>(mut self, formats: impl IntoIterator<Item = S>) -> Self {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Rules to evaluate against the request, path first
    pub fn rules(&self) -> Vec<ConditionRule<'_>> {
        let mut rules = Vec::with_capacity(2);
        if let Some(path) = &self.path {
            rules.push(ConditionRule::Path(path));
        }
        if let Some(content_types) = &self.content_types {
            rules.push(ConditionRule::ContentType(content_types));
        }
        rules
    }

    pub fn has_path_rule(&self) -> bool {
        self.path.as_ref().is_some_and(|rule| !rule.is_empty())
    }

    /// True unless the view-mode list names at least one concrete mode
    pub fn applies_to_all_view_modes(&self) -> bool {
        self.view_modes.iter().all(|mode| mode == ALL_VIEW_MODES)
    }

    pub fn allows_view_mode(&self, view_mode: &str) -> bool {
        self.applies_to_all_view_modes() || self.view_modes.iter().any(|m| m == view_mode)
    }

    pub fn allows_format(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }

    pub fn allows_field(&self, entity_type: &str, field_name: &str) -> bool {
        if self.fields.is_empty() {
            return true;
        }
        let key = field_key(entity_type, field_name);
        self.fields.iter().any(|f| *f == key)
    }

    pub fn uses_vocabulary(&self, vocabulary_id: &str) -> bool {
        self.vocabularies.iter().any(|v| v == vocabulary_id)
    }

    pub fn cache_tag(&self) -> String {
        format!("tooltip_taxonomy:{}", self.id)
    }

    pub fn validate_id(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Condition id cannot be empty".to_string());
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err("Condition id cannot contain whitespace".to_string());
        }
        Ok(())
    }

    pub fn validate_vocabularies(&self) -> Result<(), String> {
        if self.vocabularies.is_empty() {
            return Err("Condition must reference at least one vocabulary".to_string());
        }
        if self.vocabularies.iter().any(|v| v.trim().is_empty()) {
            return Err("Vocabulary id cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn validate_fields(&self) -> Result<(), String> {
        for field in &self.fields {
            match field.split_once('-') {
                Some((entity_type, name)) if !entity_type.is_empty() && !name.is_empty() => {}
                _ => {
                    return Err(format!(
                        "Field key '{}' must look like entityType-fieldName",
                        field
                    ))
                }
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> Result<(), String> {
        self.validate_id()?;
        self.validate_vocabularies()?;
        self.validate_fields()?;
        Ok(())
    }
}

/// Key identifying a field across entity types
pub fn field_key(entity_type: &str, field_name: &str) -> String {
    format!("{}-{}", entity_type, field_name)
}
