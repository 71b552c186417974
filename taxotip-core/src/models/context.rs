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

use super::condition::CONTENT_ENTITY_TYPE;
use super::path_rule::RequestPath;
use serde::{Deserialize, Serialize};

/// The entity whose field is being rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_type: String,
    #[serde(default)]
    pub bundle: Option<String>,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: None,
        }
    }

    pub fn node(bundle: impl Into<String>) -> Self {
        Self {
            entity_type: CONTENT_ENTITY_TYPE.to_string(),
            bundle: Some(bundle.into()),
        }
    }

    pub fn with_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = Some(bundle.into());
        self
    }

    pub fn is_content_bearing(&self) -> bool {
        self.entity_type == CONTENT_ENTITY_TYPE
    }
}

/// Request and entity a field is rendered for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderingContext {
    pub request: RequestPath,
    pub entity: EntityRef,
}

impl RenderingContext {
    pub fn new(request: RequestPath, entity: EntityRef) -> Self {
        Self { request, entity }
    }
}

/// Raw field text with its text format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub text: String,
    pub format: String,
}

impl FieldValue {
    pub fn new(text: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: format.into(),
        }
    }
}
