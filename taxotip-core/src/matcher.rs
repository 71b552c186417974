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

//! Deciding which conditions apply to a rendering context

use crate::models::{Condition, RenderingContext};
use tracing::debug;

/// Field-level facts checked after the path and content-type rules
#[derive(Debug, Clone, Copy)]
pub struct FieldTarget<'a> {
    pub entity_type: &'a str,
    pub field_name: &'a str,
    pub view_mode: &'a str,
    pub format: &'a str,
}

/// Returns the conditions whose path and content-type rules accept `context`.
///
/// `conditions` must already be in ascending weight order; that order is kept.
/// A condition without a usable path rule never matches. A content-type rule
/// only restricts content-bearing entities.
pub fn select_applicable<'a>(
    context: &RenderingContext,
    conditions: &'a [Condition],
) -> Vec<&'a Condition> {
    conditions
        .iter()
        .filter(|condition| {
            if !condition.has_path_rule() {
                debug!(condition = %condition.id, "Skipping condition without path rule");
                return false;
            }
            condition
                .rules()
                .iter()
                .all(|rule| rule.evaluate(context))
        })
        .collect()
}

/// Second pass over a matched condition: text format, view mode and field key
pub fn admits_field(condition: &Condition, target: &FieldTarget<'_>) -> bool {
    if !condition.allows_format(target.format) {
        debug!(condition = %condition.id, format = target.format, "Text format not allowed");
        return false;
    }
    if !condition.allows_view_mode(target.view_mode) {
        debug!(condition = %condition.id, view_mode = target.view_mode, "View mode not allowed");
        return false;
    }
    if !condition.allows_field(target.entity_type, target.field_name) {
        debug!(
            condition = %condition.id,
            entity_type = target.entity_type,
            field = target.field_name,
            "Field not selected"
        );
        return false;
    }
    true
}
