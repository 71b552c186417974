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

use serde::{Deserialize, Serialize};

/// Knobs for how term descriptions are turned into tooltip text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipSettings {
    /// Plain-text length above which a description is cut and linked
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,

    /// Inner HTML of the "read more" link
    #[serde(default = "default_read_more_label")]
    pub read_more_label: String,

    /// Inline tags kept in descriptions; everything else is stripped
    #[serde(default = "default_allowed_description_tags")]
    pub allowed_description_tags: Vec<String>,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            summary_length: default_summary_length(),
            read_more_label: default_read_more_label(),
            allowed_description_tags: default_allowed_description_tags(),
        }
    }
}

fn default_summary_length() -> usize {
    100
}

fn default_read_more_label() -> String {
    "Read More &#9032;".to_string()
}

fn default_allowed_description_tags() -> Vec<String> {
    ["b", "i", "strong", "span", "br", "a", "em"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = TooltipSettings::default();
        assert_eq!(settings.summary_length, 100);
        assert_eq!(settings.read_more_label, "Read More &#9032;");
        assert_eq!(settings.allowed_description_tags.len(), 7);
        assert!(settings.allowed_description_tags.contains(&"a".to_string()));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let settings: TooltipSettings = serde_json::from_str(r#"{"summary_length": 40}"#).unwrap();
        assert_eq!(settings.summary_length, 40);
        assert_eq!(settings.read_more_label, "Read More &#9032;");
    }
}
