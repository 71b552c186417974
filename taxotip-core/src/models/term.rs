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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub tid: u64,
    /// Vocabulary id
    pub vid: String,
    pub name: String,
    /// Rich text, possibly containing HTML
    #[serde(default)]
    pub description: String,
}

impl TaxonomyTerm {
    pub fn new(
        vid: impl Into<String>,
        tid: u64,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tid,
            vid: vid.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Stable id used by the tooltip markup
    pub fn tooltip_id(&self) -> String {
        format!("{}-{}", self.vid, self.tid)
    }

    pub fn validate_name(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Term name cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_id() {
        let term = TaxonomyTerm::new("animals", 42, "Rex", "A dog");
        assert_eq!(term.tooltip_id(), "animals-42");
    }

    #[test]
    fn test_validate_name() {
        assert!(TaxonomyTerm::new("v", 1, "Rex", "").validate_name().is_ok());
        assert!(TaxonomyTerm::new("v", 1, "  ", "").validate_name().is_err());
    }
}
