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

//! TOML catalog of conditions and terms
//!
//! ```toml
//! [[conditions]]
//! id = "glossary"
//! weight = 0
//! formats = ["basic_html"]
//! vocabularies = ["glossary"]
//! path = { pages = ["/node/*"] }
//!
//! [[terms]]
//! vid = "glossary"
//! tid = 1
//! name = "Rust"
//! description = "A systems programming language"
//! ```

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::Path;
use taxotip_core::{Condition, InMemoryStore, TaxonomyTerm};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub terms: Vec<TaxonomyTerm>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Catalog file not found: {}", path.display());
        }

        let catalog: Catalog = Figment::from(Toml::file(path))
            .extract()
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

        info!(
            conditions = catalog.conditions.len(),
            terms = catalog.terms.len(),
            "Loaded catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    pub fn parse(toml: &str) -> Result<Self> {
        Figment::from(Toml::string(toml))
            .extract()
            .context("Failed to parse catalog")
    }

    /// Validation problems per condition id, in file order
    pub fn problems(&self) -> Vec<(String, String)> {
        let mut problems = Vec::new();
        for condition in &self.conditions {
            if let Err(e) = condition.is_valid() {
                problems.push((condition.id.clone(), e));
            }
        }
        for term in &self.terms {
            if let Err(e) = term.validate_name() {
                problems.push((term.tooltip_id(), e));
            }
        }
        problems
    }

    pub fn into_store(self) -> InMemoryStore {
        for (id, problem) in self.problems() {
            warn!(id = %id, "Catalog entry is invalid: {}", problem);
        }
        InMemoryStore::with_conditions(self.conditions, self.terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use taxotip_core::{ConditionRepository, TermRepository};
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
        [[conditions]]
        id = "late"
        weight = 10
        formats = ["basic_html"]
        vocabularies = ["glossary"]
        path = { pages = ["/node/*"], negate = false }
        content_types = ["article"]

        [[conditions]]
        id = "early"
        weight = -1
        vocabularies = ["glossary"]
        view_modes = ["0"]
        fields = ["node-body"]
        path = { pages = ["<front>"] }

        [[terms]]
        vid = "glossary"
        tid = 1
        name = "Rust"
        description = "A systems programming language"
    "#;

    #[test]
    fn test_parse_sample() {
        let catalog = Catalog::parse(SAMPLE).unwrap();
        assert_eq!(catalog.conditions.len(), 2);
        assert_eq!(catalog.terms.len(), 1);

        let late = &catalog.conditions[0];
        assert_eq!(late.weight, 10);
        assert!(late.content_types.as_ref().unwrap().bundles.contains("article"));
        assert_eq!(late.path.as_ref().unwrap().pages, vec!["/node/*"]);
        assert!(catalog.problems().is_empty());
    }

    #[test]
    fn test_store_is_weight_ordered() {
        let store = Catalog::parse(SAMPLE).unwrap().into_store();
        let ids: Vec<_> = store
            .list_conditions()
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["early", "late"]);
        assert_eq!(store.load_term_tree("glossary").unwrap().len(), 1);
    }

    #[test]
    fn test_problems_reported() {
        let catalog = Catalog::parse(
            r#"
            [[conditions]]
            id = "broken"
            vocabularies = []
            fields = ["body"]

            [[terms]]
            vid = "v"
            tid = 3
            name = " "
            "#,
        )
        .unwrap();
        let problems = catalog.problems();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].0, "broken");
        assert_eq!(problems[1].0, "v-3");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.conditions.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("Catalog file not found"));
    }
}
