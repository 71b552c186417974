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

//! Data-access collaborators and an in-memory implementation

use crate::models::{Condition, TaxonomyTerm};
use anyhow::Result;
use std::collections::HashMap;

/// Source of tooltip conditions
pub trait ConditionRepository: Send + Sync {
    /// All conditions, sorted by ascending weight
    fn list_conditions(&self) -> Result<Vec<Condition>>;
}

/// Source of taxonomy terms
pub trait TermRepository: Send + Sync {
    /// Every term of a vocabulary as a flat list
    fn load_term_tree(&self, vocabulary_id: &str) -> Result<Vec<TaxonomyTerm>>;
}

/// Conditions and terms held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    conditions: Vec<Condition>,
    terms: HashMap<String, Vec<TaxonomyTerm>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conditions(conditions: Vec<Condition>, terms: Vec<TaxonomyTerm>) -> Self {
        let mut store = Self::new();
        for condition in conditions {
            store.add_condition(condition);
        }
        for term in terms {
            store.add_term(term);
        }
        store
    }

    /// Inserts keeping weight order; equal weights keep insertion order
    pub fn add_condition(&mut self, condition: Condition) {
        let idx = self
            .conditions
            .partition_point(|existing| existing.weight <= condition.weight);
        self.conditions.insert(idx, condition);
    }

    pub fn add_term(&mut self, term: TaxonomyTerm) {
        self.terms.entry(term.vid.clone()).or_default().push(term);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

impl ConditionRepository for InMemoryStore {
    fn list_conditions(&self) -> Result<Vec<Condition>> {
        Ok(self.conditions.clone())
    }
}

impl TermRepository for InMemoryStore {
    fn load_term_tree(&self, vocabulary_id: &str) -> Result<Vec<TaxonomyTerm>> {
        Ok(self.terms.get(vocabulary_id).cloned().unwrap_or_default())
    }
}
