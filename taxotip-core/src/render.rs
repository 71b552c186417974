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

use anyhow::Result;
use serde::Serialize;

/// Everything a tooltip fragment is rendered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipPayload {
    /// `vocabularyId-termId`
    pub id: String,
    pub term_name: String,
    /// Sanitized, possibly summarized, description HTML
    pub description_html: String,
}

/// Renders the HTML that replaces a term name in field text
pub trait TooltipRenderer: Send + Sync {
    fn render(&self, payload: &TooltipPayload) -> Result<String>;
}

impl<F> TooltipRenderer for F
where
    F: Fn(&TooltipPayload) -> Result<String> + Send + Sync,
{
    fn render(&self, payload: &TooltipPayload) -> Result<String> {
        self(payload)
    }
}

/// Resolves the absolute URL of a term page
pub trait TermUrlResolver: Send + Sync {
    fn canonical_term_url(&self, tid: u64) -> Result<String>;
}
