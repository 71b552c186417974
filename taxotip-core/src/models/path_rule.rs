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

/// Placeholder page pattern matching the site front page
pub const FRONT_PAGE: &str = "<front>";

/// The request path a field is rendered under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPath {
    /// System path, e.g. `/node/12`
    pub path: String,
    /// Path alias, e.g. `/about-us`
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub is_front: bool,
}

impl RequestPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
            is_front: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn front(mut self) -> Self {
        self.is_front = true;
        self
    }
}

/// Page-pattern restriction on the request path.
///
/// Each pattern is a path where `*` matches any run of characters, or
/// `<front>` for the front page. Matching ignores case and succeeds when
/// either the system path or its alias matches. `negate` inverts the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRule {
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub negate: bool,
}

impl PathRule {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            negate: false,
        }
    }

    /// Builds a rule from newline separated patterns
    pub fn from_lines(lines: &str) -> Self {
        Self::new(lines.lines())
    }

    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// True when no usable page pattern is configured
    pub fn is_empty(&self) -> bool {
        self.patterns().next().is_none()
    }

    fn patterns(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.trim()).filter(|p| !p.is_empty())
    }

    /// Matches the page patterns against the request, ignoring `negate`
    pub fn pages_match(&self, request: &RequestPath) -> bool {
        let path = request.path.to_lowercase();
        let alias = request.alias.as_ref().map(|a| a.to_lowercase());

        self.patterns().any(|pattern| {
            if pattern.eq_ignore_ascii_case(FRONT_PAGE) {
                return request.is_front;
            }
            let pattern = pattern.to_lowercase();
            glob_match(&pattern, &path) || alias.as_deref().is_some_and(|a| glob_match(&pattern, a))
        })
    }

    /// Effective match: the page match XOR `negate`
    pub fn evaluate(&self, request: &RequestPath) -> bool {
        self.pages_match(request) ^ self.negate
    }
}

/// Matches `text` against a pattern where `*` stands for any run of characters
fn glob_match(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or_default();
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };

    let parts: Vec<&str> = parts.collect();
    let Some((last, middle)) = parts.split_last() else {
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(*part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }
    rest.ends_with(*last)
}
