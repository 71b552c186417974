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

//! Contextual taxonomy tooltips for rendered text fields
//!
//! Administrators define conditions restricting where a vocabulary's term
//! names are wrapped in tooltip markup. [`TooltipManager`] evaluates those
//! conditions for one rendered field, builds one search pattern per distinct
//! term name and rewrites the text between tags.

pub mod description;
pub mod manager;
pub mod matcher;
pub mod models;
pub mod patterns;
pub mod render;
pub mod repository;
pub mod settings;

pub use manager::TooltipManager;
pub use models::*;
pub use render::{TermUrlResolver, TooltipPayload, TooltipRenderer};
pub use repository::{ConditionRepository, InMemoryStore, TermRepository};
pub use settings::TooltipSettings;
