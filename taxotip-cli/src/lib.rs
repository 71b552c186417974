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

//! Command-line collaborator layer for Taxotip
//!
//! Loads conditions and terms from a TOML catalog, renders tooltip fragments
//! with Tera and wires them into a [`TooltipManager`].

pub mod catalog;
pub mod config;
pub mod render;

use anyhow::Result;
use std::sync::Arc;
use taxotip_core::{InMemoryStore, TooltipManager};

pub use catalog::Catalog;
pub use config::Config;
pub use render::{SiteUrlResolver, TeraTooltipRenderer};

/// Builds a manager reading from `store` with the configured renderer and URLs
pub fn build_manager(config: &Config, store: InMemoryStore) -> Result<TooltipManager> {
    let store = Arc::new(store);
    let renderer = TeraTooltipRenderer::new(config.template.as_deref())?;
    let urls = SiteUrlResolver::new(&config.base_url)?;

    Ok(
        TooltipManager::new(store.clone(), store, Arc::new(renderer), Arc::new(urls))
            .with_settings(config.tooltip.clone()),
    )
}
