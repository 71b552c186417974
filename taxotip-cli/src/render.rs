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

use anyhow::{Context, Result};
use std::path::Path;
use taxotip_core::{TermUrlResolver, TooltipPayload, TooltipRenderer};
use tera::Tera;
use url::Url;

const TEMPLATE_NAME: &str = "tooltip_taxonomy.html";

/// Markup used when no template file is configured
pub const DEFAULT_TEMPLATE: &str = r#"<span class="tooltip-taxonomy" id="tooltip-{{ id }}" tabindex="0">{{ term_name }}<span class="tooltip-taxonomy__description" role="tooltip">{{ description_html | safe }}</span></span>"#;

/// Renders tooltip fragments with Tera
pub struct TeraTooltipRenderer {
    tera: Tera,
}

impl TeraTooltipRenderer {
    pub fn new(template: Option<&Path>) -> Result<Self> {
        let mut tera = Tera::default();
        match template {
            Some(path) => tera
                .add_template_file(path, Some(TEMPLATE_NAME))
                .with_context(|| format!("Failed to load template {}", path.display()))?,
            None => tera
                .add_raw_template(TEMPLATE_NAME, DEFAULT_TEMPLATE)
                .context("Failed to compile default template")?,
        }
        Ok(Self { tera })
    }
}

impl TooltipRenderer for TeraTooltipRenderer {
    fn render(&self, payload: &TooltipPayload) -> Result<String> {
        let context = tera::Context::from_serialize(payload)?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .with_context(|| format!("Failed to render tooltip {}", payload.id))
    }
}

/// Builds `<base>/taxonomy/term/<tid>` URLs
#[derive(Debug, Clone)]
pub struct SiteUrlResolver {
    base: Url,
}

impl SiteUrlResolver {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }
}

impl TermUrlResolver for SiteUrlResolver {
    fn canonical_term_url(&self, tid: u64) -> Result<String> {
        Ok(self.base.join(&format!("taxonomy/term/{}", tid))?.to_string())
    }
}
