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

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taxotip_core::TooltipSettings;

/// Configuration file read from the working directory
pub const CONFIG_FILE: &str = "taxotip.toml";

/// Prefix of environment overrides; nested keys use `__`
pub const ENV_PREFIX: &str = "TAXOTIP_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TOML file holding conditions and terms
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Base for canonical term URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Tera template for the tooltip fragment; built-in when unset
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default)]
    pub tooltip: TooltipSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            base_url: default_base_url(),
            template: None,
            tooltip: TooltipSettings::default(),
        }
    }
}

impl Config {
    /// Defaults, then `taxotip.toml`, then `TAXOTIP_*` variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(Path::new(CONFIG_FILE))
    }

    pub fn load(config_file: &Path) -> anyhow::Result<Self> {
        let config: Config = Self::figment(config_file).extract()?;
        Ok(config)
    }

    pub fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

fn default_catalog() -> PathBuf {
    PathBuf::from("catalog.toml")
}

fn default_base_url() -> String {
    "http://localhost/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog, PathBuf::from("catalog.toml"));
        assert_eq!(config.base_url, "http://localhost/");
        assert!(config.template.is_none());
        assert_eq!(config.tooltip.summary_length, 100);
    }

    #[test]
    fn test_file_and_env_layers() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                catalog = "glossary.toml"
                base_url = "https://docs.example.com/"

                [tooltip]
                summary_length = 60
                "#,
            )?;
            jail.set_env("TAXOTIP_BASE_URL", "https://override.example.com/");
            jail.set_env("TAXOTIP_TOOLTIP__READ_MORE_LABEL", "More");

            let config = Config::from_env().expect("config loads");
            assert_eq!(config.catalog, PathBuf::from("glossary.toml"));
            assert_eq!(config.base_url, "https://override.example.com/");
            assert_eq!(config.tooltip.summary_length, 60);
            assert_eq!(config.tooltip.read_more_label, "More");
            assert_eq!(config.tooltip.allowed_description_tags.len(), 7);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::from_env().expect("config loads");
            assert_eq!(config.catalog, PathBuf::from("catalog.toml"));
            Ok(())
        });
    }
}
