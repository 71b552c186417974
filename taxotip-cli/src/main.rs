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
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use taxotip_cli::{build_manager, config::CONFIG_FILE, Catalog, Config};
use taxotip_core::{
    matcher::select_applicable, EntityRef, FieldValue, RenderingContext, RequestPath,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "taxotip")]
#[command(about = "Add taxonomy term tooltips to rendered text")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Catalog of conditions and terms, overriding the configuration
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add tooltips to a field value and print the result
    Annotate {
        #[command(flatten)]
        target: TargetArgs,

        /// View mode the field is rendered in
        #[arg(long, default_value = "full")]
        view_mode: String,

        /// Field machine name
        #[arg(long, default_value = "body")]
        field: String,

        /// Text format of the field value
        #[arg(long, default_value = "basic_html")]
        format: String,

        /// File holding the field text (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// List the conditions that use a vocabulary
    Usage {
        /// Vocabulary id
        vocabulary: String,
    },

    /// List conditions in weight order and whether they apply to a request
    Conditions {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Request path
    #[arg(long, default_value = "/")]
    path: String,

    /// Path alias of the request
    #[arg(long)]
    alias: Option<String>,

    /// Treat the request as the front page
    #[arg(long)]
    front: bool,

    /// Entity type owning the field
    #[arg(long, default_value = "node")]
    entity_type: String,

    /// Bundle (content type) of the entity
    #[arg(long)]
    bundle: Option<String>,
}

impl TargetArgs {
    fn context(&self) -> RenderingContext {
        let mut request = RequestPath::new(&self.path);
        if let Some(alias) = &self.alias {
            request = request.with_alias(alias);
        }
        if self.front {
            request = request.front();
        }

        let mut entity = EntityRef::new(&self.entity_type);
        if let Some(bundle) = &self.bundle {
            entity = entity.with_bundle(bundle);
        }

        RenderingContext::new(request, entity)
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxotip=info,taxotip_cli=info,taxotip_core=info,taxotip_tagger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }

    let catalog = Catalog::load(&config.catalog)?;

    match cli.command {
        Commands::Annotate {
            target,
            view_mode,
            field,
            format,
            input,
        } => {
            let text = read_input(input.as_ref())?;
            let manager = build_manager(&config, catalog.into_store())?;

            let mut cache_tags = Vec::new();
            let result = manager.add_tooltip(
                &view_mode,
                &target.context(),
                &field,
                &FieldValue::new(text, format),
                &mut cache_tags,
            )?;

            info!(cache_tags = ?cache_tags, "Annotation finished");
            if result.is_empty() {
                warn!("No tooltip applies to this field");
                return Ok(());
            }

            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }

        Commands::Usage { vocabulary } => {
            let manager = build_manager(&config, catalog.into_store())?;
            let ids = manager.has_tooltip(&vocabulary)?;
            if ids.is_empty() {
                println!("Vocabulary '{}' is not used by any condition", vocabulary);
            } else {
                for id in ids {
                    println!("{}", id);
                }
            }
            Ok(())
        }

        Commands::Conditions { target } => {
            let problems = catalog.problems();
            let store = catalog.into_store();
            let conditions = store.conditions();
            let context = target.context();
            let applicable = select_applicable(&context, conditions);

            for condition in conditions {
                let applies = applicable.iter().any(|c| c.id == condition.id);
                println!(
                    "{:>6}  {:<24} applies={:<5} vocabularies={}",
                    condition.weight,
                    condition.id,
                    applies,
                    condition.vocabularies.join(",")
                );
                for (_, problem) in problems.iter().filter(|(id, _)| *id == condition.id) {
                    println!("        ! {}", problem);
                }
            }
            Ok(())
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
