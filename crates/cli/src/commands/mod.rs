//! Subcommand implementations and the state they share.

pub mod browse;
pub mod config_cmd;
pub mod copy;
pub mod favorite;
pub mod template;

use crate::SelectionArgs;
use promptgrab_catalog::Catalog;
use promptgrab_config::Settings;
use promptgrab_core::builtin_templates;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Settings plus the catalog derived from them.
pub struct Workspace {
    pub settings: Settings,
    pub catalog: Catalog,
    path: PathBuf,
}

impl Workspace {
    /// Load settings from the default path, persisting any legacy migration.
    pub async fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(&Settings::settings_path()).await
    }

    pub async fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let outcome = Settings::load_from(path)?;
        if outcome.migrated {
            outcome.settings.save_to(path).await?;
        }
        let catalog = catalog_for(&outcome.settings);
        Ok(Self {
            settings: outcome.settings,
            catalog,
            path: path.to_path_buf(),
        })
    }

    /// Save settings and rebuild the catalog from them.
    pub async fn commit(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.settings.save_to(&self.path).await?;
        self.catalog.rebuild(
            &self.settings.user_templates,
            self.settings.show_built_in_templates,
        );
        Ok(())
    }
}

/// Build the catalog a set of settings describes.
pub fn catalog_for(settings: &Settings) -> Catalog {
    Catalog::new(
        builtin_templates(),
        &settings.user_templates,
        settings.show_built_in_templates,
    )
}

/// Read a document path, `-` meaning stdin.
pub fn read_document(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read document {}: {e}", path.display()).into())
}

/// Resolve the selection text; empty when none was given.
pub fn read_selection(args: &SelectionArgs) -> Result<String, Box<dyn std::error::Error>> {
    match (&args.selection, &args.selection_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read selection {}: {e}", path.display()).into()),
        (None, None) => Ok(String::new()),
    }
}
