//! Settings loading, persistence, and mutation for promptgrab.
//!
//! Settings live in `~/.promptgrab/settings.toml` (or `$PROMPTGRAB_HOME`).
//! A missing file means defaults. The store owns the user's templates and
//! favorites; the catalog reads them and never writes back.

use promptgrab_catalog::sections::default_collapsed_keys;
use promptgrab_core::{TemplateGroup, TemplateId, UserTemplate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

mod legacy;

pub use legacy::LoadOutcome;

/// Persisted user settings.
///
/// Maps directly to `settings.toml`. Field aliases accept the camelCase keys
/// of the editor plugin's `data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Favorited template ids, built-in (integer) or user (string).
    #[serde(default)]
    pub favorites: Vec<TemplateId>,

    /// Whether the built-in template set is part of the catalog.
    #[serde(default = "default_true", alias = "showBuiltInTemplates")]
    pub show_built_in_templates: bool,

    /// Whether the "My templates" section is shown.
    #[serde(default = "default_true", alias = "enableMyTemplates")]
    pub enable_my_templates: bool,

    /// Keys of collapsed sidebar sections.
    #[serde(default, alias = "collapsedCategories")]
    pub collapsed_categories: Vec<String>,

    /// User-authored templates.
    #[serde(default, alias = "userTemplates")]
    pub user_templates: Vec<UserTemplate>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            favorites: Vec::new(),
            show_built_in_templates: true,
            enable_my_templates: true,
            collapsed_categories: Vec::new(),
            user_templates: Vec::new(),
        }
    }
}

/// Partial update for a user template; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserTemplatePatch {
    pub name: Option<String>,
    pub prompt: Option<String>,
    pub short_description: Option<String>,
    pub has_focus_text: Option<bool>,
}

impl Settings {
    /// Load settings from a specific file, applying legacy migrations.
    ///
    /// A missing file yields defaults. The outcome reports whether a
    /// migration changed anything so the caller can persist it.
    pub fn load_from(path: &Path) -> Result<LoadOutcome, SettingsError> {
        if !path.exists() {
            info!("No settings file found at {}, using defaults", path.display());
            return Ok(LoadOutcome {
                settings: Self::default(),
                migrated: false,
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let outcome = legacy::parse_toml(&content).map_err(|e| SettingsError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if outcome.migrated {
            info!(path = %path.display(), "Migrated legacy settings");
        }

        outcome.settings.validate()?;
        Ok(outcome)
    }

    /// Import settings from the editor plugin's `data.json`.
    pub fn from_plugin_json(json: &str) -> Result<LoadOutcome, SettingsError> {
        let outcome = legacy::parse_json(json).map_err(|e| SettingsError::ParseError {
            path: PathBuf::from("data.json"),
            reason: e.to_string(),
        })?;
        outcome.settings.validate()?;
        Ok(outcome)
    }

    /// Write settings to the default path.
    pub async fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::settings_path()).await
    }

    /// Write settings as pretty TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |e: &dyn std::fmt::Display| SettingsError::WriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let content = toml::to_string_pretty(self).map_err(|e| write_err(&e))?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| write_err(&e))?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| write_err(&e))?;
        info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// Configuration directory: `$PROMPTGRAB_HOME` or `~/.promptgrab`.
    pub fn config_dir() -> PathBuf {
        match std::env::var("PROMPTGRAB_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs_home().join(".promptgrab"),
        }
    }

    /// Path of the settings file.
    pub fn settings_path() -> PathBuf {
        Self::config_dir().join("settings.toml")
    }

    /// Default settings as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }

    /// Reject empty or duplicate user template ids.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut seen = std::collections::HashSet::new();
        for t in &self.user_templates {
            if t.id.trim().is_empty() {
                return Err(SettingsError::ValidationError(format!(
                    "user template '{}' has an empty id",
                    t.name
                )));
            }
            if !seen.insert(t.id.as_str()) {
                return Err(SettingsError::DuplicateTemplateId(t.id.clone()));
            }
        }
        Ok(())
    }

    // ── User templates ─────────────────────────────────────────────

    /// Build a new user template with a fresh id, trimming every field.
    pub fn new_user_template(
        name: &str,
        prompt: &str,
        short_description: &str,
        has_focus_text: bool,
    ) -> UserTemplate {
        UserTemplate {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            prompt: prompt.trim().to_string(),
            short_description: short_description.trim().to_string(),
            has_focus_text,
        }
    }

    pub fn user_template(&self, id: &str) -> Option<&UserTemplate> {
        self.user_templates.iter().find(|t| t.id == id)
    }

    /// Add a user template. Ids must be unique; name and prompt are required.
    pub fn add_user_template(&mut self, template: UserTemplate) -> Result<(), SettingsError> {
        template.validate()?;
        if self.user_template(&template.id).is_some() {
            return Err(SettingsError::DuplicateTemplateId(template.id));
        }
        debug!(id = %template.id, "User template added");
        self.user_templates.push(template);
        Ok(())
    }

    /// Apply a patch in place. Returns `false` when no template has this id.
    ///
    /// The patched template must still have a name and prompt; otherwise it
    /// is left unchanged and an error is returned.
    pub fn update_user_template(
        &mut self,
        id: &str,
        patch: UserTemplatePatch,
    ) -> Result<bool, SettingsError> {
        let Some(existing) = self.user_templates.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        let mut updated = existing.clone();
        if let Some(name) = patch.name {
            updated.name = name.trim().to_string();
        }
        if let Some(prompt) = patch.prompt {
            updated.prompt = prompt.trim().to_string();
        }
        if let Some(desc) = patch.short_description {
            updated.short_description = desc.trim().to_string();
        }
        if let Some(focus) = patch.has_focus_text {
            updated.has_focus_text = focus;
        }
        updated.validate()?;
        *existing = updated;
        debug!(%id, "User template updated");
        Ok(true)
    }

    /// Delete a user template and any favorite that points at it.
    ///
    /// Returns `false` (and changes nothing) when the id is unknown.
    pub fn delete_user_template(&mut self, id: &str) -> bool {
        let before = self.user_templates.len();
        self.user_templates.retain(|t| t.id != id);
        if self.user_templates.len() == before {
            return false;
        }
        self.favorites.retain(|f| f.as_user() != Some(id));
        debug!(%id, "User template deleted");
        true
    }

    /// Resolve a catalog id to an editable user template id.
    pub fn editable_id<'a>(&self, id: &'a TemplateId) -> Result<&'a str, SettingsError> {
        match id {
            TemplateId::User(user_id) => Ok(user_id),
            TemplateId::BuiltIn(_) => {
                Err(promptgrab_core::Error::NotEditable(id.to_string()).into())
            }
        }
    }

    // ── Favorites ──────────────────────────────────────────────────

    pub fn is_favorite(&self, id: &TemplateId) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle a favorite. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &TemplateId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id.clone());
            true
        }
    }

    /// Drop favorites that no longer resolve to a user template.
    ///
    /// Built-in ids are kept even when built-ins are hidden.
    pub fn prune_favorites(&mut self) -> usize {
        let before = self.favorites.len();
        let user_templates = &self.user_templates;
        self.favorites.retain(|f| match f {
            TemplateId::BuiltIn(_) => true,
            TemplateId::User(id) => user_templates.iter().any(|t| &t.id == id),
        });
        let pruned = before - self.favorites.len();
        if pruned > 0 {
            warn!(pruned, "Removed dangling favorites");
        }
        pruned
    }

    // ── Collapsed sections ─────────────────────────────────────────

    /// Toggle a collapsed section key. Returns the new collapsed state.
    pub fn toggle_collapsed(&mut self, key: &str) -> bool {
        if let Some(pos) = self.collapsed_categories.iter().position(|k| k == key) {
            self.collapsed_categories.remove(pos);
            false
        } else {
            self.collapsed_categories.push(key.to_string());
            true
        }
    }

    /// On first use (no collapsed state saved yet), collapse favorites and
    /// every built-in group after the first. Returns `true` if anything
    /// changed and should be saved.
    pub fn init_collapsed_sections(&mut self, groups: &[TemplateGroup]) -> bool {
        if !self.collapsed_categories.is_empty() {
            return false;
        }
        self.collapsed_categories = default_collapsed_keys(groups);
        debug!(keys = self.collapsed_categories.len(), "Initialised collapsed sections");
        true
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse settings file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Failed to write settings file at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("Settings validation failed: {0}")]
    ValidationError(String),

    #[error("Duplicate user template id: {0}")]
    DuplicateTemplateId(String),

    #[error(transparent)]
    Template(#[from] promptgrab_core::Error),
}
