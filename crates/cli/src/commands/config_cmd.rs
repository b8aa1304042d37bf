//! `promptgrab config` — Settings management commands.

use super::Workspace;
use promptgrab_config::Settings;
use std::path::Path;

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::load()
        .await
        .map_err(|e| format!("Failed to load settings: {e}"))?;
    let toml_str = toml::to_string_pretty(&ws.settings)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", Settings::settings_path().display());
    Ok(())
}

pub async fn import(path: &Path, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let mut outcome = Settings::from_plugin_json(&json)?;
    let pruned = outcome.settings.prune_favorites();

    println!("{}", summarize(&outcome.settings));
    if outcome.migrated {
        println!("   Migrated hideBuiltInTemplates");
    }
    if pruned > 0 {
        println!("   Dropped {pruned} dangling favorite(s)");
    }

    if dry_run {
        println!("\nDry run: nothing saved.");
        return Ok(());
    }

    outcome.settings.save().await?;
    println!("\nSaved to {}", Settings::settings_path().display());
    Ok(())
}

pub async fn builtins(enabled: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    ws.settings.show_built_in_templates = enabled;
    ws.commit().await?;
    println!(
        "Built-in templates {} ({} templates in catalog)",
        if enabled { "shown" } else { "hidden" },
        ws.catalog.len()
    );
    Ok(())
}

fn summarize(settings: &Settings) -> String {
    format!(
        "   User templates:  {}\n   Favorites:       {}\n   Built-ins:       {}\n   My templates:    {}",
        settings.user_templates.len(),
        settings.favorites.len(),
        if settings.show_built_in_templates { "shown" } else { "hidden" },
        if settings.enable_my_templates { "enabled" } else { "disabled" },
    )
}
