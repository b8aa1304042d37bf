//! Legacy settings migration.
//!
//! Older settings stored the inverse flag `hide_built_in_templates`
//! (`hideBuiltInTemplates` in the plugin's JSON). When a file has the old key
//! and not the new one, the new flag is derived from it and the load is
//! reported as migrated.

use crate::Settings;

/// Parsed settings plus whether a legacy key was rewritten.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub settings: Settings,
    pub migrated: bool,
}

const SHOW_KEYS: [&str; 2] = ["show_built_in_templates", "showBuiltInTemplates"];

fn migrate(settings: &mut Settings, hide: Option<bool>, has_show: bool) -> bool {
    match hide {
        Some(hide) if !has_show => {
            settings.show_built_in_templates = !hide;
            true
        }
        _ => false,
    }
}

pub(crate) fn parse_toml(content: &str) -> Result<LoadOutcome, toml::de::Error> {
    let mut table: toml::Table = toml::from_str(content)?;
    let hide = ["hide_built_in_templates", "hideBuiltInTemplates"]
        .iter()
        .filter_map(|k| table.remove(*k))
        .find_map(|v| v.as_bool());
    let has_show = SHOW_KEYS.iter().any(|k| table.contains_key(*k));

    let mut settings: Settings = toml::Value::Table(table).try_into()?;
    let migrated = migrate(&mut settings, hide, has_show);
    Ok(LoadOutcome { settings, migrated })
}

pub(crate) fn parse_json(content: &str) -> Result<LoadOutcome, serde_json::Error> {
    if content.trim() == "null" {
        return Ok(LoadOutcome {
            settings: Settings::default(),
            migrated: false,
        });
    }
    let mut map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
    let hide = ["hideBuiltInTemplates", "hide_built_in_templates"]
        .iter()
        .filter_map(|k| map.remove(*k))
        .find_map(|v| v.as_bool());
    let has_show = SHOW_KEYS.iter().any(|k| map.contains_key(*k));

    let mut settings: Settings = serde_json::from_value(serde_json::Value::Object(map))?;
    let migrated = migrate(&mut settings, hide, has_show);
    Ok(LoadOutcome { settings, migrated })
}
