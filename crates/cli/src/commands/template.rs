//! `promptgrab template` — Manage user templates.

use super::Workspace;
use promptgrab_config::{Settings, UserTemplatePatch};
use promptgrab_core::TemplateId;
use std::io::Write;

pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::load().await?;
    let templates = &ws.settings.user_templates;

    if templates.is_empty() {
        println!("No templates yet.");
        println!("\nCreate one:");
        println!("  promptgrab template new --name \"Tighten\" --prompt \"Make this shorter.\" --requires-selection");
        return Ok(());
    }

    println!("My templates ({}):\n", templates.len());
    for (i, t) in templates.iter().enumerate() {
        let focus = if t.has_focus_text { " [needs selection]" } else { "" };
        println!("  {}. {}{}", i + 1, t.name, focus);
        println!("     id: {}", t.id);
        if !t.short_description.is_empty() {
            println!("     {}", t.short_description);
        }
    }
    Ok(())
}

pub async fn create(
    name: &str,
    prompt: &str,
    description: &str,
    requires_selection: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    let template = Settings::new_user_template(name, prompt, description, requires_selection);
    let id = template.id.clone();
    ws.settings.add_user_template(template)?;
    ws.commit().await?;
    println!("Created template {id}");
    Ok(())
}

pub async fn edit(
    id: &str,
    name: Option<String>,
    prompt: Option<String>,
    description: Option<String>,
    requires_selection: Option<bool>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    let template_id = TemplateId::from(id);
    let user_id = ws.settings.editable_id(&template_id)?;

    let patch = UserTemplatePatch {
        name,
        prompt,
        short_description: description,
        has_focus_text: requires_selection,
    };
    if !ws.settings.update_user_template(user_id, patch)? {
        return Err(promptgrab_core::Error::TemplateNotFound(id.to_string()).into());
    }
    ws.commit().await?;
    println!("Updated template {id}");
    Ok(())
}

pub async fn delete(id: &str, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    let template_id = TemplateId::from(id);
    let user_id = ws.settings.editable_id(&template_id)?;

    let Some(existing) = ws.settings.user_template(user_id) else {
        println!("No template with id {id}; nothing deleted.");
        return Ok(());
    };

    if !yes && !confirm(&format!("Delete \"{}\"?", existing.name))? {
        println!("Cancelled.");
        return Ok(());
    }

    ws.settings.delete_user_template(user_id);
    ws.commit().await?;
    println!("Deleted template {id}");
    Ok(())
}

fn confirm(question: &str) -> std::io::Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
