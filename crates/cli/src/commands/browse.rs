//! `promptgrab list | search | show` — Browse the catalog.

use super::{Workspace, read_selection};
use crate::SelectionArgs;
use promptgrab_catalog::{SectionOptions, build_sections, is_eligible};
use promptgrab_core::{Template, TemplateId};
use promptgrab_prompt::{Segment, placeholders_in, segment};

pub async fn list(
    filter: &str,
    selection: &SelectionArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    if ws.settings.init_collapsed_sections(ws.catalog.groups()) {
        ws.commit().await?;
    }
    let selection = read_selection(selection)?;

    let options = SectionOptions {
        favorites: &ws.settings.favorites,
        collapsed: &ws.settings.collapsed_categories,
        show_my_templates: ws.settings.enable_my_templates,
    };
    let sections = build_sections(
        ws.catalog.templates(),
        ws.catalog.groups(),
        options,
        &filter.to_lowercase(),
        &selection,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    if sections.is_empty() {
        println!("No templates match \"{filter}\".");
        return Ok(());
    }

    for section in &sections {
        let chevron = if section.collapsed { "▸" } else { "▾" };
        println!("{chevron} {}  [{}]", section.title, section.key);
        if section.collapsed {
            continue;
        }
        if let Some(sub) = &section.subheader {
            println!("    {sub}");
        }
        if section.items.is_empty() {
            println!("    (none yet — create one with `promptgrab template new`)");
        }
        for item in &section.items {
            println!(
                "  {} {:<38} {}{}",
                if item.favorite { "★" } else { "☆" },
                format!("{} ({})", item.template.name_or_empty(), item.template.id),
                item.template.description_or_empty(),
                if item.eligible { "" } else { "  [needs selection]" }
            );
        }
        println!();
    }
    Ok(())
}

pub async fn search(query: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::load().await?;
    let hits = ws.catalog.search(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("No templates match \"{query}\".");
        return Ok(());
    }
    for t in hits {
        println!("{:>8}  {}", t.id.to_string(), t.name_or_empty());
        if !t.description_or_empty().is_empty() {
            println!("          {}", t.description_or_empty());
        }
        if !t.category_name_or_empty().is_empty() {
            println!("          in {}", t.category_name_or_empty());
        }
    }
    Ok(())
}

pub async fn show(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::load().await?;
    let id = TemplateId::from(id);
    let template = ws.catalog.require(&id)?;

    let star = if ws.settings.is_favorite(&id) { "★" } else { "☆" };
    println!("{star} {}", template.name_or_empty());
    println!("  id:        {}", template.id);
    if let Some(category) = template.category.as_ref().and_then(|c| c.name.as_deref()) {
        println!("  category:  {category}");
    }
    println!(
        "  editable:  {}",
        if id.is_user_editable() { "yes" } else { "no (built in)" }
    );
    if let Some(uses) = placeholder_summary(template) {
        println!("  uses:      {uses}");
    }
    if !template.description_or_empty().is_empty() {
        println!("\n  {}", template.description_or_empty());
    }
    println!("\n{}\n", render_badges(template));

    if !is_eligible(template, "") {
        println!("Needs a selection: pass --selection or --selection-file to `copy`.");
    }
    Ok(())
}

/// Comma-separated labels of the placeholders a prompt mentions.
fn placeholder_summary(template: &Template) -> Option<String> {
    let found = placeholders_in(template.prompt_or_empty());
    if found.is_empty() {
        return None;
    }
    Some(
        found
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Prompt text with placeholder tokens shown as `[badge]`.
fn render_badges(template: &Template) -> String {
    segment(template.prompt_or_empty())
        .into_iter()
        .map(|seg| match seg {
            Segment::Text(text) => text.to_string(),
            Segment::Placeholder(p) => format!("[{}]", p.label()),
        })
        .collect()
}
