//! `promptgrab favorite | collapse` — Sidebar state.

use super::Workspace;
use promptgrab_core::TemplateId;

pub async fn toggle(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    let id = TemplateId::from(id);

    // Unknown ids may still be un-favorited so stale entries can be cleared.
    if !ws.settings.is_favorite(&id) {
        ws.catalog.require(&id)?;
    }

    let now = ws.settings.toggle_favorite(&id);
    ws.commit().await?;
    if now {
        println!("★ Added {id} to favorites");
    } else {
        println!("☆ Removed {id} from favorites");
    }
    Ok(())
}

pub async fn collapse(key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::load().await?;
    let collapsed = ws.settings.toggle_collapsed(key);
    ws.commit().await?;
    println!(
        "{} {key}",
        if collapsed { "Collapsed" } else { "Expanded" }
    );
    Ok(())
}
