//! `promptgrab copy | quick | focus` — Assemble prompts.

use super::{Workspace, read_document, read_selection};
use crate::{IoArgs, SelectionArgs, sink};
use promptgrab_core::TemplateId;
use promptgrab_prompt::{StaticEditor, copy_quick_prompt, copy_selection_prompt, copy_template};

pub async fn template(
    id: &str,
    io: &IoArgs,
    selection: &SelectionArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::load().await?;
    let template = ws.catalog.require(&TemplateId::from(id))?;
    let editor = StaticEditor::new(read_document(&io.document)?, read_selection(selection)?);
    let out = sink::for_output(io.output.as_ref());

    copy_template(template, &editor, &*out).await?;
    if let Some(path) = &io.output {
        eprintln!(
            "Copied \"{}\" prompt to {}",
            template.name_or_empty(),
            path.display()
        );
    }
    Ok(())
}

pub async fn quick(instruction: &str, io: &IoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let editor = StaticEditor::new(read_document(&io.document)?, String::new());
    let out = sink::for_output(io.output.as_ref());

    copy_quick_prompt(instruction, &editor, &*out).await?;
    if let Some(path) = &io.output {
        eprintln!("Prompt written to {}", path.display());
    }
    Ok(())
}

pub async fn focus(
    instruction: &str,
    io: &IoArgs,
    selection: &SelectionArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let editor = StaticEditor::new(read_document(&io.document)?, read_selection(selection)?);
    let out = sink::for_output(io.output.as_ref());

    copy_selection_prompt(instruction, &editor, &*out).await?;
    if let Some(path) = &io.output {
        eprintln!("Prompt written to {}", path.display());
    }
    Ok(())
}
