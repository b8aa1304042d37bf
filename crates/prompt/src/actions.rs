//! Copy actions: read the live editor state, assemble, hand off to a sink.
//!
//! Selection state can change between the moment a template was shown as
//! enabled and the moment it is invoked, so every action reads the editor
//! again and re-checks eligibility before assembling.

use crate::assemble::{
    assemble_quick_prompt, assemble_selection_focused_prompt, assemble_template_prompt,
};
use crate::{CopyError, SinkError};
use async_trait::async_trait;
use promptgrab_catalog::is_eligible;
use promptgrab_core::Template;
use std::sync::Mutex;
use tracing::{debug, info};

/// Read access to the host editor's active document.
pub trait EditorContext: Send + Sync {
    /// Full text of the active document.
    fn document(&self) -> String;

    /// Current selection; empty when nothing is selected.
    fn selection(&self) -> String;
}

/// Where assembled prompts go (system clipboard, stdout, a file...).
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    fn name(&self) -> &str;

    async fn write_text(&self, text: &str) -> Result<(), SinkError>;
}

/// Fixed document and selection; useful for tests and one-shot callers.
#[derive(Debug, Clone, Default)]
pub struct StaticEditor {
    pub document: String,
    pub selection: String,
}

impl StaticEditor {
    pub fn new(document: impl Into<String>, selection: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            selection: selection.into(),
        }
    }
}

impl EditorContext for StaticEditor {
    fn document(&self) -> String {
        self.document.clone()
    }

    fn selection(&self) -> String {
        self.selection.clone()
    }
}

/// Sink that records every write in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// The most recent write.
    pub fn last(&self) -> Option<String> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }
}

#[async_trait]
impl ClipboardSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        self.writes
            .lock()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

/// Copy a template's prompt.
///
/// Fails with [`CopyError::SelectionRequired`] when the template needs focus
/// text and the selection is blank at the moment of the call.
pub async fn copy_template(
    template: &Template,
    editor: &dyn EditorContext,
    sink: &dyn ClipboardSink,
) -> Result<String, CopyError> {
    let selection = editor.selection();
    if !is_eligible(template, &selection) {
        debug!(template = %template.id, "Copy refused: selection required");
        return Err(CopyError::SelectionRequired);
    }
    let assembled = assemble_template_prompt(template, &editor.document(), &selection);
    sink.write_text(&assembled).await?;
    info!(
        template = %template.id,
        sink = sink.name(),
        chars = assembled.len(),
        "Template prompt copied"
    );
    Ok(assembled)
}

/// Copy an ad-hoc instruction together with the full document.
pub async fn copy_quick_prompt(
    user_input: &str,
    editor: &dyn EditorContext,
    sink: &dyn ClipboardSink,
) -> Result<String, CopyError> {
    let input = user_input.trim();
    if input.is_empty() {
        return Err(CopyError::EmptyInput);
    }
    let assembled = assemble_quick_prompt(&editor.document(), input);
    sink.write_text(&assembled).await?;
    info!(sink = sink.name(), chars = assembled.len(), "Quick prompt copied");
    Ok(assembled)
}

/// Copy an ad-hoc instruction anchored to the current selection.
pub async fn copy_selection_prompt(
    user_input: &str,
    editor: &dyn EditorContext,
    sink: &dyn ClipboardSink,
) -> Result<String, CopyError> {
    let input = user_input.trim();
    if input.is_empty() {
        return Err(CopyError::EmptyInput);
    }
    let selection = editor.selection();
    if selection.trim().is_empty() {
        return Err(CopyError::SelectionRequired);
    }
    let assembled = assemble_selection_focused_prompt(&editor.document(), &selection, input);
    sink.write_text(&assembled).await?;
    info!(
        sink = sink.name(),
        chars = assembled.len(),
        "Selection prompt copied"
    );
    Ok(assembled)
}
