//! Prompt assembly for promptgrab.
//!
//! The assemblers in [`assemble`] are deterministic string builders. The
//! copy actions in [`actions`] sit one level up: they read the live editor
//! state through [`EditorContext`], re-check eligibility, and hand the
//! result to a [`ClipboardSink`].

pub mod actions;
pub mod assemble;
pub mod placeholders;

pub use actions::{
    ClipboardSink, EditorContext, MemorySink, StaticEditor, copy_quick_prompt,
    copy_selection_prompt, copy_template,
};
pub use assemble::{
    assemble_quick_prompt, assemble_selection_focused_prompt, assemble_template_prompt,
};
pub use placeholders::{Placeholder, Segment, placeholders_in, segment};

/// Errors from a clipboard sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("clipboard write rejected: {0}")]
    Rejected(String),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a copy action did not produce a prompt.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("Select text in your editor first — this template needs a selection")]
    SelectionRequired,

    #[error("Type a prompt first")]
    EmptyInput,

    #[error(transparent)]
    Sink(#[from] SinkError),
}
