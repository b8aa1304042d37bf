//! Prompt assembly.
//!
//! Output layout:
//!
//! ```text
//! MY TEXT:
//! ===
//! <document>
//! ===
//!
//! FOCUS ON THIS PART:        (only when a selection is included)
//! ===
//! <selection>
//! ===
//!
//! <template prompt or user instruction>
//! ```
//!
//! Content is inserted raw. A `===` line inside the document or selection is
//! not escaped, and placeholder tokens such as `{{selected}}` in the prompt
//! are passed through untouched.

use promptgrab_core::Template;

pub const DOCUMENT_HEADER: &str = "MY TEXT:";
pub const SELECTION_HEADER: &str = "FOCUS ON THIS PART:";
pub const FENCE: &str = "===";

fn push_fenced(out: &mut String, header: &str, body: &str) {
    out.push_str(header);
    out.push('\n');
    out.push_str(FENCE);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(FENCE);
    out.push_str("\n\n");
}

/// Assemble the prompt for a template.
///
/// The selection block is included only when the template needs focus text
/// and the selection is non-blank. Eligibility is not checked here; see
/// [`promptgrab_catalog::is_eligible`].
pub fn assemble_template_prompt(template: &Template, document: &str, selection: &str) -> String {
    let prompt = template.prompt_or_empty();
    let mut out = String::with_capacity(document.len() + selection.len() + prompt.len() + 64);
    push_fenced(&mut out, DOCUMENT_HEADER, document);
    if template.has_focus_text && !selection.trim().is_empty() {
        push_fenced(&mut out, SELECTION_HEADER, selection);
    }
    out.push_str(prompt);
    out
}

/// Document followed by a free-form instruction, no template involved.
pub fn assemble_quick_prompt(document: &str, user_input: &str) -> String {
    let mut out = String::with_capacity(document.len() + user_input.len() + 32);
    push_fenced(&mut out, DOCUMENT_HEADER, document);
    out.push_str(user_input);
    out
}

/// Document, the selection it is anchored to, then a free-form instruction.
pub fn assemble_selection_focused_prompt(
    document: &str,
    selected_text: &str,
    user_input: &str,
) -> String {
    let mut out =
        String::with_capacity(document.len() + selected_text.len() + user_input.len() + 64);
    push_fenced(&mut out, DOCUMENT_HEADER, document);
    push_fenced(&mut out, SELECTION_HEADER, selected_text);
    out.push_str(user_input);
    out
}
