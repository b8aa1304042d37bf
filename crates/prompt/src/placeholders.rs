//! Placeholder tokens in template prompts.
//!
//! Prompts may contain `{{selected}}`, `{{paragraph}}` and `{{document}}`.
//! They are hints for the reader only: assembly never substitutes them. This
//! module splits prompt text so a presentation layer can render the tokens
//! as badges.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    Selected,
    Paragraph,
    Document,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "selected" => Some(Self::Selected),
            "paragraph" => Some(Self::Paragraph),
            "document" => Some(Self::Document),
            _ => None,
        }
    }

    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Selected => "selected text",
            Self::Paragraph => "paragraph",
            Self::Document => "document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(Placeholder),
}

/// Split prompt text into literal runs and known placeholder tokens.
///
/// Unknown or unterminated `{{...}}` sequences stay literal text.
pub fn segment(prompt: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(open) = prompt[cursor..].find("{{") {
        let open = cursor + open;
        let Some(close) = prompt[open + 2..].find("}}") else {
            break;
        };
        let close = open + 2 + close;
        match Placeholder::from_name(&prompt[open + 2..close]) {
            Some(placeholder) => {
                if open > text_start {
                    segments.push(Segment::Text(&prompt[text_start..open]));
                }
                segments.push(Segment::Placeholder(placeholder));
                text_start = close + 2;
                cursor = text_start;
            }
            None => cursor = open + 2,
        }
    }

    if text_start < prompt.len() {
        segments.push(Segment::Text(&prompt[text_start..]));
    }
    segments
}

/// Distinct placeholders used by a prompt, in first-use order.
pub fn placeholders_in(prompt: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    for seg in segment(prompt) {
        if let Segment::Placeholder(p) = seg {
            if !found.contains(&p) {
                found.push(p);
            }
        }
    }
    found
}
