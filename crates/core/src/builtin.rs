//! The built-in template set.
//!
//! Constant for the lifetime of the process. Ids and category positions are
//! stable across releases because favorites reference them.

use crate::template::{Category, Template, TemplateId};

fn category(id: i64, name: &str, subheader: Option<&str>, position: i64) -> Category {
    Category {
        id,
        name: Some(name.to_string()),
        subheader: subheader.map(str::to_string),
        position: Some(position),
    }
}

fn research() -> Category {
    category(1, "Research", Some("Gather material before you write"), 1)
}

fn drafting() -> Category {
    category(2, "Drafting", Some("Get words on the page"), 2)
}

fn editing() -> Category {
    category(3, "Editing", Some("Reshape what you already have"), 3)
}

fn proofing() -> Category {
    category(4, "Proofing", None, 4)
}

fn builtin(
    id: u64,
    name: &str,
    short_description: &str,
    prompt: &str,
    has_focus_text: bool,
    icon: &str,
    category: Category,
) -> Template {
    Template {
        id: TemplateId::BuiltIn(id),
        name: Some(name.to_string()),
        prompt: Some(prompt.to_string()),
        short_description: Some(short_description.to_string()),
        has_focus_text,
        icon: Some(icon.to_string()),
        category: Some(category),
    }
}

/// All built-in templates, grouped by category in display order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        builtin(
            101,
            "Find open questions",
            "List what the text claims but does not support",
            "Read {{document}} and list every claim that needs a source, a number, or an example. \
             For each one, say what kind of evidence would settle it.",
            false,
            "search",
            research(),
        ),
        builtin(
            102,
            "Counterarguments",
            "Steelman the other side",
            "Give the three strongest objections a well-informed critic would raise against \
             the argument in this text. Do not rebut them.",
            false,
            "scale",
            research(),
        ),
        builtin(
            103,
            "Explain this passage",
            "Plain-language explanation of the selected part",
            "Explain {{selected}} in plain language, as if to a smart reader outside the field. \
             Use the rest of the text only as context.",
            true,
            "lightbulb",
            research(),
        ),
        builtin(
            201,
            "Outline",
            "Turn notes into a structured outline",
            "Turn these notes into a hierarchical outline with at most three levels. \
             Keep my wording where possible and flag gaps with [TODO].",
            false,
            "list-tree",
            drafting(),
        ),
        builtin(
            202,
            "Continue writing",
            "Draft the next paragraph in the same voice",
            "Write the next paragraph after {{paragraph}}. Match my voice, sentence length, \
             and vocabulary. Do not summarize what came before.",
            true,
            "pen-line",
            drafting(),
        ),
        builtin(
            203,
            "Headline options",
            "Ten titles for the piece",
            "Suggest ten titles for this text: three plain, three curious, \
             and four that a newsletter editor would pick.",
            false,
            "heading",
            drafting(),
        ),
        builtin(
            301,
            "Tighten",
            "Cut length without losing meaning",
            "Rewrite {{selected}} to be about 30% shorter. Keep every fact and my tone.",
            true,
            "scissors",
            editing(),
        ),
        builtin(
            302,
            "Structural edit",
            "Feedback on order, flow, and pacing",
            "Act as a developmental editor. Point out where the structure of this text \
             loses the reader and propose a better order of sections.",
            false,
            "layout-list",
            editing(),
        ),
        builtin(
            303,
            "Change the tone",
            "Rewrite the selection in a different register",
            "Rewrite {{selected}} so it sounds warmer and more conversational, \
             without adding new content.",
            true,
            "palette",
            editing(),
        ),
        builtin(
            401,
            "Proofread",
            "Spelling, grammar, punctuation",
            "Proofread this text. List each error with the original, the correction, \
             and a one-line reason. Do not rewrite style.",
            false,
            "spell-check",
            proofing(),
        ),
        builtin(
            402,
            "Consistency check",
            "Names, spellings, and terms used consistently",
            "Check {{document}} for inconsistent names, capitalization, hyphenation, \
             and terminology. Report each inconsistency with every place it occurs.",
            false,
            "check-check",
            proofing(),
        ),
    ]
}
