//! Eligibility and filter predicates.
//!
//! Both are pure and cheap; callers may invoke them on every selection
//! change without any rate limiting on this side.

use promptgrab_core::Template;

/// Does the template match a free-text query?
///
/// `lowercased_query` must already be lowercased by the caller; this
/// function lowercases only the template side. An empty query matches
/// everything. Name, short description and category name are searched as
/// substrings; missing fields never match.
pub fn matches_query(template: &Template, lowercased_query: &str) -> bool {
    if lowercased_query.is_empty() {
        return true;
    }
    [
        template.name_or_empty(),
        template.description_or_empty(),
        template.category_name_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(lowercased_query))
}

/// Can the template be copied given the current selection?
///
/// Templates that need focus text require a selection that is non-empty
/// after trimming whitespace. Everything else is always eligible.
pub fn is_eligible(template: &Template, selection: &str) -> bool {
    !template.has_focus_text || !selection.trim().is_empty()
}

/// Filter a template list with [`matches_query`], lowercasing the raw
/// query once.
pub fn filter_templates<'a>(templates: &'a [Template], query: &str) -> Vec<&'a Template> {
    let lower = query.to_lowercase();
    templates
        .iter()
        .filter(|t| matches_query(t, &lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgrab_core::{Category, TemplateId};

    fn template(name: Option<&str>, desc: Option<&str>, category: Option<&str>) -> Template {
        Template {
            id: TemplateId::BuiltIn(1),
            name: name.map(String::from),
            prompt: None,
            short_description: desc.map(String::from),
            has_focus_text: false,
            icon: None,
            category: category.map(|n| Category {
                id: 1,
                name: Some(n.to_string()),
                subheader: None,
                position: None,
            }),
        }
    }

    fn focus(has_focus_text: bool) -> Template {
        Template {
            has_focus_text,
            ..template(Some("x"), None, None)
        }
    }

    #[test]
    fn matches_name_prefix() {
        let t = template(Some("Summarize"), None, None);
        assert!(matches_query(&t, "sum"));
        assert!(!matches_query(&t, "xyz"));
    }

    #[test]
    fn empty_query_matches_anything() {
        assert!(matches_query(&template(None, None, None), ""));
        assert!(matches_query(&template(Some("A"), Some("B"), Some("C")), ""));
    }

    #[test]
    fn matches_description_and_category() {
        let t = template(Some("Outline"), Some("Turn notes into STRUCTURE"), Some("Drafting"));
        assert!(matches_query(&t, "structure"));
        assert!(matches_query(&t, "draft"));
        assert!(!matches_query(&t, "proof"));
    }

    #[test]
    fn query_is_not_lowercased_here() {
        let t = template(Some("Summarize"), None, None);
        assert!(!matches_query(&t, "SUM"));
    }

    #[test]
    fn missing_fields_never_match() {
        let t = template(None, None, None);
        assert!(!matches_query(&t, "a"));
    }

    #[test]
    fn eligibility() {
        assert!(!is_eligible(&focus(true), "  "));
        assert!(!is_eligible(&focus(true), ""));
        assert!(!is_eligible(&focus(true), "\n\t"));
        assert!(is_eligible(&focus(true), "x"));
        assert!(is_eligible(&focus(false), ""));
    }

    #[test]
    fn filter_lowercases_raw_query_once() {
        let list = vec![
            template(Some("Proofread"), None, None),
            template(Some("Outline"), None, None),
        ];
        let hits = filter_templates(&list, "PROOF");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_deref(), Some("Proofread"));
        assert_eq!(filter_templates(&list, "").len(), 2);
    }
}
