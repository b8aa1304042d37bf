//! Sidebar view model.
//!
//! Derives the sections a browsing surface shows from the catalog, the
//! grouped catalog, the user's favorites and collapsed sections, a filter,
//! and the live selection. Rendering is left to the caller.

use crate::filter::{is_eligible, matches_query};
use promptgrab_core::{Template, TemplateGroup, TemplateId, USER_TEMPLATE_CATEGORY_NAME};
use serde::Serialize;

/// Section key of the favorites section.
pub const FAVORITES_KEY: &str = "favorites";

/// Section key of the user template section.
pub const MY_TEMPLATES_KEY: &str = "my-templates";

/// Section key of a built-in category.
pub fn category_key(category_id: i64) -> String {
    format!("cat-{category_id}")
}

/// User state that shapes the sidebar.
#[derive(Debug, Clone, Copy)]
pub struct SectionOptions<'a> {
    pub favorites: &'a [TemplateId],
    pub collapsed: &'a [String],
    pub show_my_templates: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Favorites,
    MyTemplates,
    Category,
}

/// One row in a section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionItem {
    pub template: Template,
    /// False when the template needs a selection and there is none.
    pub eligible: bool,
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub key: String,
    pub kind: SectionKind,
    pub title: String,
    pub subheader: Option<String>,
    pub collapsed: bool,
    /// Empty when collapsed.
    pub items: Vec<SectionItem>,
}

/// Build the sidebar sections: favorites, then "My templates", then every
/// built-in category group that has a match.
///
/// `lowercased_filter` follows the same contract as [`matches_query`]. While
/// a filter is active no section is collapsed.
pub fn build_sections(
    catalog: &[Template],
    groups: &[TemplateGroup],
    options: SectionOptions<'_>,
    lowercased_filter: &str,
    selection: &str,
) -> Vec<Section> {
    let filtering = !lowercased_filter.is_empty();
    let is_collapsed = |key: &str| !filtering && options.collapsed.iter().any(|k| k == key);
    let item = |t: &Template| SectionItem {
        template: t.clone(),
        eligible: is_eligible(t, selection),
        favorite: options.favorites.contains(&t.id),
    };
    let section = |key: String,
                   kind: SectionKind,
                   title: String,
                   subheader: Option<String>,
                   matching: Vec<&Template>| {
        let collapsed = is_collapsed(&key);
        Section {
            items: if collapsed {
                Vec::new()
            } else {
                matching.into_iter().map(&item).collect()
            },
            key,
            kind,
            title,
            subheader,
            collapsed,
        }
    };

    let mut sections = Vec::new();

    let favorites: Vec<&Template> = catalog
        .iter()
        .filter(|t| options.favorites.contains(&t.id) && matches_query(t, lowercased_filter))
        .collect();
    if !favorites.is_empty() {
        sections.push(section(
            FAVORITES_KEY.into(),
            SectionKind::Favorites,
            "Favorites".into(),
            None,
            favorites,
        ));
    }

    if options.show_my_templates {
        let mine: Vec<&Template> = groups
            .iter()
            .find(|g| g.category.is_user_category())
            .map(|g| {
                g.templates
                    .iter()
                    .filter(|t| matches_query(t, lowercased_filter))
                    .collect()
            })
            .unwrap_or_default();
        // Shown empty so there is somewhere to create the first template.
        if !(mine.is_empty() && filtering) {
            sections.push(section(
                MY_TEMPLATES_KEY.into(),
                SectionKind::MyTemplates,
                USER_TEMPLATE_CATEGORY_NAME.into(),
                None,
                mine,
            ));
        }
    }

    for group in groups.iter().filter(|g| !g.category.is_user_category()) {
        let matching: Vec<&Template> = group
            .templates
            .iter()
            .filter(|t| matches_query(t, lowercased_filter))
            .collect();
        if matching.is_empty() {
            continue;
        }
        sections.push(section(
            category_key(group.category.id),
            SectionKind::Category,
            group.category.name.clone().unwrap_or_default(),
            group.category.subheader.clone(),
            matching,
        ));
    }

    sections
}

/// Section keys to collapse on first use: favorites and every built-in group
/// after the first one.
pub fn default_collapsed_keys(groups: &[TemplateGroup]) -> Vec<String> {
    let mut keys = vec![FAVORITES_KEY.to_string()];
    keys.extend(
        groups
            .iter()
            .filter(|g| !g.category.is_user_category())
            .skip(1)
            .map(|g| category_key(g.category.id)),
    );
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_catalog, group_by_category};
    use promptgrab_core::{Category, UserTemplate};

    fn cat(id: i64, name: &str, position: i64) -> Category {
        Category {
            id,
            name: Some(name.into()),
            subheader: Some(format!("{name} tools")),
            position: Some(position),
        }
    }

    fn tpl(id: u64, name: &str, focus: bool, category: Category) -> Template {
        Template {
            id: TemplateId::BuiltIn(id),
            name: Some(name.into()),
            prompt: Some("Go.".into()),
            short_description: None,
            has_focus_text: focus,
            icon: None,
            category: Some(category),
        }
    }

    fn fixture() -> (Vec<Template>, Vec<TemplateGroup>) {
        let built_in = vec![
            tpl(1, "Outline", false, cat(1, "Drafting", 1)),
            tpl(2, "Tighten", true, cat(2, "Editing", 2)),
            tpl(3, "Proofread", false, cat(3, "Proofing", 3)),
        ];
        let users = vec![UserTemplate {
            id: "u1".into(),
            name: "My outline".into(),
            prompt: "Outline it my way.".into(),
            short_description: String::new(),
            has_focus_text: false,
        }];
        let catalog = build_catalog(&built_in, &users, true);
        let groups = group_by_category(&catalog);
        (catalog, groups)
    }

    fn options<'a>(favorites: &'a [TemplateId], collapsed: &'a [String]) -> SectionOptions<'a> {
        SectionOptions {
            favorites,
            collapsed,
            show_my_templates: true,
        }
    }

    #[test]
    fn full_listing_order() {
        let (catalog, groups) = fixture();
        let favs = vec![TemplateId::BuiltIn(3)];
        let sections = build_sections(&catalog, &groups, options(&favs, &[]), "", "");
        let keys: Vec<_> = sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["favorites", "my-templates", "cat-1", "cat-2", "cat-3"]);
        assert_eq!(sections[0].items[0].template.id, TemplateId::BuiltIn(3));
        assert!(sections[0].items[0].favorite);
        assert_eq!(sections[2].subheader.as_deref(), Some("Drafting tools"));
    }

    #[test]
    fn favorites_omitted_when_empty() {
        let (catalog, groups) = fixture();
        let sections = build_sections(&catalog, &groups, options(&[], &[]), "", "");
        assert_ne!(sections[0].kind, SectionKind::Favorites);
    }

    #[test]
    fn filter_hides_non_matching_sections() {
        let (catalog, groups) = fixture();
        let sections = build_sections(&catalog, &groups, options(&[], &[]), "outline", "");
        let keys: Vec<_> = sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["my-templates", "cat-1"]);

        let none = build_sections(&catalog, &groups, options(&[], &[]), "zzz", "");
        assert!(none.is_empty());
    }

    #[test]
    fn my_templates_shown_empty_without_filter() {
        let built_in = vec![tpl(1, "Outline", false, cat(1, "Drafting", 1))];
        let catalog = build_catalog(&built_in, &[], true);
        let groups = group_by_category(&catalog);
        let sections = build_sections(&catalog, &groups, options(&[], &[]), "", "");
        assert_eq!(sections[0].kind, SectionKind::MyTemplates);
        assert!(sections[0].items.is_empty());
    }

    #[test]
    fn my_templates_can_be_disabled() {
        let (catalog, groups) = fixture();
        let opts = SectionOptions {
            show_my_templates: false,
            ..options(&[], &[])
        };
        let sections = build_sections(&catalog, &groups, opts, "", "");
        assert!(sections.iter().all(|s| s.kind != SectionKind::MyTemplates));
    }

    #[test]
    fn collapsed_sections_have_no_items_unless_filtering() {
        let (catalog, groups) = fixture();
        let collapsed = vec!["cat-2".to_string()];
        let sections = build_sections(&catalog, &groups, options(&[], &collapsed), "", "");
        let editing = sections.iter().find(|s| s.key == "cat-2").unwrap();
        assert!(editing.collapsed);
        assert!(editing.items.is_empty());

        let filtered = build_sections(&catalog, &groups, options(&[], &collapsed), "tight", "");
        let editing = filtered.iter().find(|s| s.key == "cat-2").unwrap();
        assert!(!editing.collapsed);
        assert_eq!(editing.items.len(), 1);
    }

    #[test]
    fn items_carry_eligibility() {
        let (catalog, groups) = fixture();
        let without = build_sections(&catalog, &groups, options(&[], &[]), "tight", "  ");
        assert!(!without[0].items[0].eligible);
        let with = build_sections(&catalog, &groups, options(&[], &[]), "tight", "some text");
        assert!(with[0].items[0].eligible);
    }

    #[test]
    fn default_collapse_skips_first_builtin_group() {
        let (_, groups) = fixture();
        assert_eq!(
            default_collapsed_keys(&groups),
            vec!["favorites", "cat-2", "cat-3"]
        );
    }
}
