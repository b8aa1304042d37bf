//! Catalog builder: merge built-in and user templates, group by category.

use promptgrab_core::{Template, TemplateGroup, UserTemplate, to_catalog_entry};
use std::collections::HashMap;
use tracing::debug;

/// Merge user templates and (optionally) the built-in set into one list.
///
/// Converted user templates come first, followed by the built-ins in their
/// given order. No deduplication is performed.
pub fn build_catalog(
    built_in: &[Template],
    user_templates: &[UserTemplate],
    include_built_in: bool,
) -> Vec<Template> {
    let mut catalog: Vec<Template> = user_templates.iter().map(to_catalog_entry).collect();
    if include_built_in {
        catalog.extend_from_slice(built_in);
    }
    debug!(
        user = user_templates.len(),
        built_in = if include_built_in { built_in.len() } else { 0 },
        "Catalog built"
    );
    catalog
}

/// Partition templates into one group per distinct category id.
///
/// Templates without a category are skipped. Groups are created in
/// first-seen order, templates keep their relative order within a group, and
/// the result is stably sorted by category position (missing = 0).
///
/// The first template seen for a category id supplies the group's
/// `Category` value.
pub fn group_by_category(templates: &[Template]) -> Vec<TemplateGroup> {
    let mut groups: Vec<TemplateGroup> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for template in templates {
        let Some(category) = &template.category else {
            continue;
        };
        match index.get(&category.id) {
            Some(&i) => groups[i].templates.push(template.clone()),
            None => {
                index.insert(category.id, groups.len());
                groups.push(TemplateGroup {
                    category: category.clone(),
                    templates: vec![template.clone()],
                });
            }
        }
    }

    // `sort_by_key` is stable, so ties keep first-seen order.
    groups.sort_by_key(|g| g.category.sort_key());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgrab_core::{Category, TemplateId, user_template_category};

    fn cat(id: i64, position: Option<i64>) -> Category {
        Category {
            id,
            name: Some(format!("cat-{id}")),
            subheader: None,
            position,
        }
    }

    fn tpl(id: u64, category: Option<Category>) -> Template {
        Template {
            id: TemplateId::BuiltIn(id),
            name: Some(format!("t{id}")),
            prompt: Some("Do it.".into()),
            short_description: None,
            has_focus_text: false,
            icon: None,
            category,
        }
    }

    fn user(id: &str) -> UserTemplate {
        UserTemplate {
            id: id.into(),
            name: format!("user {id}"),
            prompt: "Mine.".into(),
            short_description: String::new(),
            has_focus_text: false,
        }
    }

    #[test]
    fn merge_counts() {
        let built_in = vec![tpl(1, Some(cat(1, Some(1)))), tpl(2, Some(cat(1, Some(1))))];
        let users = vec![user("u1")];

        let all = build_catalog(&built_in, &users, true);
        assert_eq!(all.len(), 3);

        let only_user = build_catalog(&built_in, &users, false);
        assert_eq!(only_user.len(), 1);
        assert_eq!(only_user[0].id, TemplateId::User("u1".into()));
        assert_eq!(only_user[0].category, Some(user_template_category()));
    }

    #[test]
    fn user_templates_come_first() {
        let built_in = vec![tpl(1, Some(cat(1, Some(1))))];
        let users = vec![user("a"), user("b")];
        let all = build_catalog(&built_in, &users, true);
        let ids: Vec<_> = all.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["a", "b", "1"]);
    }

    #[test]
    fn colliding_ids_are_kept() {
        let built_in = vec![tpl(7, Some(cat(1, Some(1))))];
        let users = vec![user("7")];
        let all = build_catalog(&built_in, &users, true);
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
    }

    #[test]
    fn groups_sorted_by_position_with_null_as_zero() {
        let templates = vec![
            tpl(1, Some(cat(10, Some(3)))),
            tpl(2, Some(cat(11, Some(1)))),
            tpl(3, Some(cat(12, None))),
            tpl(4, Some(cat(13, Some(2)))),
        ];
        let groups = group_by_category(&templates);
        let positions: Vec<_> = groups.iter().map(|g| g.category.position).collect();
        assert_eq!(positions, vec![None, Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let templates = vec![
            tpl(1, Some(cat(20, Some(5)))),
            tpl(2, Some(cat(21, None))),
            tpl(3, Some(cat(22, Some(5)))),
            tpl(4, Some(cat(23, Some(0)))),
        ];
        let ids: Vec<_> = group_by_category(&templates)
            .iter()
            .map(|g| g.category.id)
            .collect();
        assert_eq!(ids, vec![21, 23, 20, 22]);
    }

    #[test]
    fn uncategorized_templates_are_dropped() {
        let templates = vec![tpl(1, None), tpl(2, Some(cat(1, Some(1)))), tpl(3, None)];
        let groups = group_by_category(&templates);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].templates.len(), 1);
        assert_eq!(groups[0].templates[0].id, TemplateId::BuiltIn(2));

        assert!(group_by_category(&[tpl(9, None)]).is_empty());
    }

    #[test]
    fn grouping_is_deterministic_and_complete() {
        let templates = vec![
            tpl(1, Some(cat(2, Some(2)))),
            tpl(2, Some(cat(1, Some(1)))),
            tpl(3, None),
            tpl(4, Some(cat(2, Some(2)))),
            tpl(5, Some(cat(3, None))),
            tpl(6, Some(cat(1, Some(1)))),
        ];
        let first = group_by_category(&templates);
        let second = group_by_category(&templates);
        assert_eq!(first, second);

        let mut grouped: Vec<_> = first
            .iter()
            .flat_map(|g| g.templates.iter().map(|t| t.id.clone()))
            .collect();
        grouped.sort();
        let mut expected: Vec<_> = templates
            .iter()
            .filter(|t| t.category.is_some())
            .map(|t| t.id.clone())
            .collect();
        expected.sort();
        assert_eq!(grouped, expected);

        let category_ids: std::collections::HashSet<_> =
            first.iter().map(|g| g.category.id).collect();
        assert_eq!(category_ids.len(), first.len());
    }

    #[test]
    fn insertion_order_within_group() {
        let templates = vec![
            tpl(3, Some(cat(1, Some(1)))),
            tpl(1, Some(cat(2, Some(0)))),
            tpl(2, Some(cat(1, Some(1)))),
        ];
        let groups = group_by_category(&templates);
        let in_cat_1: Vec<_> = groups[1].templates.iter().map(|t| t.id.clone()).collect();
        assert_eq!(in_cat_1, vec![TemplateId::BuiltIn(3), TemplateId::BuiltIn(2)]);
    }

    #[test]
    fn user_group_sorts_by_its_position() {
        let built_in = vec![
            tpl(1, Some(cat(1, Some(-5)))),
            tpl(2, Some(cat(2, None))),
        ];
        let all = build_catalog(&built_in, &[user("u")], true);
        let ids: Vec<_> = group_by_category(&all).iter().map(|g| g.category.id).collect();
        assert_eq!(ids, vec![1, -1, 2]);
    }
}
