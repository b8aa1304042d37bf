//! The merged, grouped catalog.
//!
//! Owns the transient merged list and its derived groups. Both are
//! recomputed from scratch whenever the user templates or the built-in
//! visibility change; callers trigger that explicitly with [`Catalog::rebuild`].

use crate::builder::{build_catalog, group_by_category};
use crate::filter::filter_templates;
use promptgrab_core::{Error, Result, Template, TemplateGroup, TemplateId, UserTemplate};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Catalog {
    built_in: Vec<Template>,
    templates: Vec<Template>,
    groups: Vec<TemplateGroup>,
}

impl Catalog {
    /// Build a catalog from a built-in set and the user's templates.
    pub fn new(
        built_in: Vec<Template>,
        user_templates: &[UserTemplate],
        include_built_in: bool,
    ) -> Self {
        let mut catalog = Self {
            built_in,
            templates: Vec::new(),
            groups: Vec::new(),
        };
        catalog.rebuild(user_templates, include_built_in);
        catalog
    }

    /// Recompute the merged list and groups after an input changed.
    pub fn rebuild(&mut self, user_templates: &[UserTemplate], include_built_in: bool) {
        self.templates = build_catalog(&self.built_in, user_templates, include_built_in);
        self.groups = group_by_category(&self.templates);
        debug!(
            templates = self.templates.len(),
            groups = self.groups.len(),
            "Catalog rebuilt"
        );
    }

    /// All templates, user templates first.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Category groups in display order.
    pub fn groups(&self) -> &[TemplateGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Find a template by id.
    pub fn get(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: &TemplateId) -> Result<&Template> {
        self.get(id)
            .ok_or_else(|| Error::TemplateNotFound(id.to_string()))
    }

    /// Templates matching a raw query, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Template> {
        filter_templates(&self.templates, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptgrab_core::{USER_TEMPLATE_CATEGORY_ID, builtin_templates};

    fn user(id: &str, name: &str) -> UserTemplate {
        UserTemplate {
            id: id.into(),
            name: name.into(),
            prompt: "Do the thing.".into(),
            short_description: "mine".into(),
            has_focus_text: false,
        }
    }

    #[test]
    fn catalog_with_builtins() {
        let built_in = builtin_templates();
        let n = built_in.len();
        let catalog = Catalog::new(built_in, &[user("a", "Alpha")], true);
        assert_eq!(catalog.len(), n + 1);
        assert_eq!(catalog.templates()[0].id, TemplateId::User("a".into()));
        assert!(
            catalog
                .groups()
                .iter()
                .any(|g| g.category.id == USER_TEMPLATE_CATEGORY_ID)
        );
    }

    #[test]
    fn rebuild_reflects_new_inputs() {
        let mut catalog = Catalog::new(builtin_templates(), &[], true);
        assert!(catalog.get(&TemplateId::User("a".into())).is_none());

        catalog.rebuild(&[user("a", "Alpha")], false);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.groups().len(), 1);
        assert!(catalog.get(&TemplateId::User("a".into())).is_some());
        assert!(catalog.get(&TemplateId::BuiltIn(101)).is_none());
    }

    #[test]
    fn require_reports_missing_id() {
        let catalog = Catalog::new(builtin_templates(), &[], true);
        assert!(catalog.require(&TemplateId::BuiltIn(101)).is_ok());
        let err = catalog.require(&TemplateId::BuiltIn(999)).unwrap_err();
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::new(builtin_templates(), &[user("a", "Alpha Notes")], true);
        let hits = catalog.search("ALPHA");
        assert_eq!(hits.len(), 1);
        assert_eq!(catalog.search("").len(), catalog.len());
        assert!(!catalog.search("proofing").is_empty());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new(), &[], true);
        assert!(catalog.is_empty());
        assert!(catalog.groups().is_empty());
    }
}
