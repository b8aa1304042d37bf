//! Template domain types.
//!
//! A [`Template`] is a reusable instruction block. Built-in templates ship
//! with the binary and carry numeric ids; user templates are authored locally,
//! carry UUID strings, and are folded into the catalog under the synthetic
//! "My templates" category.

use serde::{Deserialize, Serialize};

/// Identifier of a template.
///
/// Built-in and user templates live in disjoint id spaces. Equality and
/// hashing take the variant into account, so `BuiltIn(12)` never equals
/// `User("12")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateId {
    /// A template from the built-in set.
    BuiltIn(u64),
    /// A user-authored template (UUID string).
    User(String),
}

impl TemplateId {
    /// Only user-authored templates can be edited or deleted.
    pub fn is_user_editable(&self) -> bool {
        matches!(self, TemplateId::User(_))
    }

    /// The user id, if this is a user template.
    pub fn as_user(&self) -> Option<&str> {
        match self {
            TemplateId::User(id) => Some(id),
            TemplateId::BuiltIn(_) => None,
        }
    }
}

impl From<&str> for TemplateId {
    /// All-digit strings name built-in templates; anything else is a user id.
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(n) if s.bytes().all(|b| b.is_ascii_digit()) => TemplateId::BuiltIn(n),
            _ => TemplateId::User(s.to_string()),
        }
    }
}

impl From<u64> for TemplateId {
    fn from(n: u64) -> Self {
        TemplateId::BuiltIn(n)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateId::BuiltIn(n) => write!(f, "{n}"),
            TemplateId::User(s) => write!(f, "{s}"),
        }
    }
}

/// A named grouping of templates, ordered for display by `position`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheader: Option<String>,

    /// Display order. Missing positions sort as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl Category {
    /// Position used for ordering, with a missing value treated as 0.
    pub fn sort_key(&self) -> i64 {
        self.position.unwrap_or(0)
    }

    /// Whether this is the synthetic "My templates" category.
    pub fn is_user_category(&self) -> bool {
        self.id == USER_TEMPLATE_CATEGORY_ID
    }
}

/// Id of the synthetic category every user template is filed under.
pub const USER_TEMPLATE_CATEGORY_ID: i64 = -1;

/// Display name of the synthetic user category.
pub const USER_TEMPLATE_CATEGORY_NAME: &str = "My templates";

/// The synthetic "My templates" category.
///
/// Its position is -1, which places it before any category whose position is
/// 0 or missing, but not before categories with lower explicit positions.
pub fn user_template_category() -> Category {
    Category {
        id: USER_TEMPLATE_CATEGORY_ID,
        name: Some(USER_TEMPLATE_CATEGORY_NAME.to_string()),
        subheader: None,
        position: Some(-1),
    }
}

/// A catalog entry: either a built-in template or a converted user template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,

    #[serde(default)]
    pub name: Option<String>,

    /// The instruction text appended after the framed document.
    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(default)]
    pub short_description: Option<String>,

    /// The template needs a non-empty selection to be usable.
    #[serde(default)]
    pub has_focus_text: bool,

    #[serde(default)]
    pub icon: Option<String>,

    /// Templates without a category are left out of every group.
    #[serde(default)]
    pub category: Option<Category>,
}

impl Template {
    /// Name, or the empty string.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Prompt text, or the empty string.
    pub fn prompt_or_empty(&self) -> &str {
        self.prompt.as_deref().unwrap_or("")
    }

    /// Short description, or the empty string.
    pub fn description_or_empty(&self) -> &str {
        self.short_description.as_deref().unwrap_or("")
    }

    /// Category name, or the empty string.
    pub fn category_name_or_empty(&self) -> &str {
        self.category
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("")
    }
}

/// An author-editable template, as persisted in settings.
///
/// Carries no icon and no category; both are synthesized by
/// [`to_catalog_entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTemplate {
    pub id: String,
    pub name: String,
    pub prompt: String,
    #[serde(default, alias = "shortDescription")]
    pub short_description: String,
    #[serde(default, alias = "hasFocusText")]
    pub has_focus_text: bool,
}

impl UserTemplate {
    /// Check the fields the editor requires.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidTemplate {
                id: "(empty)".into(),
                reason: "template id cannot be empty".into(),
            });
        }
        if self.name.trim().is_empty() || self.prompt.trim().is_empty() {
            return Err(crate::Error::InvalidTemplate {
                id: self.id.clone(),
                reason: "name and prompt are required".into(),
            });
        }
        Ok(())
    }
}

/// Convert a user template into a catalog entry.
///
/// The result always carries the "My templates" category and no icon.
pub fn to_catalog_entry(user_template: &UserTemplate) -> Template {
    Template {
        id: TemplateId::User(user_template.id.clone()),
        name: Some(user_template.name.clone()),
        prompt: Some(user_template.prompt.clone()),
        short_description: Some(user_template.short_description.clone()),
        has_focus_text: user_template.has_focus_text,
        icon: None,
        category: Some(user_template_category()),
    }
}

/// Templates sharing one category, in the order they were encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateGroup {
    pub category: Category,
    pub templates: Vec<Template>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserTemplate {
        UserTemplate {
            id: id.into(),
            name: "Tighten".into(),
            prompt: "Make it shorter.".into(),
            short_description: "Cut the fluff".into(),
            has_focus_text: true,
        }
    }

    #[test]
    fn template_id_from_str() {
        assert_eq!(TemplateId::from("42"), TemplateId::BuiltIn(42));
        assert_eq!(
            TemplateId::from("7f3c-uuid"),
            TemplateId::User("7f3c-uuid".into())
        );
        assert_eq!(TemplateId::from("+4"), TemplateId::User("+4".into()));
        assert_eq!(TemplateId::from(" 9 "), TemplateId::BuiltIn(9));
    }

    #[test]
    fn variants_never_collide() {
        assert_ne!(TemplateId::BuiltIn(12), TemplateId::User("12".into()));
    }

    #[test]
    fn only_user_ids_are_editable() {
        assert!(TemplateId::User("abc".into()).is_user_editable());
        assert!(!TemplateId::BuiltIn(1).is_user_editable());
        assert_eq!(TemplateId::User("abc".into()).as_user(), Some("abc"));
        assert_eq!(TemplateId::BuiltIn(1).as_user(), None);
    }

    #[test]
    fn template_id_json_is_untagged() {
        let ids = vec![TemplateId::BuiltIn(3), TemplateId::User("abc".into())];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"[3,"abc"]"#);
        let back: Vec<TemplateId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ids);
    }

    #[test]
    fn conversion_uses_sentinel_category() {
        let t = to_catalog_entry(&user("abc"));
        assert_eq!(t.id, TemplateId::User("abc".into()));
        assert_eq!(t.name.as_deref(), Some("Tighten"));
        assert_eq!(t.prompt.as_deref(), Some("Make it shorter."));
        assert_eq!(t.short_description.as_deref(), Some("Cut the fluff"));
        assert!(t.has_focus_text);
        assert!(t.icon.is_none());
        let cat = t.category.unwrap();
        assert_eq!(cat, user_template_category());
        assert!(cat.is_user_category());
        assert_eq!(cat.position, Some(-1));
        assert_eq!(cat.name.as_deref(), Some("My templates"));
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let t = Template {
            id: TemplateId::BuiltIn(1),
            name: None,
            prompt: None,
            short_description: None,
            has_focus_text: false,
            icon: None,
            category: None,
        };
        assert_eq!(t.name_or_empty(), "");
        assert_eq!(t.prompt_or_empty(), "");
        assert_eq!(t.description_or_empty(), "");
        assert_eq!(t.category_name_or_empty(), "");
    }

    #[test]
    fn sort_key_defaults_to_zero() {
        let c = Category {
            id: 5,
            name: None,
            subheader: None,
            position: None,
        };
        assert_eq!(c.sort_key(), 0);
    }

    #[test]
    fn validate_rejects_blank_name_or_prompt() {
        assert!(user("abc").validate().is_ok());

        let mut blank = user("abc");
        blank.prompt = "   ".into();
        assert!(blank.validate().is_err());

        let mut no_id = user("");
        no_id.name = "x".into();
        assert!(no_id.validate().is_err());
    }
}
