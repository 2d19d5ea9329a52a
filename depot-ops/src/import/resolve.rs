//! Reference resolution and identifier-prefix derivation
//!
//! Best-effort matching of free-text reference names from uploads against
//! the store's reference tables. Misspelled input attaches to an arbitrary
//! existing record rather than failing the row — import is reconciliation,
//! not validation.

use shared::models::Category;

/// Category attached when the store has no categories at all.
pub const DEFAULT_CATEGORY_NAME: &str = "อื่นๆ";

/// Prefix used when a category name yields no usable code.
pub const FALLBACK_PREFIX: &str = "GEN";

/// Outcome of category resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    /// `None` only when the store has no categories at all
    pub id: Option<String>,
    pub name: String,
}

impl From<&Category> for ResolvedCategory {
    fn from(category: &Category) -> Self {
        Self { id: Some(category.id.clone()), name: category.name.clone() }
    }
}

/// Extract the parenthesized code suffix of a name, e.g.
/// `"Information Technology (IT)"` → `"IT"`.
fn paren_code(name: &str) -> Option<&str> {
    let open = name.rfind('(')?;
    let close = name[open..].find(')')? + open;
    let code = name[open + 1..close].trim();
    (!code.is_empty()).then_some(code)
}

/// Match free text against named records: parenthesized code, exact name,
/// then substring containment — case-insensitive, first match wins.
pub(crate) fn match_by_name<'a, T>(
    input: &str,
    items: &'a [T],
    name_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() || items.is_empty() {
        return None;
    }

    items
        .iter()
        .find(|item| {
            paren_code(name_of(item)).is_some_and(|code| code.to_lowercase() == needle)
        })
        .or_else(|| items.iter().find(|item| name_of(item).to_lowercase() == needle))
        .or_else(|| {
            items
                .iter()
                .find(|item| name_of(item).to_lowercase().contains(&needle))
        })
}

/// Resolve a free-text category against the known list.
///
/// Unmatched non-empty input and empty input both land on the first known
/// category; with no categories at all the literal
/// [`DEFAULT_CATEGORY_NAME`] is returned with no id.
pub fn resolve_category(input: &str, categories: &[Category]) -> ResolvedCategory {
    if let Some(category) = match_by_name(input, categories, |c| c.name.as_str()) {
        return category.into();
    }
    match categories.first() {
        Some(category) => category.into(),
        None => ResolvedCategory { id: None, name: DEFAULT_CATEGORY_NAME.to_string() },
    }
}

/// Derive the identifier prefix from a resolved category name.
///
/// The parenthesized code wins; otherwise the first two ASCII alphanumeric
/// characters (which drops Thai script entirely); otherwise
/// [`FALLBACK_PREFIX`].
pub fn prefix_from_category(name: &str) -> String {
    if let Some(code) = paren_code(name) {
        return code.to_uppercase();
    }

    let alnum: String = name.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if alnum.len() >= 2 {
        alnum[..2].to_uppercase()
    } else {
        FALLBACK_PREFIX.to_string()
    }
}
