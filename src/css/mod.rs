//! CSS declaration generation.
//!
//! [`Declarations`] is the intermediate declaration set - camelCase property
//! names in insertion order, serialized to kebab-case `key: value;` lines.
//! [`mapper`] holds the per-container dispatch table and the prop-to-CSS
//! mapping; [`edges`] emits the direction-aware padding/border/radius
//! declaration strings.

pub mod edges;
pub mod mapper;

use indexmap::IndexMap;

// =============================================================================
// Declarations
// =============================================================================

/// An ordered CSS declaration set.
///
/// Keys are camelCase property names; [`Declarations::to_css_string`]
/// kebab-cases them on the way out. Setting a key that already exists
/// overwrites its value in place (this is how distribution overrides the
/// alignment-derived `justifyContent`). Unset (`None`) values are kept in
/// the map but skipped during serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: IndexMap<&'static str, Option<String>>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.insert(property, Some(value.into()));
    }

    /// Set a property to an optional value; `None` is skipped at
    /// serialization time.
    pub fn set_opt(&mut self, property: &'static str, value: Option<String>) {
        self.entries.insert(property, value);
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .get(property)
            .and_then(|value| value.as_deref())
    }

    /// Whether the property is present with a value.
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Number of set (non-`None`) declarations.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|v| v.is_some()).count()
    }

    /// True when no declaration has a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to declaration text: one `key: value;` per line, keys
    /// kebab-cased, unset values skipped.
    pub fn to_css_string(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len());
        for (property, value) in &self.entries {
            if let Some(value) = value {
                lines.push(format!("{}: {};", kebab_case(property), value));
            }
        }
        lines.join("\n")
    }
}

/// Convert a camelCase property name to kebab-case
/// (`backgroundColor` -> `background-color`).
pub fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("backgroundColor"), "background-color");
        assert_eq!(kebab_case("flexDirection"), "flex-direction");
        assert_eq!(kebab_case("justifyContent"), "justify-content");
        assert_eq!(kebab_case("width"), "width");
    }

    #[test]
    fn test_to_css_string() {
        let mut decls = Declarations::new();
        decls.set("display", "flex");
        decls.set("flexDirection", "column");
        decls.set("width", "100px");
        decls.set("backgroundColor", "red");

        let css = decls.to_css_string();
        assert!(css.contains("display: flex;"));
        assert!(css.contains("flex-direction: column;"));
        assert!(css.contains("width: 100px;"));
        assert!(css.contains("background-color: red;"));
    }

    #[test]
    fn test_unset_values_skipped() {
        let mut decls = Declarations::new();
        decls.set("display", "flex");
        decls.set_opt("width", None);
        decls.set_opt("height", None);
        decls.set("backgroundColor", "red");

        let css = decls.to_css_string();
        assert!(css.contains("display: flex;"));
        assert!(css.contains("background-color: red;"));
        assert!(!css.contains("width:"));
        assert!(!css.contains("height:"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut decls = Declarations::new();
        decls.set("justifyContent", "flex-start");
        decls.set("width", "10px");
        decls.set("justifyContent", "center");

        let css = decls.to_css_string();
        assert_eq!(css, "justify-content: center;\nwidth: 10px;");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut decls = Declarations::new();
        decls.set("display", "flex");
        decls.set("alignItems", "center");
        decls.set("width", "1px");

        let css = decls.to_css_string();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(
            lines,
            vec!["display: flex;", "align-items: center;", "width: 1px;"]
        );
    }
}
