//! Design-token resolution.
//!
//! A value starting with the `$` sigil is a token reference and resolves to a
//! CSS custom-property lookup: `$primary` becomes `var(--primary)`. Anything
//! else passes through as a literal CSS value. Nothing here errors - missing
//! or invalid input resolves to `None` and the caller drops the declaration.

use crate::config::LayoutDefaults;

/// The prefix marking a token reference.
pub const TOKEN_SIGIL: char = '$';

// =============================================================================
// Resolvers
// =============================================================================

/// Resolve a token reference or pass a literal through.
///
/// - `None`/empty input resolves to `None`.
/// - `$name` resolves to `var(--name)`. The sigil is stripped exactly once:
///   `$$double` is the literal variable name `$double`, and a bare `$`
///   still produces `var(--)`.
/// - Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use flexkit::tokens::resolve;
///
/// assert_eq!(resolve(Some("$spacing-lg")), Some("var(--spacing-lg)".into()));
/// assert_eq!(resolve(Some("10px")), Some("10px".into()));
/// assert_eq!(resolve(None), None);
/// ```
pub fn resolve(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    match value.strip_prefix(TOKEN_SIGIL) {
        Some(name) => Some(format!("var(--{name})")),
        None => Some(value.to_string()),
    }
}

/// Resolve a color value, embedding a fallback in token references.
///
/// `$name` becomes `var(--name, <fallback>)` so an undefined custom property
/// still paints something. When `fallback` is `None` the configured default
/// color is used. Literals pass through unchanged.
///
/// # Examples
///
/// ```
/// use flexkit::tokens::resolve_color;
///
/// assert_eq!(
///     resolve_color(Some("$primary"), None),
///     Some("var(--primary, #000000)".into())
/// );
/// assert_eq!(
///     resolve_color(Some("$primary"), Some("#ff0000")),
///     Some("var(--primary, #ff0000)".into())
/// );
/// assert_eq!(resolve_color(Some("red"), None), Some("red".into()));
/// ```
pub fn resolve_color(value: Option<&str>, fallback: Option<&str>) -> Option<String> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    match value.strip_prefix(TOKEN_SIGIL) {
        Some(name) => {
            let defaults = LayoutDefaults::global();
            let fallback = fallback.unwrap_or(&defaults.color_fallback);
            Some(format!("var(--{name}, {fallback})"))
        }
        None => Some(value.to_string()),
    }
}

/// Resolve an opacity value.
///
/// Token references resolve like [`resolve`]. A literal must parse as a
/// number in `[0, 1]`; out-of-range or non-numeric input resolves to `None`
/// and is silently dropped from the output. The literal is returned verbatim
/// (`".5"` stays `".5"`), not re-formatted.
pub fn resolve_opacity(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    if value.starts_with(TOKEN_SIGIL) {
        return resolve(Some(value));
    }
    let number: f64 = value.parse().ok()?;
    // NaN fails the range check, so "NaN" falls out here too.
    if (0.0..=1.0).contains(&number) {
        Some(value.to_string())
    } else {
        None
    }
}

// =============================================================================
// Stroke defaults
// =============================================================================

/// The three stroke props as supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeProps<'a> {
    pub color: Option<&'a str>,
    pub weight: Option<&'a str>,
    pub style: Option<&'a str>,
}

/// A stroke with every member filled in, pre-token-resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStroke {
    pub color: String,
    pub weight: String,
    pub style: String,
}

impl StrokeProps<'_> {
    /// Apply the "any stroke prop implies a visible border" policy.
    ///
    /// Returns `None` when no stroke prop is set - no border is emitted at
    /// all. When at least one is set, the missing members are filled from
    /// the defaults table (`$border`, `1px`, `solid`).
    pub fn resolve(&self, defaults: &LayoutDefaults) -> Option<ResolvedStroke> {
        if self.color.is_none() && self.weight.is_none() && self.style.is_none() {
            return None;
        }
        Some(ResolvedStroke {
            color: self
                .color
                .map(str::to_string)
                .unwrap_or_else(|| defaults.stroke_color.clone()),
            weight: self
                .weight
                .map(str::to_string)
                .unwrap_or_else(|| defaults.stroke_weight.clone()),
            style: self
                .style
                .map(str::to_string)
                .unwrap_or_else(|| defaults.stroke_style.clone()),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_null_and_empty() {
        assert_eq!(resolve(None), None);
        assert_eq!(resolve(Some("")), None);
    }

    #[test]
    fn test_resolve_tokens() {
        assert_eq!(resolve(Some("$primary")), Some("var(--primary)".into()));
        assert_eq!(
            resolve(Some("$text-color")),
            Some("var(--text-color)".into())
        );
        assert_eq!(
            resolve(Some("$spacing-lg")),
            Some("var(--spacing-lg)".into())
        );
    }

    #[test]
    fn test_resolve_literals() {
        assert_eq!(resolve(Some("10px")), Some("10px".into()));
        assert_eq!(resolve(Some("red")), Some("red".into()));
        assert_eq!(resolve(Some("solid")), Some("solid".into()));
        assert_eq!(resolve(Some("#ffffff")), Some("#ffffff".into()));
    }

    #[test]
    fn test_resolve_sigil_edge_cases() {
        assert_eq!(resolve(Some("$")), Some("var(--)".into()));
        assert_eq!(resolve(Some("$123")), Some("var(--123)".into()));
        // The second sigil is part of the variable name, not re-resolved.
        assert_eq!(resolve(Some("$$double")), Some("var(--$double)".into()));
    }

    #[test]
    fn test_resolve_color_fallbacks() {
        assert_eq!(
            resolve_color(Some("$primary"), None),
            Some("var(--primary, #000000)".into())
        );
        assert_eq!(
            resolve_color(Some("$text-color"), Some("#ff0000")),
            Some("var(--text-color, #ff0000)".into())
        );
        assert_eq!(
            resolve_color(Some("$nonexistent"), Some("transparent")),
            Some("var(--nonexistent, transparent)".into())
        );
    }

    #[test]
    fn test_resolve_color_literals() {
        assert_eq!(resolve_color(Some("red"), None), Some("red".into()));
        assert_eq!(
            resolve_color(Some("rgb(255, 0, 0)"), None),
            Some("rgb(255, 0, 0)".into())
        );
        assert_eq!(resolve_color(None, None), None);
        assert_eq!(resolve_color(Some(""), None), None);
    }

    #[test]
    fn test_resolve_opacity_valid() {
        assert_eq!(resolve_opacity(Some("0")), Some("0".into()));
        assert_eq!(resolve_opacity(Some("0.5")), Some("0.5".into()));
        assert_eq!(resolve_opacity(Some("1")), Some("1".into()));
        assert_eq!(resolve_opacity(Some("0.75")), Some("0.75".into()));
        // Returned verbatim, not re-formatted.
        assert_eq!(resolve_opacity(Some("0.0")), Some("0.0".into()));
        assert_eq!(resolve_opacity(Some("1.0")), Some("1.0".into()));
        assert_eq!(resolve_opacity(Some(".5")), Some(".5".into()));
    }

    #[test]
    fn test_resolve_opacity_invalid() {
        assert_eq!(resolve_opacity(Some("-1")), None);
        assert_eq!(resolve_opacity(Some("1.5")), None);
        assert_eq!(resolve_opacity(Some("2")), None);
        assert_eq!(resolve_opacity(Some("invalid")), None);
        assert_eq!(resolve_opacity(Some("NaN")), None);
        assert_eq!(resolve_opacity(None), None);
        assert_eq!(resolve_opacity(Some("")), None);
    }

    #[test]
    fn test_resolve_opacity_tokens() {
        assert_eq!(
            resolve_opacity(Some("$opacity-disabled")),
            Some("var(--opacity-disabled)".into())
        );
    }

    #[test]
    fn test_stroke_nothing_set() {
        let defaults = LayoutDefaults::default();
        assert_eq!(StrokeProps::default().resolve(&defaults), None);
    }

    #[test]
    fn test_stroke_color_implies_defaults() {
        let defaults = LayoutDefaults::default();
        let stroke = StrokeProps {
            color: Some("red"),
            ..Default::default()
        }
        .resolve(&defaults)
        .unwrap();
        assert_eq!(stroke.color, "red");
        assert_eq!(stroke.weight, "1px");
        assert_eq!(stroke.style, "solid");
    }

    #[test]
    fn test_stroke_weight_implies_defaults() {
        let defaults = LayoutDefaults::default();
        let stroke = StrokeProps {
            weight: Some("2px"),
            ..Default::default()
        }
        .resolve(&defaults)
        .unwrap();
        assert_eq!(stroke.color, "$border");
        assert_eq!(stroke.weight, "2px");
        assert_eq!(stroke.style, "solid");
    }

    #[test]
    fn test_stroke_style_implies_defaults() {
        let defaults = LayoutDefaults::default();
        let stroke = StrokeProps {
            style: Some("dashed"),
            ..Default::default()
        }
        .resolve(&defaults)
        .unwrap();
        assert_eq!(stroke.color, "$border");
        assert_eq!(stroke.weight, "1px");
        assert_eq!(stroke.style, "dashed");
    }

    #[test]
    fn test_stroke_explicit_values_kept() {
        let defaults = LayoutDefaults::default();
        let stroke = StrokeProps {
            color: Some("blue"),
            weight: Some("3px"),
            style: Some("dotted"),
        }
        .resolve(&defaults)
        .unwrap();
        assert_eq!(stroke.color, "blue");
        assert_eq!(stroke.weight, "3px");
        assert_eq!(stroke.style, "dotted");
    }

    proptest! {
        #[test]
        fn prop_token_always_resolves_to_var(name in "[a-z][a-z0-9-]{0,24}") {
            let token = format!("${name}");
            prop_assert_eq!(resolve(Some(token.as_str())), Some(format!("var(--{name})")));
        }

        #[test]
        fn prop_literals_pass_through(value in "[a-z0-9#%. ()-]{1,32}") {
            prop_assume!(!value.starts_with('$'));
            prop_assert_eq!(resolve(Some(value.as_str())), Some(value.clone()));
        }

        #[test]
        fn prop_opacity_in_unit_range(x in 0.0f64..=1.0f64) {
            let s = format!("{x}");
            prop_assert_eq!(resolve_opacity(Some(s.as_str())), Some(s.clone()));
        }

        #[test]
        fn prop_opacity_above_one_rejected(x in 1.0001f64..1000.0f64) {
            let s = format!("{x}");
            prop_assert_eq!(resolve_opacity(Some(s.as_str())), None);
        }
    }
}
