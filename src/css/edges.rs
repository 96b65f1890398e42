//! Direction-aware declaration emitters for padding, border and radius.
//!
//! These produce standalone declaration strings (space-joined `key: value;`
//! pairs) that the complete-CSS generator concatenates after the base block.
//! Precedence is encoded in emission order: axis declarations come first so
//! the specific edges written after them win in the cascade.

use crate::direction::{DirectionKey, DirectionMap};

// =============================================================================
// Padding
// =============================================================================

/// Emit padding declarations from a directional prop string.
///
/// `x` expands to left + right, `y` to top + bottom; specific edges are
/// emitted afterwards so they override the axis values. Absent keys emit
/// nothing.
///
/// # Examples
///
/// ```
/// use flexkit::css::edges::padding_css;
///
/// assert_eq!(
///     padding_css("x:10px y:20px"),
///     "padding-left: 10px; padding-right: 10px; \
///      padding-top: 20px; padding-bottom: 20px;"
/// );
/// ```
pub fn padding_css(padding: &str) -> String {
    let parsed = DirectionMap::parse(padding);
    let mut out = Vec::new();

    if let Some(x) = parsed.get(DirectionKey::X) {
        out.push(format!("padding-left: {x};"));
        out.push(format!("padding-right: {x};"));
    }
    if let Some(y) = parsed.get(DirectionKey::Y) {
        out.push(format!("padding-top: {y};"));
        out.push(format!("padding-bottom: {y};"));
    }

    // Specific edges after the axis pairs - last writer wins in the cascade.
    for edge in DirectionKey::EDGES {
        if let Some(value) = parsed.get(edge) {
            out.push(format!("padding-{}: {value};", edge.as_str()));
        }
    }

    out.join(" ")
}

// =============================================================================
// Border
// =============================================================================

/// Emit border declarations.
///
/// With no directional overrides at all this is the uniform shorthand
/// `border: <weight> <style> <color>;`. As soon as any of the three parsed
/// maps carries a value, four per-edge declarations are emitted instead,
/// each member falling back to the uniform value where no override exists.
pub fn border_css(
    color: &str,
    weight: &str,
    style: &str,
    color_dir: Option<&DirectionMap>,
    weight_dir: Option<&DirectionMap>,
    style_dir: Option<&DirectionMap>,
) -> String {
    let has_color = color_dir.is_some_and(|map| !map.is_empty());
    let has_weight = weight_dir.is_some_and(|map| !map.is_empty());
    let has_style = style_dir.is_some_and(|map| !map.is_empty());

    if !has_color && !has_weight && !has_style {
        return format!("border: {weight} {style} {color};");
    }

    let mut out = Vec::with_capacity(4);
    for edge in DirectionKey::EDGES {
        let edge_color = if has_color {
            color_dir.and_then(|map| map.get(edge)).unwrap_or(color)
        } else {
            color
        };
        let edge_weight = if has_weight {
            weight_dir.and_then(|map| map.get(edge)).unwrap_or(weight)
        } else {
            weight
        };
        let edge_style = if has_style {
            style_dir.and_then(|map| map.get(edge)).unwrap_or(style)
        } else {
            style
        };
        out.push(format!(
            "border-{}: {edge_weight} {edge_style} {edge_color};",
            edge.as_str()
        ));
    }
    out.join(" ")
}

// =============================================================================
// Border radius
// =============================================================================

/// Emit border-radius declarations.
///
/// An empty/absent parsed map yields the uniform `border-radius` shorthand.
/// Otherwise each corner is emitted with the uniform value as fallback, and
/// an explicitly-set corner zeroes its partner corner on the same horizontal
/// edge unless that partner is also explicitly set. The zeroing rule is
/// radius-only; padding and border never zero unset members.
pub fn radius_css(uniform: &str, parsed: Option<&DirectionMap>) -> String {
    let Some(parsed) = parsed.filter(|map| !map.is_empty()) else {
        return format!("border-radius: {uniform};");
    };

    let mut out = Vec::new();
    for corner in DirectionKey::CORNERS {
        let value = parsed.get(corner).unwrap_or(uniform);
        out.push(format!("border-{}-radius: {value};", corner.as_str()));
    }

    let pairs = [
        (DirectionKey::TopLeft, DirectionKey::TopRight),
        (DirectionKey::TopRight, DirectionKey::TopLeft),
        (DirectionKey::BottomRight, DirectionKey::BottomLeft),
        (DirectionKey::BottomLeft, DirectionKey::BottomRight),
    ];
    for (set, partner) in pairs {
        if parsed.contains(set) && !parsed.contains(partner) {
            out.push(format!("border-{}-radius: 0;", partner.as_str()));
        }
    }

    out.join(" ")
}

// =============================================================================
// Tests
// =============================================================================
