//! The directional mini-syntax.
//!
//! Layout props like padding, stroke and radius accept a compact per-edge
//! syntax: `"10px"` (isotropic), `"x:10px y:20px"` (per axis),
//! `"top:5px right:15px"` (per edge) and, for radius, per-corner keys
//! (`"top-left:8px"`). The tokenizer here turns that into a structured
//! [`DirectionMap`]; the emitters in [`crate::css::edges`] apply the
//! precedence rules (axis first, edges override, corners over uniform).

use indexmap::IndexMap;

// =============================================================================
// Direction Keys
// =============================================================================

/// The fixed key set of the directional syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionKey {
    Top,
    Right,
    Bottom,
    Left,
    /// Horizontal axis - expands to left + right.
    X,
    /// Vertical axis - expands to top + bottom.
    Y,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl DirectionKey {
    /// The four edges in CSS order (top, right, bottom, left).
    pub const EDGES: [DirectionKey; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The four corners in CSS order (clockwise from top-left).
    pub const CORNERS: [DirectionKey; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Kebab-case key as written in the prop string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::X => "x",
            Self::Y => "y",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// Parse a key token. Unknown keys yield `None` and the token is dropped.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "top-left" => Some(Self::TopLeft),
            "top-right" => Some(Self::TopRight),
            "bottom-right" => Some(Self::BottomRight),
            "bottom-left" => Some(Self::BottomLeft),
            _ => None,
        }
    }
}

// =============================================================================
// DirectionMap
// =============================================================================

/// Parsed directional values, keyed by [`DirectionKey`].
///
/// Unspecified keys are absent, never zero - the emitters decide what an
/// absent key falls back to. Insertion order is preserved but lookups are
/// keyed, so duplicate keys in the input simply overwrite (last wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectionMap {
    entries: IndexMap<DirectionKey, String>,
}

impl DirectionMap {
    /// Parse a directional prop string.
    ///
    /// - Empty/blank input yields an empty map.
    /// - Input without a colon is the isotropic shorthand: the whole trimmed
    ///   value is assigned to both `x` and `y`.
    /// - Otherwise the input splits on whitespace into `key:value` tokens.
    ///   Tokens with an unknown key, a missing colon or an empty value are
    ///   silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexkit::direction::{DirectionKey, DirectionMap};
    ///
    /// let map = DirectionMap::parse("x:10px top:5px");
    /// assert_eq!(map.get(DirectionKey::X), Some("10px"));
    /// assert_eq!(map.get(DirectionKey::Top), Some("5px"));
    /// assert_eq!(map.get(DirectionKey::Bottom), None);
    /// ```
    pub fn parse(input: &str) -> Self {
        let mut map = Self::default();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return map;
        }

        if !trimmed.contains(':') {
            map.entries.insert(DirectionKey::X, trimmed.to_string());
            map.entries.insert(DirectionKey::Y, trimmed.to_string());
            return map;
        }

        for token in trimmed.split_whitespace() {
            let mut parts = token.split(':');
            let key = parts.next().unwrap_or("").trim();
            let value = parts.next().unwrap_or("").trim();
            if value.is_empty() {
                continue;
            }
            if let Some(key) = DirectionKey::parse(key) {
                map.entries.insert(key, value.to_string());
            }
        }
        map
    }

    /// Look up a direction value.
    pub fn get(&self, key: DirectionKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Whether a key was explicitly set.
    pub fn contains(&self, key: DirectionKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// True when nothing was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of parsed keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Free-function form of [`DirectionMap::parse`].
pub fn parse_direction(input: &str) -> DirectionMap {
    DirectionMap::parse(input)
}

/// Look up a key in an optional map, `None` when the map is absent or the
/// key unset.
pub fn directional_value(parsed: Option<&DirectionMap>, key: DirectionKey) -> Option<&str> {
    parsed.and_then(|map| map.get(key))
}

// =============================================================================
// Tests
// =============================================================================
