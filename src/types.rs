//! Core types for flexkit.
//!
//! These types define the vocabulary everything else builds on: the four
//! container kinds, the 3x3 alignment grid, distribution/overflow keywords
//! and the `hug`/`fill` sizing sentinels. String forms are kebab-case and
//! match the prop DSL accepted by the components.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Parse Error
// =============================================================================

/// Error returned when a layout keyword fails to parse.
///
/// The CSS generators never surface this - unknown values degrade to the
/// documented defaults there. It exists for hosts that parse prop strings up
/// front and want the failure instead of the fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} keyword: `{value}`")]
pub struct ParseKeywordError {
    /// Which keyword family failed ("alignment", "distribution", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseKeywordError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Container Kind
// =============================================================================

/// The four container primitives.
///
/// The kind selects default alignment, flex direction and which layout
/// features (gap, distribution, wrap) apply. See [`crate::css::mapper`] for
/// the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Free-form frame. Vertical flex layout by default.
    Box,
    /// Vertical auto-layout.
    Column,
    /// Horizontal auto-layout.
    Row,
    /// Stacked children, absolutely positioned.
    ZStack,
}

impl ContainerKind {
    /// Kebab-case string form ("box", "column", "row", "zstack").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Column => "column",
            Self::Row => "row",
            Self::ZStack => "zstack",
        }
    }
}

impl FromStr for ContainerKind {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(Self::Box),
            "column" => Ok(Self::Column),
            "row" => Ok(Self::Row),
            "zstack" => Ok(Self::ZStack),
            other => Err(ParseKeywordError::new("container", other)),
        }
    }
}

// =============================================================================
// Alignment - the 3x3 grid
// =============================================================================

/// One cell of the 3x3 alignment grid.
///
/// The first word is the vertical component, the second the horizontal one,
/// mirroring Figma's alignment picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Position along a single axis, as flexbox understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisAlign {
    Start,
    Center,
    End,
}

impl AxisAlign {
    /// The flexbox keyword for this position.
    pub const fn as_flex(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }
}

impl Alignment {
    /// All nine grid cells, row-major from top-left.
    pub const ALL: [Alignment; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::CenterCenter,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Kebab-case string form ("top-left" ... "bottom-right").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::CenterLeft => "center-left",
            Self::CenterCenter => "center-center",
            Self::CenterRight => "center-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// The vertical component (top/center/bottom).
    pub const fn vertical(self) -> AxisAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => AxisAlign::Start,
            Self::CenterLeft | Self::CenterCenter | Self::CenterRight => AxisAlign::Center,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => AxisAlign::End,
        }
    }

    /// The horizontal component (left/center/right).
    pub const fn horizontal(self) -> AxisAlign {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => AxisAlign::Start,
            Self::TopCenter | Self::CenterCenter | Self::BottomCenter => AxisAlign::Center,
            Self::TopRight | Self::CenterRight | Self::BottomRight => AxisAlign::End,
        }
    }
}

impl FromStr for Alignment {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseKeywordError::new("alignment", s))
    }
}

// =============================================================================
// Distribution
// =============================================================================

/// Main-axis distribution for Box and Row containers.
///
/// Column and ZStack ignore distribution entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Children packed at the start (`flex-start`).
    Pack,
    /// Children centered.
    Center,
    /// Evenly spread with half-size gaps at the ends (`space-around`).
    Space,
    /// First/last children flush with the edges (`space-between`).
    SpaceBetween,
}

impl Distribution {
    /// Kebab-case string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pack => "pack",
            Self::Center => "center",
            Self::Space => "space",
            Self::SpaceBetween => "space-between",
        }
    }

    /// The `justify-content` value this distribution maps to.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Pack => "flex-start",
            Self::Center => "center",
            Self::Space => "space-around",
            Self::SpaceBetween => "space-between",
        }
    }
}

impl FromStr for Distribution {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pack" => Ok(Self::Pack),
            "center" => Ok(Self::Center),
            "space" => Ok(Self::Space),
            "space-between" => Ok(Self::SpaceBetween),
            other => Err(ParseKeywordError::new("distribution", other)),
        }
    }
}

// =============================================================================
// Overflow
// =============================================================================

/// Overflow behavior. Row and Column constrain this to their main axis,
/// see [`crate::css::mapper::map_overflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    /// CSS keyword form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Scroll => "scroll",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for Overflow {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            "scroll" => Ok(Self::Scroll),
            "auto" => Ok(Self::Auto),
            other => Err(ParseKeywordError::new("overflow", other)),
        }
    }
}

// =============================================================================
// Wrap
// =============================================================================

/// Line wrapping for Row containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wrap {
    Wrap,
    NoWrap,
}

impl Wrap {
    /// The `flex-wrap` value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::NoWrap => "nowrap",
        }
    }
}

impl FromStr for Wrap {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "true"/"false" accepted for compatibility with the string props
        // some design tools emit.
        match s {
            "wrap" | "true" => Ok(Self::Wrap),
            "nowrap" | "no-wrap" | "false" => Ok(Self::NoWrap),
            other => Err(ParseKeywordError::new("wrap", other)),
        }
    }
}

// =============================================================================
// Sizing - hug / fill sentinels
// =============================================================================

/// Width/height value: the `hug`/`fill` sentinels or a literal CSS length.
///
/// `hug` maps to `fit-content`, `fill` to `100%`. Anything else passes
/// through untouched (including token references, which the caller resolves).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sizing {
    /// Size to content (`fit-content`).
    Hug,
    /// Fill the parent (`100%`).
    Fill,
    /// Literal CSS value, passed through.
    Fixed(String),
}

impl Sizing {
    /// The CSS value this sizing maps to.
    pub fn as_css(&self) -> &str {
        match self {
            Self::Hug => "fit-content",
            Self::Fill => "100%",
            Self::Fixed(value) => value,
        }
    }
}

impl Default for Sizing {
    fn default() -> Self {
        Self::Hug
    }
}

impl From<&str> for Sizing {
    fn from(value: &str) -> Self {
        match value {
            "hug" => Self::Hug,
            "fill" => Self::Fill,
            other => Self::Fixed(other.to_string()),
        }
    }
}

impl From<String> for Sizing {
    fn from(value: String) -> Self {
        match value.as_str() {
            "hug" => Self::Hug,
            "fill" => Self::Fill,
            _ => Self::Fixed(value),
        }
    }
}

impl From<Sizing> for String {
    fn from(sizing: Sizing) -> Self {
        match sizing {
            Sizing::Hug => "hug".to_string(),
            Sizing::Fill => "fill".to_string(),
            Sizing::Fixed(value) => value,
        }
    }
}

// =============================================================================
// Stroke Style
// =============================================================================

/// Border line styles.
///
/// Stroke props travel as strings (they accept the directional mini-syntax,
/// e.g. `"top:dashed"`); this enum exists for typed construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl StrokeStyle {
    /// CSS keyword form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
            Self::Groove => "groove",
            Self::Ridge => "ridge",
            Self::Inset => "inset",
            Self::Outset => "outset",
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "double" => Ok(Self::Double),
            "groove" => Ok(Self::Groove),
            "ridge" => Ok(Self::Ridge),
            "inset" => Ok(Self::Inset),
            "outset" => Ok(Self::Outset),
            other => Err(ParseKeywordError::new("stroke-style", other)),
        }
    }
}

// =============================================================================
// Layout Prop Set
// =============================================================================

/// The declarative layout props every container accepts.
///
/// Values may be literal CSS, the `hug`/`fill` sentinels, token references
/// (`$name`) or the directional mini-syntax (`"x:10px y:20px"`). Unset props
/// are simply absent from the generated CSS.
///
/// Serde names are camelCase so specs round-trip with the JS prop names
/// (`strokeColor`, `minWidth`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutProps {
    /// Width: `hug`, `fill` or a literal value.
    pub width: Option<Sizing>,
    /// Height: `hug`, `fill` or a literal value.
    pub height: Option<Sizing>,
    /// Minimum width; token-resolved.
    pub min_width: Option<String>,
    /// Maximum width; token-resolved.
    pub max_width: Option<String>,
    /// Minimum height; token-resolved.
    pub min_height: Option<String>,
    /// Maximum height; token-resolved.
    pub max_height: Option<String>,

    /// Child alignment on the 3x3 grid. Defaults per container kind.
    pub alignment: Option<Alignment>,
    /// Main-axis distribution. Box and Row only.
    pub distribution: Option<Distribution>,
    /// Line wrapping. Row only.
    pub wrap: Option<Wrap>,
    /// Gap between children; token-resolved. Ignored by ZStack.
    pub gap: Option<String>,
    /// Padding; accepts the directional mini-syntax.
    pub padding: Option<String>,
    /// Overflow behavior, constrained per container kind.
    pub overflow: Option<Overflow>,

    /// Background color; token-resolved with a color fallback.
    pub fill: Option<String>,
    /// Border color; directional mini-syntax allowed.
    pub stroke_color: Option<String>,
    /// Border width; directional mini-syntax allowed.
    pub stroke_weight: Option<String>,
    /// Border line style; directional mini-syntax allowed.
    pub stroke_style: Option<String>,
    /// Corner radius; corner-directional mini-syntax allowed.
    pub radius: Option<String>,
    /// Opacity in `[0, 1]`, or a token reference.
    pub opacity: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================
