//! Container dispatch table and prop-to-CSS mapping.
//!
//! Each [`ContainerKind`] has one static [`ContainerSpec`] entry describing
//! how it lays out: its flex direction, which layout features apply to it
//! (gap, distribution, wrap), and its alignment-mapping function. The
//! generators branch through the table instead of matching on the kind
//! throughout.

use bitflags::bitflags;

use super::{Declarations, edges};
use crate::config::LayoutDefaults;
use crate::direction::DirectionMap;
use crate::tokens::{self, StrokeProps};
use crate::types::{Alignment, ContainerKind, Distribution, LayoutProps, Overflow, Sizing};

// =============================================================================
// Container Spec - the dispatch table
// =============================================================================

bitflags! {
    /// Layout features a container kind participates in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Features: u8 {
        /// Children are laid out with flexbox.
        const FLEX = 1 << 0;
        /// `gap` applies.
        const GAP = 1 << 1;
        /// `distribution` may override `justify-content`.
        const DISTRIBUTION = 1 << 2;
        /// `wrap` applies.
        const WRAP = 1 << 3;
    }
}

/// Alignment expressed as flexbox container properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexAlignment {
    pub align_items: &'static str,
    pub justify_content: &'static str,
}

/// Per-kind layout behavior.
pub struct ContainerSpec {
    pub kind: ContainerKind,
    pub features: Features,
    /// `flex-direction` for the base declaration block.
    pub flex_direction: &'static str,
    align: fn(Alignment) -> FlexAlignment,
}

/// Direct grid mapping: vertical component drives `align-items`,
/// horizontal drives `justify-content`. Used by Box and Row.
fn direct_alignment(alignment: Alignment) -> FlexAlignment {
    FlexAlignment {
        align_items: alignment.vertical().as_flex(),
        justify_content: alignment.horizontal().as_flex(),
    }
}

/// Column mapping: the cross axis always centers; the main (vertical) axis
/// follows the vertical component of the alignment.
fn column_alignment(alignment: Alignment) -> FlexAlignment {
    FlexAlignment {
        align_items: "center",
        justify_content: alignment.vertical().as_flex(),
    }
}

static BOX_SPEC: ContainerSpec = ContainerSpec {
    kind: ContainerKind::Box,
    features: Features::FLEX
        .union(Features::GAP)
        .union(Features::DISTRIBUTION),
    flex_direction: "column",
    align: direct_alignment,
};

static COLUMN_SPEC: ContainerSpec = ContainerSpec {
    kind: ContainerKind::Column,
    features: Features::FLEX.union(Features::GAP),
    flex_direction: "column",
    align: column_alignment,
};

static ROW_SPEC: ContainerSpec = ContainerSpec {
    kind: ContainerKind::Row,
    features: Features::FLEX
        .union(Features::GAP)
        .union(Features::DISTRIBUTION)
        .union(Features::WRAP),
    flex_direction: "row",
    align: direct_alignment,
};

// ZStack positions children absolutely; no flexbox properties at all.
static ZSTACK_SPEC: ContainerSpec = ContainerSpec {
    kind: ContainerKind::ZStack,
    features: Features::empty(),
    flex_direction: "column",
    align: direct_alignment,
};

/// The dispatch-table entry for a container kind.
pub fn container_spec(kind: ContainerKind) -> &'static ContainerSpec {
    match kind {
        ContainerKind::Box => &BOX_SPEC,
        ContainerKind::Column => &COLUMN_SPEC,
        ContainerKind::Row => &ROW_SPEC,
        ContainerKind::ZStack => &ZSTACK_SPEC,
    }
}

// =============================================================================
// Individual mappers
// =============================================================================

/// Map an alignment to flexbox properties for a container kind.
pub fn map_alignment(alignment: Alignment, kind: ContainerKind) -> FlexAlignment {
    (container_spec(kind).align)(alignment)
}

/// Default alignment for a container kind, from the global defaults table.
pub fn default_alignment(kind: ContainerKind) -> Alignment {
    LayoutDefaults::global().alignment_for(kind)
}

/// Map a distribution to its `justify-content` value.
pub fn map_distribution(distribution: Distribution) -> &'static str {
    distribution.as_css()
}

/// Map a size through the `hug`/`fill` sentinels. Unset sizes hug.
pub fn map_size(size: Option<&Sizing>) -> &str {
    match size {
        Some(sizing) => sizing.as_css(),
        None => "fit-content",
    }
}

/// `flex-direction` for a container kind (`row` for Row, `column` for
/// everything else).
pub fn flex_direction(kind: ContainerKind) -> &'static str {
    container_spec(kind).flex_direction
}

/// Map overflow per container kind.
///
/// Box and ZStack pass the keyword straight through. Column constrains the
/// vertical axis only (horizontal stays `visible` unless everything hides);
/// Row is the symmetric horizontal rule. The two-axis forms come back as
/// complete declaration text.
pub fn map_overflow(overflow: Overflow, kind: ContainerKind) -> String {
    match kind {
        ContainerKind::Box | ContainerKind::ZStack => overflow.as_str().to_string(),
        ContainerKind::Column => {
            let (x, y) = match overflow {
                Overflow::Visible => ("visible", "visible"),
                Overflow::Hidden => ("hidden", "hidden"),
                Overflow::Scroll => ("visible", "scroll"),
                Overflow::Auto => ("visible", "auto"),
            };
            format!("overflow-x: {x}; overflow-y: {y};")
        }
        ContainerKind::Row => {
            let (x, y) = match overflow {
                Overflow::Visible => ("visible", "visible"),
                Overflow::Hidden => ("hidden", "hidden"),
                Overflow::Scroll => ("scroll", "visible"),
                Overflow::Auto => ("auto", "visible"),
            };
            format!("overflow-x: {x}; overflow-y: {y};")
        }
    }
}

// =============================================================================
// Declaration generation
// =============================================================================

/// Build the base declaration set for a prop set and container kind.
///
/// Flex containers get `display: flex`, a `flex-direction` and the mapped
/// alignment pair; ZStack gets none of those. Sizes, gap, distribution and
/// the visual props are appended in a fixed order. Distribution overwrites
/// the alignment-derived `justifyContent` in place.
pub fn generate_config(
    props: &LayoutProps,
    kind: ContainerKind,
    defaults: &LayoutDefaults,
) -> Declarations {
    let spec = container_spec(kind);
    let mut decls = Declarations::new();

    if spec.features.contains(Features::FLEX) {
        let alignment = props.alignment.unwrap_or(defaults.alignment_for(kind));
        let mapped = (spec.align)(alignment);
        decls.set("display", "flex");
        decls.set("flexDirection", spec.flex_direction);
        decls.set("alignItems", mapped.align_items);
        decls.set("justifyContent", mapped.justify_content);
    }

    if let Some(width) = &props.width {
        decls.set("width", width.as_css());
    }
    if let Some(height) = &props.height {
        decls.set("height", height.as_css());
    }
    if props.min_width.is_some() {
        decls.set_opt("minWidth", tokens::resolve(props.min_width.as_deref()));
    }
    if props.max_width.is_some() {
        decls.set_opt("maxWidth", tokens::resolve(props.max_width.as_deref()));
    }
    if props.min_height.is_some() {
        decls.set_opt("minHeight", tokens::resolve(props.min_height.as_deref()));
    }
    if props.max_height.is_some() {
        decls.set_opt("maxHeight", tokens::resolve(props.max_height.as_deref()));
    }

    if spec.features.contains(Features::GAP) && props.gap.is_some() {
        decls.set_opt("gap", tokens::resolve(props.gap.as_deref()));
    }
    if spec.features.contains(Features::DISTRIBUTION) {
        if let Some(distribution) = props.distribution {
            decls.set("justifyContent", map_distribution(distribution));
        }
    }

    if props.fill.is_some() {
        decls.set_opt(
            "backgroundColor",
            tokens::resolve_color(props.fill.as_deref(), Some(&defaults.color_fallback)),
        );
    }
    if props.opacity.is_some() {
        decls.set_opt("opacity", tokens::resolve_opacity(props.opacity.as_deref()));
    }

    decls
}

/// Generate the complete declaration text for a container: the base block
/// plus the direction-aware padding, border, radius and overflow parts,
/// newline-joined with empty parts skipped.
pub fn generate_complete_css(
    props: &LayoutProps,
    kind: ContainerKind,
    defaults: &LayoutDefaults,
) -> String {
    let mut parts = vec![generate_config(props, kind, defaults).to_css_string()];

    if let Some(padding) = &props.padding {
        parts.push(edges::padding_css(padding));
    }

    let stroke = StrokeProps {
        color: props.stroke_color.as_deref(),
        weight: props.stroke_weight.as_deref(),
        style: props.stroke_style.as_deref(),
    };
    if let Some(stroke) = stroke.resolve(defaults) {
        let color_dir = props.stroke_color.as_deref().map(DirectionMap::parse);
        let weight_dir = props.stroke_weight.as_deref().map(DirectionMap::parse);
        let style_dir = props.stroke_style.as_deref().map(DirectionMap::parse);

        let color =
            tokens::resolve_color(Some(stroke.color.as_str()), Some(&defaults.color_fallback))
                .unwrap_or_else(|| defaults.color_fallback.clone());
        let weight = tokens::resolve(Some(stroke.weight.as_str()))
            .unwrap_or_else(|| defaults.stroke_weight.clone());

        parts.push(edges::border_css(
            &color,
            &weight,
            &stroke.style,
            color_dir.as_ref(),
            weight_dir.as_ref(),
            style_dir.as_ref(),
        ));
    }

    if let Some(radius) = &props.radius {
        let parsed = DirectionMap::parse(radius);
        let uniform = tokens::resolve(Some(radius.as_str()))
            .unwrap_or_else(|| defaults.radius_fallback.clone());
        parts.push(edges::radius_css(&uniform, Some(&parsed)));
    }

    if let Some(overflow) = props.overflow {
        let mapped = map_overflow(overflow, kind);
        if mapped.contains(':') {
            parts.push(mapped);
        } else {
            parts.push(format!("overflow: {mapped};"));
        }
    }

    parts.retain(|part| !part.is_empty());
    let css = parts.join("\n");
    tracing::trace!(kind = kind.as_str(), bytes = css.len(), "generated container css");
    css
}

// =============================================================================
// Tests
// =============================================================================
