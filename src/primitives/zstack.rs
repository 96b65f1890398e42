//! ZStack - stacked children, absolutely positioned.
//!
//! The container is a plain positioned frame (no flexbox); each child is
//! positioned absolutely inside it. The first child in source order renders
//! on top - it receives the highest stacking index. A child's explicit
//! alignment overrides the alignment inherited from the container.

use super::forward_attributes;
use super::types::ZStackProps;
use super::RESET_CSS;
use crate::attrs::policy_for;
use crate::config::LayoutDefaults;
use crate::css::mapper::generate_complete_css;
use crate::element::{Element, Node};
use crate::types::{Alignment, ContainerKind};

/// Positioning declarations for a child alignment: edge offsets plus a
/// centering transform where an axis centers.
const fn alignment_offsets(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::TopLeft => "top: 0;\nleft: 0;",
        Alignment::TopCenter => "top: 0;\nleft: 50%;\ntransform: translateX(-50%);",
        Alignment::TopRight => "top: 0;\nright: 0;",
        Alignment::CenterLeft => "top: 50%;\nleft: 0;\ntransform: translateY(-50%);",
        Alignment::CenterCenter => "top: 50%;\nleft: 50%;\ntransform: translate(-50%, -50%);",
        Alignment::CenterRight => "top: 50%;\nright: 0;\ntransform: translateY(-50%);",
        Alignment::BottomLeft => "bottom: 0;\nleft: 0;",
        Alignment::BottomCenter => "bottom: 0;\nleft: 50%;\ntransform: translateX(-50%);",
        Alignment::BottomRight => "bottom: 0;\nright: 0;",
    }
}

/// Render a ZStack container.
///
/// Children keep their document order in the output; stacking comes from
/// `z-index` alone, so with `n` children the first gets `n` and the last
/// gets `1`. The whole transform is recomputed from the current child list
/// on every call - nothing is kept between renders.
pub fn zstack(props: ZStackProps) -> Element {
    let defaults = LayoutDefaults::global();
    let mut element = Element::new("div");

    element.append_style(&generate_complete_css(
        &props.layout,
        ContainerKind::ZStack,
        defaults,
    ));
    element.append_style("position: relative;");
    element.append_style(RESET_CSS);
    if let Some(custom) = &props.style {
        element.append_style(custom);
    }

    element.attributes = forward_attributes(&props.attrs, policy_for(ContainerKind::ZStack));
    if let Some(class) = &props.class_name {
        element
            .attributes
            .insert("class".to_string(), class.clone());
    }

    let inherited = props.layout.alignment;
    let count = props.children.len();
    tracing::debug!(children = count, "stacking zstack children");

    for (index, item) in props.children.into_iter().enumerate() {
        let alignment = item
            .alignment
            .or(inherited)
            .unwrap_or(defaults.zstack_alignment);
        let mut child = item.element;
        child.append_style(&format!("position: absolute;\nz-index: {};", count - index));
        child.append_style(alignment_offsets(alignment));
        element.children.push(Node::Element(child));
    }

    element
}

// =============================================================================
// Tests
// =============================================================================
