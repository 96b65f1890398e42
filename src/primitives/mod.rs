//! Component shells - Box, Row, Column, ZStack.
//!
//! Each shell is a pure function from props to an [`Element`]: it compiles
//! the layout props into declaration text, layers the component-specific and
//! caller CSS on top, and forwards only the attributes its policy approves.
//! Nothing is cached between calls; every render recomputes from scratch.

pub mod box_primitive;
pub mod column;
pub mod row;
pub mod types;
pub mod zstack;

pub use box_primitive::box_primitive;
pub use column::column;
pub use row::row;
pub use types::{ContainerProps, StackItem, ZStackProps};
pub use zstack::zstack;

use crate::attrs::{ForwardPolicy, policy_for};
use crate::config::LayoutDefaults;
use crate::css::mapper::generate_complete_css;
use crate::element::{Attributes, Element};
use crate::types::ContainerKind;

/// Reset appended to every container, after the generated block.
pub(crate) const RESET_CSS: &str = "box-sizing: border-box;\nmargin: 0;";

/// Keep only the attributes the policy forwards, preserving order.
pub(crate) fn forward_attributes(attrs: &Attributes, policy: &ForwardPolicy) -> Attributes {
    attrs
        .iter()
        .filter(|(name, _)| policy.should_forward(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Shared shell for the flex containers (Box, Row, Column).
///
/// Style layers, in order: generated layout CSS, component-specific CSS,
/// the reset, then the caller's `style` prop - later layers win.
pub(crate) fn render_container(
    kind: ContainerKind,
    props: types::ContainerProps,
    component_css: Option<&str>,
) -> Element {
    let defaults = LayoutDefaults::global();
    let mut element = Element::new("div");

    element.append_style(&generate_complete_css(&props.layout, kind, defaults));
    if let Some(css) = component_css {
        element.append_style(css);
    }
    element.append_style(RESET_CSS);
    if let Some(custom) = &props.style {
        element.append_style(custom);
    }

    element.attributes = forward_attributes(&props.attrs, policy_for(kind));
    if let Some(class) = &props.class_name {
        element
            .attributes
            .insert("class".to_string(), class.clone());
    }
    element.children = props.children;
    element
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Attributes;

    #[test]
    fn test_forward_attributes_filters() {
        let mut attrs = Attributes::new();
        attrs.insert("data-testid".into(), "frame".into());
        attrs.insert("width".into(), "100px".into());
        attrs.insert("onClick".into(), "handle()".into());
        attrs.insert("$internal".into(), "x".into());

        let forwarded = forward_attributes(&attrs, policy_for(ContainerKind::Box));
        assert_eq!(forwarded.len(), 2);
        assert!(forwarded.contains_key("data-testid"));
        assert!(forwarded.contains_key("onClick"));
        assert!(!forwarded.contains_key("width"));
        assert!(!forwarded.contains_key("$internal"));
    }

    #[test]
    fn test_forward_attributes_keeps_order() {
        let mut attrs = Attributes::new();
        attrs.insert("id".into(), "a".into());
        attrs.insert("gap".into(), "8px".into());
        attrs.insert("role".into(), "group".into());

        let forwarded = forward_attributes(&attrs, policy_for(ContainerKind::Box));
        let names: Vec<&str> = forwarded.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["id", "role"]);
    }
}
