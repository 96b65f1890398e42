//! Box - the free-form container.
//!
//! The fundamental frame: vertical flex layout by default, honoring the full
//! layout prop set including `distribution`.

use super::render_container;
use super::types::ContainerProps;
use crate::element::Element;
use crate::types::ContainerKind;

/// Render a Box container.
pub fn box_primitive(props: ContainerProps) -> Element {
    render_container(ContainerKind::Box, props, None)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Attributes;
    use crate::types::{Alignment, Distribution, LayoutProps, Sizing};

    #[test]
    fn test_box_defaults() {
        let element = box_primitive(ContainerProps::default());
        assert_eq!(element.tag, "div");
        assert!(element.style.contains("display: flex;"));
        assert!(element.style.contains("flex-direction: column;"));
        // Box defaults to top-left.
        assert!(element.style.contains("align-items: flex-start;"));
        assert!(element.style.contains("justify-content: flex-start;"));
        assert!(element.style.contains("box-sizing: border-box;"));
        assert!(element.style.contains("margin: 0;"));
    }

    #[test]
    fn test_box_layout_props() {
        let element = box_primitive(ContainerProps {
            layout: LayoutProps {
                width: Some(Sizing::from("fill")),
                height: Some(Sizing::from("hug")),
                alignment: Some(Alignment::CenterCenter),
                gap: Some("$spacing-sm".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(element.style.contains("width: 100%;"));
        assert!(element.style.contains("height: fit-content;"));
        assert!(element.style.contains("align-items: center;"));
        assert!(element.style.contains("justify-content: center;"));
        assert!(element.style.contains("gap: var(--spacing-sm);"));
    }

    #[test]
    fn test_box_distribution_applies() {
        let element = box_primitive(ContainerProps {
            layout: LayoutProps {
                distribution: Some(Distribution::SpaceBetween),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(element.style.contains("justify-content: space-between;"));
    }

    #[test]
    fn test_box_custom_style_wins() {
        let element = box_primitive(ContainerProps {
            style: Some("background: papayawhip;".into()),
            ..Default::default()
        });
        // Caller CSS lands last.
        assert!(element.style.ends_with("background: papayawhip;"));
    }

    #[test]
    fn test_box_attribute_forwarding() {
        let mut attrs = Attributes::new();
        attrs.insert("data-testid".into(), "box".into());
        attrs.insert("padding".into(), "10px".into());
        let element = box_primitive(ContainerProps {
            class_name: Some("card".into()),
            attrs,
            ..Default::default()
        });
        assert_eq!(element.attributes.get("data-testid").map(String::as_str), Some("box"));
        assert_eq!(element.attributes.get("class").map(String::as_str), Some("card"));
        assert!(!element.attributes.contains_key("padding"));
    }

    #[test]
    fn test_box_children_kept_in_order() {
        let element = box_primitive(ContainerProps {
            children: vec!["first".into(), "second".into()],
            ..Default::default()
        });
        assert_eq!(element.children.len(), 2);
        assert!(element.to_html().contains("firstsecond"));
    }
}
