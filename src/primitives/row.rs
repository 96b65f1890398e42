//! Row - horizontal auto-layout.
//!
//! Children flow left to right. Row is the only container that reads `wrap`;
//! unset wrap renders `flex-wrap: nowrap`.

use super::render_container;
use super::types::ContainerProps;
use crate::element::Element;
use crate::types::{ContainerKind, Wrap};

/// Render a Row container.
pub fn row(props: ContainerProps) -> Element {
    let wrap = props.layout.wrap.unwrap_or(Wrap::NoWrap);
    let component_css = format!("flex-direction: row;\nflex-wrap: {};", wrap.as_css());
    render_container(ContainerKind::Row, props, Some(component_css.as_str()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alignment, Distribution, LayoutProps};

    #[test]
    fn test_row_direction_and_default_wrap() {
        let element = row(ContainerProps::default());
        assert!(element.style.contains("flex-direction: row;"));
        assert!(element.style.contains("flex-wrap: nowrap;"));
    }

    #[test]
    fn test_row_wrap_enabled() {
        let element = row(ContainerProps {
            layout: LayoutProps {
                wrap: Some(Wrap::Wrap),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(element.style.contains("flex-wrap: wrap;"));
    }

    #[test]
    fn test_row_default_alignment() {
        // Rows default to center-left: vertically centered, packed left.
        let element = row(ContainerProps::default());
        assert!(element.style.contains("align-items: center;"));
        assert!(element.style.contains("justify-content: flex-start;"));
    }

    #[test]
    fn test_row_alignment_direct_grid() {
        let element = row(ContainerProps {
            layout: LayoutProps {
                alignment: Some(Alignment::BottomRight),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(element.style.contains("align-items: flex-end;"));
        assert!(element.style.contains("justify-content: flex-end;"));
    }

    #[test]
    fn test_row_distribution_applies() {
        let element = row(ContainerProps {
            layout: LayoutProps {
                distribution: Some(Distribution::Space),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(element.style.contains("justify-content: space-around;"));
    }
}
