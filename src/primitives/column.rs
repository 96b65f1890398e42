//! Column - vertical auto-layout.
//!
//! Children stack top to bottom; the cross axis always centers and
//! `distribution` is ignored.

use super::render_container;
use super::types::ContainerProps;
use crate::element::Element;
use crate::types::ContainerKind;

/// Render a Column container.
pub fn column(props: ContainerProps) -> Element {
    render_container(
        ContainerKind::Column,
        props,
        Some("flex-direction: column;"),
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Alignment, Distribution, LayoutProps};

    #[test]
    fn test_column_direction() {
        let element = column(ContainerProps::default());
        assert!(element.style.contains("flex-direction: column;"));
    }

    #[test]
    fn test_column_cross_axis_centers() {
        for alignment in Alignment::ALL {
            let element = column(ContainerProps {
                layout: LayoutProps {
                    alignment: Some(alignment),
                    ..Default::default()
                },
                ..Default::default()
            });
            assert!(
                element.style.contains("align-items: center;"),
                "column with {alignment:?} must center its cross axis"
            );
        }
    }

    #[test]
    fn test_column_main_axis_follows_vertical() {
        let element = column(ContainerProps {
            layout: LayoutProps {
                alignment: Some(Alignment::BottomCenter),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(element.style.contains("justify-content: flex-end;"));
    }

    #[test]
    fn test_column_ignores_distribution() {
        let element = column(ContainerProps {
            layout: LayoutProps {
                distribution: Some(Distribution::SpaceBetween),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(!element.style.contains("space-between"));
    }
}
