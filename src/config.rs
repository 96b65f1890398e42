//! Static defaults for the layout system.
//!
//! A single immutable [`LayoutDefaults`] value is built once at first use and
//! handed by reference into the generator functions. Hosts that want
//! different defaults construct their own value and pass it explicitly; the
//! global is never mutated.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::{Alignment, ContainerKind};

static GLOBAL: Lazy<LayoutDefaults> = Lazy::new(LayoutDefaults::default);

/// The defaults table: per-container alignment plus the fallback values the
/// token and stroke resolvers reach for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutDefaults {
    /// Fallback embedded in color-token references (`var(--x, <fallback>)`).
    pub color_fallback: String,
    /// Stroke color used when another stroke prop implies a border.
    pub stroke_color: String,
    /// Stroke weight used when another stroke prop implies a border.
    pub stroke_weight: String,
    /// Stroke line style used when another stroke prop implies a border.
    pub stroke_style: String,
    /// Uniform radius used when the radius value resolves to nothing.
    pub radius_fallback: String,

    /// Default alignment for Box containers.
    pub box_alignment: Alignment,
    /// Default alignment for Column containers (top, horizontally centered).
    pub column_alignment: Alignment,
    /// Default alignment for Row containers (left, vertically centered).
    pub row_alignment: Alignment,
    /// Default alignment for ZStack containers (fully centered).
    pub zstack_alignment: Alignment,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            color_fallback: "#000000".to_string(),
            stroke_color: "$border".to_string(),
            stroke_weight: "1px".to_string(),
            stroke_style: "solid".to_string(),
            radius_fallback: "0".to_string(),
            box_alignment: Alignment::TopLeft,
            column_alignment: Alignment::TopCenter,
            row_alignment: Alignment::CenterLeft,
            zstack_alignment: Alignment::CenterCenter,
        }
    }
}

impl LayoutDefaults {
    /// The process-wide defaults table.
    pub fn global() -> &'static LayoutDefaults {
        &GLOBAL
    }

    /// Default alignment for a container kind.
    pub const fn alignment_for(&self, kind: ContainerKind) -> Alignment {
        match kind {
            ContainerKind::Box => self.box_alignment,
            ContainerKind::Column => self.column_alignment,
            ContainerKind::Row => self.row_alignment,
            ContainerKind::ZStack => self.zstack_alignment,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alignments() {
        let defaults = LayoutDefaults::default();
        assert_eq!(defaults.alignment_for(ContainerKind::Box), Alignment::TopLeft);
        assert_eq!(
            defaults.alignment_for(ContainerKind::Column),
            Alignment::TopCenter
        );
        assert_eq!(
            defaults.alignment_for(ContainerKind::Row),
            Alignment::CenterLeft
        );
        assert_eq!(
            defaults.alignment_for(ContainerKind::ZStack),
            Alignment::CenterCenter
        );
    }

    #[test]
    fn test_global_is_default() {
        assert_eq!(*LayoutDefaults::global(), LayoutDefaults::default());
    }

    #[test]
    fn test_stroke_defaults() {
        let defaults = LayoutDefaults::default();
        assert_eq!(defaults.stroke_color, "$border");
        assert_eq!(defaults.stroke_weight, "1px");
        assert_eq!(defaults.stroke_style, "solid");
        assert_eq!(defaults.color_fallback, "#000000");
    }

    #[test]
    fn test_serde_overrides() {
        let defaults: LayoutDefaults =
            serde_json::from_str(r##"{ "colorFallback": "#ffffff" }"##).unwrap();
        assert_eq!(defaults.color_fallback, "#ffffff");
        // Everything else keeps its default.
        assert_eq!(defaults.stroke_weight, "1px");
    }
}
