//! Primitive types - component props.

use crate::element::{Attributes, Element, Node};
use crate::types::{Alignment, LayoutProps};

// =============================================================================
// Container Props
// =============================================================================

/// Props shared by the container components.
///
/// The container kind decides which layout props actually apply - Column
/// ignores `distribution`, ZStack ignores `gap` and `distribution`, only Row
/// reads `wrap`. Inapplicable props are silently dropped, matching the
/// never-crash policy of the rest of the pipeline.
///
/// # Example
///
/// ```
/// use flexkit::primitives::{box_primitive, ContainerProps};
/// use flexkit::types::{Alignment, LayoutProps, Sizing};
///
/// let element = box_primitive(ContainerProps {
///     layout: LayoutProps {
///         width: Some(Sizing::from("fill")),
///         padding: Some("x:12px y:8px".into()),
///         alignment: Some(Alignment::CenterCenter),
///         ..Default::default()
///     },
///     ..Default::default()
/// });
/// assert!(element.style.contains("display: flex;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContainerProps {
    /// The declarative layout prop set.
    pub layout: LayoutProps,
    /// CSS class for the rendered element.
    pub class_name: Option<String>,
    /// Caller CSS appended after everything generated, so it wins.
    pub style: Option<String>,
    /// Arbitrary platform/event/data/aria attributes; only the ones the
    /// component's forward policy approves reach the element.
    pub attrs: Attributes,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

// =============================================================================
// ZStack Props
// =============================================================================

/// One ZStack child: the element plus an optional explicit alignment.
///
/// A child with no alignment of its own inherits the container's.
#[derive(Debug, Clone, PartialEq)]
pub struct StackItem {
    pub alignment: Option<Alignment>,
    pub element: Element,
}

impl StackItem {
    /// Child that inherits the container alignment.
    pub fn new(element: Element) -> Self {
        Self {
            alignment: None,
            element,
        }
    }

    /// Child with its own alignment, overriding the container's.
    pub fn aligned(alignment: Alignment, element: Element) -> Self {
        Self {
            alignment: Some(alignment),
            element,
        }
    }
}

impl From<Element> for StackItem {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

/// Props for the ZStack component.
#[derive(Debug, Clone, Default)]
pub struct ZStackProps {
    /// The declarative layout prop set (`gap`/`distribution` are ignored).
    pub layout: LayoutProps,
    /// CSS class for the rendered element.
    pub class_name: Option<String>,
    /// Caller CSS appended after everything generated.
    pub style: Option<String>,
    /// Arbitrary attributes, filtered through the ZStack forward policy.
    pub attrs: Attributes,
    /// Stacked children; the first is rendered on top.
    pub children: Vec<StackItem>,
}
