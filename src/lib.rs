//! # flexkit
//!
//! Figma-Auto-Layout-inspired container primitives compiled to CSS.
//!
//! Four components - Box, Row, Column and ZStack - take a declarative
//! layout prop set (alignment, gap, padding,
//! fill, stroke, radius, distribution, overflow) and compile it to CSS
//! declaration text on a plain element value. No layout is computed here;
//! the generated flexbox/box-model CSS delegates that to the browser.
//!
//! The pipeline is purely data-in, data-out:
//! ```text
//! LayoutProps → token resolver + direction parser → declaration set → Element
//! ```
//!
//! Values may be literal CSS (`"10px"`), the `hug`/`fill` sizing sentinels,
//! design-token references (`"$spacing-lg"` → `var(--spacing-lg)`) or the
//! directional mini-syntax (`"x:10px y:20px"`, `"top-left:8px"`). Invalid
//! input never panics - it degrades to a documented default or drops out of
//! the output.
//!
//! ## Example
//!
//! ```
//! use flexkit::primitives::{row, ContainerProps};
//! use flexkit::types::{LayoutProps, Sizing};
//!
//! let element = row(ContainerProps {
//!     layout: LayoutProps {
//!         width: Some(Sizing::from("fill")),
//!         gap: Some("$spacing-sm".into()),
//!         padding: Some("x:16px y:8px".into()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! });
//! assert!(element.style.contains("flex-direction: row;"));
//! assert!(element.style.contains("gap: var(--spacing-sm);"));
//! ```
//!
//! ## Modules
//!
//! - [`types`] - core vocabulary (container kinds, alignment grid, sizing)
//! - [`config`] - the immutable defaults table
//! - [`tokens`] - design-token resolution (`$name` → `var(--name)`)
//! - [`direction`] - the directional mini-syntax tokenizer
//! - [`css`] - declaration sets, the container dispatch table, edge emitters
//! - [`attrs`] - DOM-attribute forwarding filters
//! - [`element`] - the rendered element tree
//! - [`primitives`] - the component shells

pub mod attrs;
pub mod config;
pub mod css;
pub mod direction;
pub mod element;
pub mod primitives;
pub mod tokens;
pub mod types;

// Re-export commonly used items
pub use types::{
    Alignment, AxisAlign, ContainerKind, Distribution, LayoutProps, Overflow, ParseKeywordError,
    Sizing, StrokeStyle, Wrap,
};

pub use config::LayoutDefaults;

pub use tokens::{resolve, resolve_color, resolve_opacity, ResolvedStroke, StrokeProps};

pub use direction::{directional_value, parse_direction, DirectionKey, DirectionMap};

pub use css::{
    edges::{border_css, padding_css, radius_css},
    kebab_case,
    mapper::{
        container_spec, default_alignment, flex_direction, generate_complete_css,
        generate_config, map_alignment, map_distribution, map_overflow, map_size,
        ContainerSpec, Features, FlexAlignment,
    },
    Declarations,
};

pub use attrs::{
    classify, is_aria_attr, is_data_attr, is_event_attr, is_layout_internal_attr,
    is_standard_attr, policy_for, smart_should_forward, AttrClass, ForwardPolicy,
};

pub use element::{Attributes, Element, Node};

pub use primitives::{
    box_primitive, column, row, zstack, ContainerProps, StackItem, ZStackProps,
};
