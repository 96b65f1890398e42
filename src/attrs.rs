//! Attribute forwarding filters.
//!
//! Components accept arbitrary attributes alongside their layout props; only
//! some of them belong on the rendered DOM node. Every attribute name falls
//! into exactly one [`AttrClass`], and a [`ForwardPolicy`] - an ordered list
//! of predicate/action rules - decides forwarding. Unknown names forward by
//! default so future platform attributes keep working.
//!
//! Rule order is part of the contract: event/data/aria checks run BEFORE the
//! internal-layout block, so a name shaped like an event handler that also
//! collides with an internal keyword is forwarded ("event prop wins").

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::types::ContainerKind;

// =============================================================================
// Attribute sets
// =============================================================================

/// Layout prop names (and their CSS-property aliases) that never reach the
/// DOM - the components consume these themselves.
static INTERNAL_LAYOUT_ATTRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Layout props
        "width",
        "height",
        "minWidth",
        "maxWidth",
        "minHeight",
        "maxHeight",
        "alignment",
        "gap",
        "padding",
        "distribution",
        "wrap",
        "overflow",
        // Visual props
        "fill",
        "strokeColor",
        "strokeWeight",
        "strokeStyle",
        "radius",
        "opacity",
        // CSS-property aliases, filtered as a backstop
        "backgroundColor",
        "color",
        "margin",
        "border",
        "borderRadius",
        "position",
        "top",
        "left",
        "right",
        "bottom",
        "zIndex",
        "display",
        "flexDirection",
        "flex",
        "flexWrap",
        "flexBasis",
        "justifyContent",
        "alignItems",
        "alignContent",
        "boxShadow",
        "transform",
        "transition",
        "fontFamily",
        "fontSize",
        "fontWeight",
        "lineHeight",
        "textAlign",
        "textDecoration",
        "whiteSpace",
        "overflowX",
        "overflowY",
    ]
    .into_iter()
    .collect()
});

/// Standard platform attributes that always forward.
static STANDARD_ATTRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Global attributes
        "id",
        "class",
        "className",
        "style",
        "title",
        "lang",
        "dir",
        "hidden",
        "tabIndex",
        "draggable",
        "contentEditable",
        "spellCheck",
        "accessKey",
        "role",
        // Test hooks
        "data-testid",
        "data-cy",
        "data-qa",
        // Form attributes
        "name",
        "value",
        "checked",
        "disabled",
        "readOnly",
        "required",
        "multiple",
        "size",
        "maxLength",
        "minLength",
        "pattern",
        "min",
        "max",
        "step",
        "autoComplete",
        "autoFocus",
        "inputMode",
        "list",
        "placeholder",
        // Media attributes
        "src",
        "srcSet",
        "alt",
        "sizes",
        "crossOrigin",
        "decoding",
        "loading",
        "poster",
        "preload",
        "controls",
        "loop",
        "muted",
        "playsInline",
        // Link attributes
        "href",
        "target",
        "rel",
        "download",
        "hrefLang",
        "type",
        "referrerPolicy",
        "ping",
    ]
    .into_iter()
    .collect()
});

// =============================================================================
// Predicates
// =============================================================================

/// Event-handler shape: `on` followed by an uppercase-starting identifier
/// (`onClick`, `onMouseEnter`). The character after the prefix must not be
/// lowercase, so `onclick` does not qualify but `on1Click` does.
pub fn is_event_attr(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("on") else {
        return false;
    };
    match rest.chars().next() {
        Some(ch) => !ch.is_lowercase(),
        None => false,
    }
}

/// `data-*` attribute.
pub fn is_data_attr(name: &str) -> bool {
    name.starts_with("data-")
}

/// `aria-*` attribute.
pub fn is_aria_attr(name: &str) -> bool {
    name.starts_with("aria-")
}

/// Member of the internal layout-prop set.
pub fn is_layout_internal_attr(name: &str) -> bool {
    INTERNAL_LAYOUT_ATTRS.contains(name)
}

/// Member of the standard platform allow-list.
pub fn is_standard_attr(name: &str) -> bool {
    STANDARD_ATTRS.contains(name)
}

// =============================================================================
// Classification
// =============================================================================

/// The class an attribute name belongs to. Every name maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrClass {
    /// Sigil-prefixed transient name, never forwarded.
    Transient,
    /// Internal layout prop, never forwarded.
    LayoutInternal,
    /// Event handler (`onClick`), forwarded.
    Event,
    /// `data-*`, forwarded.
    Data,
    /// `aria-*`, forwarded.
    Aria,
    /// Standard platform attribute, forwarded.
    Standard,
    /// Anything else; forwarded under the open policy.
    Unknown,
}

/// Classify an attribute name.
pub fn classify(name: &str) -> AttrClass {
    if name.starts_with('$') {
        AttrClass::Transient
    } else if is_layout_internal_attr(name) {
        AttrClass::LayoutInternal
    } else if is_event_attr(name) {
        AttrClass::Event
    } else if is_data_attr(name) {
        AttrClass::Data
    } else if is_aria_attr(name) {
        AttrClass::Aria
    } else if is_standard_attr(name) {
        AttrClass::Standard
    } else {
        AttrClass::Unknown
    }
}

// =============================================================================
// Forward Policy
// =============================================================================

/// One predicate in the rule list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    Transient,
    Event,
    Data,
    Aria,
    Internal,
    Standard,
}

/// The fixed rule order with each rule's forwarding action. Event, data and
/// aria run before the internal block on purpose - see the module docs.
const RULES: &[(RuleKind, bool)] = &[
    (RuleKind::Transient, false),
    (RuleKind::Event, true),
    (RuleKind::Data, true),
    (RuleKind::Aria, true),
    (RuleKind::Internal, false),
    (RuleKind::Standard, true),
];

/// An ordered attribute-forwarding policy, optionally extending the internal
/// block with component-specific names.
#[derive(Debug, Clone, Copy)]
pub struct ForwardPolicy {
    extra_internal: &'static [&'static str],
}

impl ForwardPolicy {
    /// Build a policy with additional internal (blocked) names.
    pub const fn new(extra_internal: &'static [&'static str]) -> Self {
        Self { extra_internal }
    }

    fn matches(&self, rule: RuleKind, name: &str) -> bool {
        match rule {
            RuleKind::Transient => name.starts_with('$'),
            RuleKind::Event => is_event_attr(name),
            RuleKind::Data => is_data_attr(name),
            RuleKind::Aria => is_aria_attr(name),
            RuleKind::Internal => {
                is_layout_internal_attr(name) || self.extra_internal.contains(&name)
            }
            RuleKind::Standard => is_standard_attr(name),
        }
    }

    /// Decide whether an attribute reaches the DOM. The first matching rule
    /// wins; names no rule claims forward by default.
    pub fn should_forward(&self, name: &str) -> bool {
        for (rule, forward) in RULES {
            if self.matches(*rule, name) {
                return *forward;
            }
        }
        true
    }
}

static SMART_POLICY: ForwardPolicy = ForwardPolicy::new(&[]);
static BOX_POLICY: ForwardPolicy = ForwardPolicy::new(&["distribution"]);
static COLUMN_POLICY: ForwardPolicy = ForwardPolicy::new(&["distribution"]);
static ROW_POLICY: ForwardPolicy = ForwardPolicy::new(&["distribution", "wrap"]);
static ZSTACK_POLICY: ForwardPolicy = ForwardPolicy::new(&["gap", "distribution"]);

/// The component-specific policy for a container kind.
pub fn policy_for(kind: ContainerKind) -> &'static ForwardPolicy {
    match kind {
        ContainerKind::Box => &BOX_POLICY,
        ContainerKind::Column => &COLUMN_POLICY,
        ContainerKind::Row => &ROW_POLICY,
        ContainerKind::ZStack => &ZSTACK_POLICY,
    }
}

/// The base policy with no component-specific extensions.
pub fn smart_should_forward(name: &str) -> bool {
    SMART_POLICY.should_forward(name)
}

// =============================================================================
// Tests
// =============================================================================
