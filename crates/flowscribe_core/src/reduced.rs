//! Reduced step records emitted by the projector.

use serde::Serialize;
use serde_json::Value;

/// A sub-structure that was either filtered field by field or copied as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Projected<T> {
    /// Rebuilt from the recognized sub-fields only
    Filtered(T),
    /// Copied verbatim from the raw step
    Raw(Value),
}

/// A hotspot reduced to its label.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct Hotspot {
    /// The hotspot's label, verbatim
    label: Value,
}

impl Hotspot {
    /// Create a hotspot record from its label.
    pub fn new(label: Value) -> Self {
        Self { label }
    }
}

/// The clicked element, reduced to selector, text and element type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, derive_getters::Getters)]
pub struct ClickContext {
    /// CSS selector of the clicked element
    #[serde(rename = "cssSelector", skip_serializing_if = "Option::is_none")]
    css_selector: Option<Value>,
    /// Visible text of the clicked element
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<Value>,
    /// Element type (button, link, ...)
    #[serde(rename = "elementType", skip_serializing_if = "Option::is_none")]
    element_type: Option<Value>,
}

impl ClickContext {
    /// Create a click context from its three recognized fields.
    pub fn new(
        css_selector: Option<Value>,
        text: Option<Value>,
        element_type: Option<Value>,
    ) -> Self {
        Self {
            css_selector,
            text,
            element_type,
        }
    }

    /// True when none of the recognized fields are present.
    pub fn is_empty(&self) -> bool {
        self.css_selector.is_none() && self.text.is_none() && self.element_type.is_none()
    }
}

/// A step reduced to the fields retained by a projection policy.
///
/// Absent fields are never serialized, so an empty record renders as `{}`.
/// Field declaration order fixes the key order of the rendered record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, derive_getters::Getters)]
pub struct ReducedStep {
    /// Step kind tag (`chapter`, `click`, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    step_type: Option<Value>,
    /// Step title
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Value>,
    /// Step subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<Value>,
    /// Page URL (passthrough policy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Value>,
    /// Hotspots attached to the step
    #[serde(skip_serializing_if = "Option::is_none")]
    hotspots: Option<Projected<Vec<Hotspot>>>,
    /// The element a click step targeted
    #[serde(rename = "clickContext", skip_serializing_if = "Option::is_none")]
    click_context: Option<Projected<ClickContext>>,
}

impl ReducedStep {
    pub(crate) fn from_parts(
        step_type: Option<Value>,
        title: Option<Value>,
        subtitle: Option<Value>,
        url: Option<Value>,
        hotspots: Option<Projected<Vec<Hotspot>>>,
        click_context: Option<Projected<ClickContext>>,
    ) -> Self {
        Self {
            step_type,
            title,
            subtitle,
            url,
            hotspots,
            click_context,
        }
    }

    /// True when no field survived projection.
    pub fn is_empty(&self) -> bool {
        self.step_type.is_none()
            && self.title.is_none()
            && self.subtitle.is_none()
            && self.url.is_none()
            && self.hotspots.is_none()
            && self.click_context.is_none()
    }
}
