//! Raw flow document types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recorded step, kept as the raw field mapping from the flow file.
///
/// # Examples
///
/// ```
/// use flowscribe_core::Step;
/// use serde_json::json;
///
/// let step = Step::from_value(json!({"type": "click", "title": "Buy"}));
/// assert_eq!(step.get("title"), Some(&json!("Buy")));
///
/// // Anything that is not a mapping carries no fields.
/// assert!(Step::from_value(json!("oops")).fields().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(Map<String, Value>);

impl Step {
    /// Wrap an already-parsed field mapping.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a step from an arbitrary JSON value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// All fields in document order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Step {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// A recorded user journey: an ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct Flow {
    /// Steps in recording order
    steps: Vec<Step>,
}

impl Flow {
    /// Create a flow from its steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Consume the flow, yielding its steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the flow has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
