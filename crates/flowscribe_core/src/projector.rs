//! Field projection from raw steps to reduced records.

use crate::{ClickContext, Hotspot, Projected, ProjectionPolicy, ReducedStep, Step};
use serde_json::Value;

/// Reduce one step under the given policy.
///
/// Never fails: sub-structures with an unexpected shape are left out.
///
/// # Examples
///
/// ```
/// use flowscribe_core::{ProjectionPolicy, Step, project};
/// use serde_json::json;
///
/// let step = Step::from_value(json!({
///     "type": "click",
///     "hotspots": [{"label": "Buy", "x": 10}, {"x": 20}],
/// }));
/// let reduced = project(&step, ProjectionPolicy::Strict);
/// assert_eq!(
///     serde_json::to_value(&reduced).unwrap(),
///     json!({"type": "click", "hotspots": [{"label": "Buy"}]})
/// );
/// ```
pub fn project(step: &Step, policy: ProjectionPolicy) -> ReducedStep {
    match policy {
        ProjectionPolicy::Strict => project_strict(step),
        ProjectionPolicy::Passthrough => project_passthrough(step),
    }
}

/// Reduce every step, preserving order.
pub fn project_all(steps: &[Step], policy: ProjectionPolicy) -> Vec<ReducedStep> {
    steps.iter().map(|step| project(step, policy)).collect()
}

fn project_strict(step: &Step) -> ReducedStep {
    let hotspots = step
        .get("hotspots")
        .and_then(Value::as_array)
        .map(|raw| {
            raw.iter()
                .filter_map(|hotspot| hotspot.get("label").cloned().map(Hotspot::new))
                .collect::<Vec<_>>()
        })
        .filter(|labels| !labels.is_empty())
        .map(Projected::Filtered);

    let click_context = step
        .get("clickContext")
        .and_then(Value::as_object)
        .map(|raw| {
            ClickContext::new(
                raw.get("cssSelector").cloned(),
                raw.get("text").cloned(),
                raw.get("elementType").cloned(),
            )
        })
        .filter(|context| !context.is_empty())
        .map(Projected::Filtered);

    ReducedStep::from_parts(
        step.get("type").cloned(),
        step.get("title").cloned(),
        step.get("subtitle").cloned(),
        None,
        hotspots,
        click_context,
    )
}

fn project_passthrough(step: &Step) -> ReducedStep {
    ReducedStep::from_parts(
        step.get("type").cloned(),
        step.get("title").cloned(),
        step.get("subtitle").cloned(),
        step.get("url").cloned(),
        step.get("hotspots").cloned().map(Projected::Raw),
        step.get("clickContext").cloned().map(Projected::Raw),
    )
}
