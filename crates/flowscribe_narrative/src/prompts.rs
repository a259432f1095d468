//! Instruction templates sent to the generation service.

/// Step type used for section headings in recorded flows.
pub const CHAPTER_STEP_TYPE: &str = "chapter";

/// Instruction asking for a numbered walkthrough plus an intent summary.
///
/// `records_json` is embedded verbatim.
pub fn summary_prompt(records_json: &str) -> String {
    format!(
        r#"Below is a JSON list of steps recorded while a user walked through a web application.
Each step may carry a type, a title, a subtitle, hotspots (labels of the elements the user was guided to) and a clickContext (the element the user clicked).

Steps of type "{CHAPTER_STEP_TYPE}" are section headings. Use them as context for the steps that follow; they are not user actions.

Write your answer in Markdown with exactly two sections:

## Steps
A numbered list of the actions the user took, in order, written for a non-technical reader. Describe what the user did and why it matters, not how the page is built. Do not mention CSS selectors, element types or URLs.

## Summary
A short paragraph describing what the user was trying to accomplish overall.

Recorded steps:
{records_json}
"#
    )
}

/// Instruction asking for one illustration of the narrated journey.
pub fn illustration_prompt(narrative: &str) -> String {
    format!(
        r#"Create a single professional illustration for a social media post announcing a product feature.
The image should convey the user journey described below at a glance: clean, modern and friendly, suitable for a company's announcement post.
You may leave out minor steps and focus on the moments that best show what the feature does.
Avoid dense text in the image.

User journey:
{narrative}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prompt_embeds_records_and_chapter_rule() {
        let prompt = summary_prompt("[{\"type\": \"chapter\"}]");
        assert!(prompt.contains("[{\"type\": \"chapter\"}]"));
        assert!(prompt.contains("Steps of type \"chapter\" are section headings"));
        assert!(prompt.contains("## Summary"));
    }

    #[test]
    fn illustration_prompt_embeds_narrative() {
        let prompt = illustration_prompt("1. Opened the cart");
        assert!(prompt.ends_with("1. Opened the cart\n"));
        assert!(prompt.contains("single professional illustration"));
    }
}
