//! Narrative and illustration requests for recorded flows.
//!
//! [`NarrativeRequester`] turns reduced step records into a plain-language
//! walkthrough; [`IllustrationRequester`] turns that walkthrough into an
//! image written to the output storage.
//!
//! Neither ever returns an error to its caller. Failures come back as an
//! error string or `false`, and are logged.
//!
//! # Example
//!
//! ```no_run
//! use flowscribe_core::{ProjectionPolicy, ReasoningEffort, load_or_empty, project_all};
//! use flowscribe_models::OpenAiClient;
//! use flowscribe_narrative::NarrativeRequester;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let records = project_all(&load_or_empty("flow.json"), ProjectionPolicy::Strict);
//! let client = Arc::new(OpenAiClient::from_env("OPENAI_API_KEY", "https://api.openai.com/v1"));
//! let requester = NarrativeRequester::new(client, "gpt-5", Some(ReasoningEffort::Low));
//! let narrative = requester.summarize(&records).await;
//! println!("{}", narrative);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod illustrator;
mod prompts;
mod summarizer;

pub use illustrator::IllustrationRequester;
pub use prompts::{CHAPTER_STEP_TYPE, illustration_prompt, summary_prompt};
pub use summarizer::{NarrativeRequester, describe_failure};
