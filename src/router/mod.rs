//! Intent router — delegates responder selection to the completion service.
//!
//! The router holds the routing policy, the four responder profiles, and
//! the provider handle. It performs no local intent classification: the
//! policy, the responder descriptions, and the user text are embedded into
//! a single prompt and the language model makes the call. The model's text
//! comes back verbatim; vetting it is the conversation handler's job.

pub mod profiles;
pub mod prompt;

pub use profiles::{ResponderProfile, RESPONDERS, ROUTING_POLICY};

use tracing::debug;

use crate::llm::{LlmProvider, ProviderError};
use prompt::PromptBuilder;

pub struct Router {
    provider: LlmProvider,
}

impl Router {
    pub fn new(provider: LlmProvider) -> Self {
        Self { provider }
    }

    /// Assemble the full routing prompt for `text`.
    ///
    /// Layers: policy, one block per responder, then the user input.
    pub fn routing_prompt(text: &str) -> String {
        let mut builder = PromptBuilder::new().append(ROUTING_POLICY);
        for responder in &RESPONDERS {
            builder = builder.append(format!("## {}\n{}", responder.name, responder.instructions));
        }
        builder
            .append("User input: {{input}}")
            .var("input", text)
            .build()
    }

    /// Submit `text` for routing and completion. One round-trip; provider
    /// failures propagate to the caller untouched.
    pub async fn submit(&self, text: &str) -> Result<String, ProviderError> {
        let prompt = Self::routing_prompt(text);
        debug!(prompt_len = prompt.len(), "submitting routing request");
        self.provider.complete(&prompt).await
    }
}
