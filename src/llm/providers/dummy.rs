//! Dummy LLM provider — no network, deterministic replies.
//!
//! Used for offline runs and for testing the full turn pipeline without a
//! real API key. `echo` prefixes the input, `canned` returns a fixed reply,
//! `failing` simulates an upstream outage.

use crate::llm::ProviderError;

#[derive(Debug, Clone)]
enum Mode {
    Echo,
    Canned(String),
    Fail,
}

#[derive(Debug, Clone)]
pub struct DummyProvider {
    mode: Mode,
}

impl DummyProvider {
    /// Echo the prompt back prefixed with `[echo]`.
    pub fn echo() -> Self {
        Self { mode: Mode::Echo }
    }

    /// Always return `reply` regardless of input.
    pub fn canned(reply: impl Into<String>) -> Self {
        Self { mode: Mode::Canned(reply.into()) }
    }

    /// Always fail, as if the upstream service were down.
    pub fn failing() -> Self {
        Self { mode: Mode::Fail }
    }

    pub async fn complete(&self, content: &str) -> Result<String, ProviderError> {
        match &self.mode {
            Mode::Echo => Ok(format!("[echo] {content}")),
            Mode::Canned(reply) => Ok(reply.clone()),
            Mode::Fail => Err(ProviderError::Request("simulated outage".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_prefixes_input() {
        let p = DummyProvider::echo();
        assert_eq!(p.complete("hello").await.unwrap(), "[echo] hello");
    }

    #[tokio::test]
    async fn canned_ignores_input() {
        let p = DummyProvider::canned("fixed");
        assert_eq!(p.complete("anything").await.unwrap(), "fixed");
    }

    #[tokio::test]
    async fn failing_returns_request_error() {
        let p = DummyProvider::failing();
        let err = p.complete("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }
}
