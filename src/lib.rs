//! Studymate — a chat-based study assistant.
//!
//! A thin, guardrailed routing layer over a hosted LLM completion API.
//! Inbound text is validated, sanitized, and subject-gated before a single
//! prompt (routing policy + four responder profiles + the text) is sent to
//! the completion service, which performs the actual intent routing. See
//! [`assistant::Assistant`] for the per-turn pipeline.

pub mod assistant;
pub mod channel;
pub mod config;
pub mod error;
pub mod guard;
pub mod llm;
pub mod logger;
pub mod router;

#[cfg(feature = "weather")]
pub mod weather;
