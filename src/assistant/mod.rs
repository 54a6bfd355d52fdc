//! Conversation handler — one guarded turn per inbound message.
//!
//! A turn walks a fixed chain of fallible steps:
//!
//! ```text
//! Idle → Validating → Sanitizing → Classifying → Routing → Displaying → Idle
//! ```
//!
//! Each guard step either continues or ends the turn with a fixed
//! user-facing message ([`Rejection`]). [`Assistant::handle_turn`] folds the
//! whole chain into "text in, displayable text out": no failure escapes a
//! turn, and no state survives one. Channels call it concurrently without
//! locking because the assistant holds no cross-turn mutable state.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::guard::{self, Rejection, StudyQuery};
use crate::router::Router;

/// Static greeting shown when a chat session starts.
pub const GREETING: &str = "📚 Welcome! I am your Study Assistant!\n\n🤔 How can I \
assist you with your studies today? (e.g. explain calculus derivatives, summarize \
photosynthesis, create practice questions for biology, or make a study plan for \
your next exam)";

pub struct Assistant {
    router: Router,
    max_input_chars: usize,
    #[cfg(feature = "weather")]
    weather: Option<crate::weather::WeatherClient>,
}

impl Assistant {
    /// Wire the assistant from resolved config and a ready router.
    /// Secrets are assumed validated (`Config::validate`) by this point.
    pub fn new(config: &Config, router: Router) -> Result<Self, AppError> {
        #[cfg(feature = "weather")]
        let weather = if config.weather.enabled {
            let api_key = config.weather_api_key.clone().ok_or_else(|| {
                AppError::Config("WEATHER_API_KEY is not set".into())
            })?;
            Some(crate::weather::WeatherClient::new(
                config.weather.api_base_url.clone(),
                api_key,
                config.weather.timeout_seconds,
            )?)
        } else {
            None
        };

        Ok(Self {
            router,
            max_input_chars: config.assistant.max_input_chars,
            #[cfg(feature = "weather")]
            weather,
        })
    }

    /// Process one inbound message and return the text to display.
    ///
    /// Always returns something displayable; rejections become their fixed
    /// messages here.
    pub async fn handle_turn(&self, raw: &str) -> String {
        match self.run_turn(raw).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "turn completed");
                reply
            }
            Err(rejection) => {
                debug!(?rejection, "turn rejected");
                rejection.message()
            }
        }
    }

    async fn run_turn(&self, raw: &str) -> Result<String, Rejection> {
        // Validating
        guard::validate(raw, self.max_input_chars)?;

        // Sanitizing + Classifying
        let query = StudyQuery::build(raw);
        if !query.is_study_related {
            return Err(Rejection::OffTopic);
        }

        // Routing. The RoutingRequest is only built past the classifier gate.
        let text = self.augment(&query.sanitized).await;
        let reply = self.router.submit(&text).await.map_err(|e| {
            warn!(error = %e, "completion service failed");
            Rejection::Upstream
        })?;

        vet_reply(&reply)
    }

    /// Attach weather data when the extension is enabled and the query asks
    /// for meteorology with a recognizable city. Otherwise pass-through.
    #[cfg(feature = "weather")]
    async fn augment(&self, sanitized: &str) -> String {
        use crate::weather;

        let Some(client) = &self.weather else {
            return sanitized.to_string();
        };
        if !weather::wants_weather(sanitized) {
            return sanitized.to_string();
        }
        match weather::extract_city(sanitized) {
            Some(city) => {
                let data = client.fetch(&city).await;
                weather::augment(sanitized, &data)
            }
            None => sanitized.to_string(),
        }
    }

    #[cfg(not(feature = "weather"))]
    async fn augment(&self, sanitized: &str) -> String {
        sanitized.to_string()
    }
}

/// Accept a routed reply only if it is non-empty and does not carry the
/// literal word "error" (case-insensitive). Anything else is treated the
/// same as an upstream failure.
fn vet_reply(reply: &str) -> Result<String, Rejection> {
    let trimmed = reply.trim();
    if trimmed.is_empty() || trimmed.to_lowercase().contains("error") {
        return Err(Rejection::Upstream);
    }
    Ok(trimmed.to_string())
}
