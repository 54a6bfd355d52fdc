//! Weather augmentation for meteorology queries (feature `weather`).
//!
//! When enabled in config, a turn whose text mentions `meteorology` and
//! names a city gets current conditions attached to the routed text. Lookup
//! failures are captured inline as `{"error": "..."}` rather than raised;
//! the turn proceeds either way.

use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::AppError;

/// Client for the WeatherAPI current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(
        api_base_url: String,
        api_key: String,
        timeout_seconds: u64,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| AppError::Weather(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, api_base_url, api_key })
    }

    /// Fetch current conditions for `city`.
    ///
    /// Never fails: transport problems, non-2xx statuses, and unparsable
    /// bodies all come back as `{"error": "..."}`.
    pub async fn fetch(&self, city: &str) -> Value {
        debug!(%city, "fetching weather data");
        let result = self
            .client
            .get(&self.api_base_url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(%city, error = %e, "weather request failed (transport)");
                return json!({ "error": format!("Failed to fetch weather data: {e}") });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%city, %status, "weather request returned HTTP error");
            return json!({ "error": format!("Failed to fetch weather data: HTTP {status}") });
        }

        match response.json::<Value>().await {
            Ok(v) => v,
            Err(e) => {
                warn!(%city, error = %e, "weather response body unparsable");
                json!({ "error": format!("Failed to fetch weather data: {e}") })
            }
        }
    }
}

/// True when the text asks about meteorology and weather data would help.
pub fn wants_weather(text: &str) -> bool {
    text.to_lowercase().contains("meteorology")
}

/// Pull a city name out of free text.
///
/// Scans for the prepositions `in` / `for` / `at` and takes the next one or
/// two words after the last match, capitalized. Crude by design: the model
/// sees the raw text too and can ignore a bad guess.
pub fn extract_city(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let mut city = None;
    for (i, word) in words.iter().enumerate() {
        if matches!(*word, "in" | "for" | "at") && i + 1 < words.len() {
            let end = (i + 3).min(words.len());
            city = Some(words[i + 1..end].join(" "));
        }
    }
    city.map(|c| capitalize(&c))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Attach fetched weather data beneath the user text for routing.
pub fn augment(text: &str, weather: &Value) -> String {
    format!("{text}\nWeather data (if relevant): {weather}")
}
