//! "Jimmy" — the AI eco-mentor advice service.
//!
//! One outbound call per user query: the topic is wrapped in a fixed prompt
//! (persona, language register, 50-word cap by instruction) and sent to the
//! generative-AI text API. Any transport, API, or parse failure is logged
//! and replaced by one fixed fallback sentence — a raw error never reaches
//! the user.
//!
//! `AdviceSession` is the in-flight-request handle: submitting a new query
//! aborts the outstanding one, so a slow earlier response can never
//! overwrite a newer answer.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::i18n;
use crate::settings::Language;

/// Shown whenever the advice call fails, whatever the reason.
pub const FALLBACK_ADVICE: &str = "Looks like I need some solar power.. try again later!";

#[derive(Debug, Error)]
enum AdviceError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("advice request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("advice API returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("advice API returned no text")]
    EmptyResponse,
}

// ─── API wire types ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

pub struct AdviceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

fn build_prompt(topic: &str, lang: Language) -> String {
    format!(
        "You are \"Jimmy\", a cool eco-expert mentor. Explain briefly {}: {}. \
         Focus on recycling symbols or sustainability. Max 50 words. \
         Respond ONLY in the requested language.",
        i18n::advice_style(lang),
        topic
    )
}

impl AdviceClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.advice_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.advice_model.clone(),
        })
    }

    /// Fetch advice on `topic`, answering in `lang`. Infallible from the
    /// caller's point of view: every failure mode collapses into the fixed
    /// fallback sentence.
    pub async fn advice(&self, topic: &str, lang: Language) -> String {
        match self.fetch(topic, lang).await {
            Ok(text) => text,
            Err(e) => {
                warn!("advice fetch failed: {e}");
                FALLBACK_ADVICE.to_string()
            }
        }
    }

    async fn fetch(&self, topic: &str, lang: Language) -> Result<String, AdviceError> {
        let api_key = self.api_key.as_deref().ok_or(AdviceError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let payload = json!({
            "contents": [{ "parts": [{ "text": build_prompt(topic, lang) }] }],
            "generationConfig": { "temperature": 0.7, "topP": 0.8 },
        });

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(AdviceError::Status(resp.status()));
        }
        let body: GenerateContentResponse = resp.json().await?;
        debug!(candidates = body.candidates.len(), "advice response received");
        body.into_text().ok_or(AdviceError::EmptyResponse)
    }
}

// ─── Session (in-flight request handle) ───────────────────────────────────────

/// What the advice panel should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceUpdate {
    /// A query is outstanding; the UI shows its busy indicator.
    Loading,
    /// Intro line, an answer, or the fallback sentence.
    Ready(String),
}

/// One user's conversation with Jimmy.
///
/// Holds at most one outstanding request; submitting a new query aborts the
/// previous one before spawning. Observers follow the `watch` channel, so
/// they always see the latest state and never a stale response.
pub struct AdviceSession {
    client: Arc<AdviceClient>,
    tx: watch::Sender<AdviceUpdate>,
    in_flight: Option<JoinHandle<()>>,
}

impl AdviceSession {
    /// Start a session showing the intro line for `lang`.
    pub fn new(client: Arc<AdviceClient>, lang: Language) -> (Self, watch::Receiver<AdviceUpdate>) {
        let (tx, rx) = watch::channel(AdviceUpdate::Ready(i18n::advice_intro(lang).to_string()));
        (
            Self {
                client,
                tx,
                in_flight: None,
            },
            rx,
        )
    }

    pub fn subscribe(&self) -> watch::Receiver<AdviceUpdate> {
        self.tx.subscribe()
    }

    /// Submit a query. Blank topics are ignored; an outstanding query is
    /// cancelled first so responses can never arrive out of order.
    pub fn ask(&mut self, topic: &str, lang: Language) {
        let topic = topic.trim();
        if topic.is_empty() {
            return;
        }
        self.cancel();
        self.tx.send_replace(AdviceUpdate::Loading);

        let client = self.client.clone();
        let tx = self.tx.clone();
        let topic = topic.to_string();
        self.in_flight = Some(tokio::spawn(async move {
            let text = client.advice(&topic, lang).await;
            let _ = tx.send(AdviceUpdate::Ready(text));
        }));
    }

    /// Cancel any in-flight query and show the intro line for `lang`.
    /// Called when the user switches language.
    pub fn reset(&mut self, lang: Language) {
        self.cancel();
        self.tx
            .send_replace(AdviceUpdate::Ready(i18n::advice_intro(lang).to_string()));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for AdviceSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
