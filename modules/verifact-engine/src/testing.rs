//! Test mocks for the model-service boundary.
//!
//! Two mocks matching the two trait boundaries:
//! - `MockModel` (GenerativeModel) — scripted responses keyed by prompt
//!   substring, with failure injection and an availability toggle
//! - `MockTranslator` (TranslationProvider) — deterministic `[src->tgt]`
//!   prefix translator
//!
//! Session open/release counters let tests assert that every session is
//! released on every exit path. No network, no real model.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use model_client::{
    Availability, GenerativeModel, ModelSession, SessionOptions, TranslationProvider, Translator,
};

// ---------------------------------------------------------------------------
// MockModel
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum Scripted {
    Response(String),
    Failure(String),
}

/// Shared open/release counters for session accounting.
#[derive(Clone, Default)]
pub struct SessionCounters {
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl SessionCounters {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

/// Scripted generative model. Rules are checked in registration order
/// against the incoming prompt; the first substring match wins. Unmatched
/// prompts get the default response.
pub struct MockModel {
    available: bool,
    rules: Vec<(String, Scripted)>,
    default_response: String,
    counters: SessionCounters,
}

impl MockModel {
    pub fn new() -> Self {
        Self {
            available: true,
            rules: Vec::new(),
            default_response: "Analysis text.".to_string(),
            counters: SessionCounters::default(),
        }
    }

    /// A model whose availability check always reports unavailable.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn on_prompt(mut self, needle: &str, response: &str) -> Self {
        self.rules
            .push((needle.to_string(), Scripted::Response(response.to_string())));
        self
    }

    pub fn fail_on_prompt(mut self, needle: &str, message: &str) -> Self {
        self.rules
            .push((needle.to_string(), Scripted::Failure(message.to_string())));
        self
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = response.to_string();
        self
    }

    /// Clone the counter handles before handing the model to an analyzer.
    pub fn counters(&self) -> SessionCounters {
        self.counters.clone()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn availability(&self, _language: &str) -> Availability {
        if self.available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    async fn create_session(&self, _options: SessionOptions) -> Result<Box<dyn ModelSession>> {
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            rules: self.rules.clone(),
            default_response: self.default_response.clone(),
            released: self.counters.released.clone(),
        }))
    }
}

struct MockSession {
    rules: Vec<(String, Scripted)>,
    default_response: String,
    released: Arc<AtomicUsize>,
}

#[async_trait]
impl ModelSession for MockSession {
    async fn prompt(&mut self, input: &str) -> Result<String> {
        for (needle, scripted) in &self.rules {
            if input.contains(needle.as_str()) {
                return match scripted {
                    Scripted::Response(response) => Ok(response.clone()),
                    Scripted::Failure(message) => bail!("{message}"),
                };
            }
        }
        Ok(self.default_response.clone())
    }

    async fn release(self: Box<Self>) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// MockTranslator
// ---------------------------------------------------------------------------

/// Deterministic translation provider: prefixes the input with the language
/// pair instead of translating.
pub struct MockTranslator {
    available: bool,
    fail_translation: bool,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self {
            available: true,
            fail_translation: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Available, but every translate call errors.
    pub fn failing() -> Self {
        Self {
            fail_translation: true,
            ..Self::new()
        }
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn availability(&self) -> Availability {
        if self.available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    async fn create_translator(&self, source: &str, target: &str) -> Result<Box<dyn Translator>> {
        Ok(Box::new(PairTranslator {
            source: source.to_string(),
            target: target.to_string(),
            fail: self.fail_translation,
        }))
    }
}

struct PairTranslator {
    source: String,
    target: String,
    fail: bool,
}

#[async_trait]
impl Translator for PairTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        if self.fail {
            bail!("translator crashed mid-call");
        }
        Ok(format!("[{}->{}] {}", self.source, self.target, text))
    }
}
