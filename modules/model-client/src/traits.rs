use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Availability
// =============================================================================

/// Whether a service can currently take requests. Callers are expected to
/// check before opening a session and to degrade gracefully when the answer
/// is `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

// =============================================================================
// Session Options
// =============================================================================

/// Options for opening a generative model session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Optional system prompt installed before the first user turn.
    pub system_prompt: Option<String>,
    /// BCP-47 primary language subtag the session should operate in.
    pub language: String,
}

impl SessionOptions {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            language: language.into(),
        }
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

// =============================================================================
// GenerativeModel Trait
// =============================================================================

/// A generative text service: prompt in, free-text answer out. Implementors
/// wrap whatever provider the host has — the engine never sees past this
/// boundary.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Report whether the model can serve prompts in the given language.
    async fn availability(&self, language: &str) -> Availability;

    /// Open a fresh session. Sessions are single-use: one probe invocation,
    /// then `release`.
    async fn create_session(&self, options: SessionOptions) -> Result<Box<dyn ModelSession>>;
}

/// One open model session. Holders must call `release` on every exit path,
/// including failure paths.
#[async_trait]
pub trait ModelSession: Send {
    async fn prompt(&mut self, input: &str) -> Result<String>;

    /// Release per-session resources.
    async fn release(self: Box<Self>);
}

// =============================================================================
// TranslationProvider Trait
// =============================================================================

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn availability(&self) -> Availability;

    /// Build a translator for a fixed source/target language pair
    /// (BCP-47 primary subtags).
    async fn create_translator(&self, source: &str, target: &str) -> Result<Box<dyn Translator>>;
}

#[async_trait]
pub trait Translator: Send {
    async fn translate(&self, text: &str) -> Result<String>;
}
