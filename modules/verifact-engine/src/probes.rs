//! Model-backed probes. Every probe follows the same path: availability
//! check, open a session, prompt, release the session on every exit path,
//! return the raw answer. Any failure resolves to a displayable
//! `Unavailable` outcome; nothing here propagates to the caller.

use std::sync::Arc;

use anyhow::{bail, Result};
use model_client::{GenerativeModel, SessionOptions, TranslationProvider};
use tracing::warn;
use verifact_common::{Language, ProbeResult, Translation};

use crate::content::Content;

// Per-probe content slices, in bytes. Different probes need different
// amounts of context; the bounds control cost and latency.
const BIAS_SLICE: usize = 1000;
const FACT_OPINION_SLICE: usize = 1000;
const SENTIMENT_SLICE: usize = 500;
const KEY_POINTS_SLICE: usize = 1500;
const RELATED_SLICE: usize = 500;
const TRANSLATION_SLICE: usize = 1000;

const CREDIBILITY_SYSTEM_PROMPT: &str =
    "You are a fact-checking expert. Provide clear, bullet-pointed analysis of news credibility.";

fn credibility_prompt(content: &str) -> String {
    format!(
        "Analyze this news content for credibility. Format your response as follows:\n\
         \n\
         CREDIBILITY RATING: [HIGH/MEDIUM/LOW]\n\
         \n\
         KEY FINDINGS:\n\
         * [Main credibility indicator 1]\n\
         * [Main credibility indicator 2]\n\
         * [Main credibility indicator 3]\n\
         \n\
         SOURCE ANALYSIS:\n\
         * [Source reliability assessment]\n\
         * [Publication type and reputation]\n\
         \n\
         CONTENT QUALITY:\n\
         * [Factual evidence assessment]\n\
         * [Language and bias indicators]\n\
         * [Verification status]\n\
         \n\
         RECOMMENDATION: [Brief recommendation]\n\
         \n\
         Content: {content}"
    )
}

/// The six generative probes of one analysis run. All share one model handle
/// and one session language; each invocation opens and releases its own
/// session.
pub struct ModelProbes {
    model: Arc<dyn GenerativeModel>,
    language: Language,
}

impl ModelProbes {
    pub fn new(model: Arc<dyn GenerativeModel>, language: Language) -> Self {
        Self { model, language }
    }

    pub async fn credibility(&self, content: &Content) -> ProbeResult<String> {
        let prompt = credibility_prompt(content.text());
        self.run(
            "credibility",
            Some(CREDIBILITY_SYSTEM_PROMPT),
            &prompt,
            "Credibility analysis unavailable",
        )
        .await
    }

    pub async fn bias(&self, content: &Content) -> ProbeResult<String> {
        let prompt = format!(
            "Analyze the political bias of this content. Rate as LEFT, CENTER-LEFT, CENTER, \
             CENTER-RIGHT, or RIGHT and explain why:\n\n{}",
            content.slice(BIAS_SLICE)
        );
        self.run("bias", None, &prompt, "Bias analysis unavailable")
            .await
    }

    pub async fn fact_opinion(&self, content: &Content) -> ProbeResult<String> {
        let prompt = format!(
            "Separate facts from opinions in this content. List FACTS and OPINIONS separately:\n\n{}",
            content.slice(FACT_OPINION_SLICE)
        );
        self.run(
            "fact_opinion",
            None,
            &prompt,
            "Fact/Opinion analysis unavailable",
        )
        .await
    }

    /// Sentiment runs over the headline plus a shorter content slice: the
    /// headline is where manipulation concentrates.
    pub async fn sentiment(&self, content: &Content, headline: &str) -> ProbeResult<String> {
        let prompt = format!(
            "Analyze the emotional manipulation in this headline and content. Rate sentiment \
             and identify manipulation tactics:\n\nHeadline: {headline}\nContent: {}",
            content.slice(SENTIMENT_SLICE)
        );
        self.run("sentiment", None, &prompt, "Sentiment analysis unavailable")
            .await
    }

    pub async fn key_points(&self, content: &Content) -> ProbeResult<String> {
        let prompt = format!(
            "Extract the main claims and key points from this article as bullet points:\n\n{}",
            content.slice(KEY_POINTS_SLICE)
        );
        self.run(
            "key_points",
            None,
            &prompt,
            "Key points extraction unavailable",
        )
        .await
    }

    pub async fn related_coverage(&self, content: &Content) -> ProbeResult<String> {
        let prompt = format!(
            "Based on this article content, suggest 3-5 search terms to find related coverage \
             from other news sources:\n\n{}",
            content.slice(RELATED_SLICE)
        );
        self.run(
            "related_coverage",
            None,
            &prompt,
            "Related coverage search unavailable",
        )
        .await
    }

    async fn run(
        &self,
        probe: &'static str,
        system: Option<&str>,
        prompt: &str,
        fallback: &str,
    ) -> ProbeResult<String> {
        match self.prompt_model(system, prompt).await {
            Ok(raw) => ProbeResult::Success(raw),
            Err(e) => {
                warn!(probe, error = %e, "Model probe unavailable");
                ProbeResult::Unavailable(format!("{fallback}: {e}"))
            }
        }
    }

    async fn prompt_model(&self, system: Option<&str>, prompt: &str) -> Result<String> {
        if !self
            .model
            .availability(self.language.code())
            .await
            .is_available()
        {
            bail!("language model is not available");
        }

        let mut options = SessionOptions::new(self.language.code());
        if let Some(system) = system {
            options = options.system_prompt(system);
        }
        let mut session = self.model.create_session(options).await?;

        // Capture the outcome first so the session is released on the
        // failure path too.
        let outcome = session.prompt(prompt).await;
        session.release().await;
        outcome
    }
}

/// Conditional translation probe: only runs when the detected language
/// differs from the base language and the provider reports available. Total —
/// every failure path resolves to `NotNeeded`.
pub async fn translate_if_needed(
    provider: &dyn TranslationProvider,
    content: &Content,
    detected: Language,
    base: Language,
) -> Translation {
    if detected == base {
        return Translation::NotNeeded;
    }
    if !provider.availability().await.is_available() {
        return Translation::NotNeeded;
    }

    let outcome = async {
        let translator = provider
            .create_translator(detected.code(), base.code())
            .await?;
        translator.translate(content.slice(TRANSLATION_SLICE)).await
    }
    .await;

    match outcome {
        Ok(text) => Translation::Translated(text),
        Err(e) => {
            warn!(error = %e, source = detected.code(), "Translation unavailable");
            Translation::NotNeeded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockModel, MockTranslator};

    fn content(text: &str) -> Content {
        Content::normalize(text, 2000).unwrap()
    }

    #[tokio::test]
    async fn probe_returns_scripted_response() {
        let model = MockModel::new().on_prompt("political bias", "CENTER, because it is dry.");
        let probes = ModelProbes::new(Arc::new(model), Language::English);

        let result = probes.bias(&content("The council met on Tuesday.")).await;
        assert_eq!(
            result,
            ProbeResult::Success("CENTER, because it is dry.".to_string())
        );
    }

    #[tokio::test]
    async fn unavailable_model_short_circuits_without_a_session() {
        let model = MockModel::unavailable();
        let counters = model.counters();
        let probes = ModelProbes::new(Arc::new(model), Language::English);

        let result = probes.key_points(&content("Some article.")).await;
        match result {
            ProbeResult::Unavailable(reason) => {
                assert!(reason.starts_with("Key points extraction unavailable"));
            }
            ProbeResult::Success(_) => panic!("probe should be unavailable"),
        }
        assert_eq!(counters.opened(), 0);
    }

    #[tokio::test]
    async fn failed_prompt_still_releases_the_session() {
        let model = MockModel::new().fail_on_prompt("credibility", "model overloaded");
        let counters = model.counters();
        let probes = ModelProbes::new(Arc::new(model), Language::English);

        let result = probes.credibility(&content("Some article.")).await;
        assert!(!result.is_success());
        assert_eq!(counters.opened(), 1);
        assert_eq!(counters.released(), 1);
    }

    #[tokio::test]
    async fn translation_is_skipped_for_base_language() {
        let provider = MockTranslator::new();
        let outcome = translate_if_needed(
            &provider,
            &content("Plain English text."),
            Language::English,
            Language::English,
        )
        .await;
        assert_eq!(outcome, Translation::NotNeeded);
    }

    #[tokio::test]
    async fn translation_runs_for_foreign_language() {
        let provider = MockTranslator::new();
        let outcome = translate_if_needed(
            &provider,
            &content("El texto original."),
            Language::Spanish,
            Language::English,
        )
        .await;
        assert_eq!(
            outcome,
            Translation::Translated("[es->en] El texto original.".to_string())
        );
    }

    #[tokio::test]
    async fn translator_outage_resolves_to_not_needed() {
        let provider = MockTranslator::unavailable();
        let outcome = translate_if_needed(
            &provider,
            &content("El texto original."),
            Language::Spanish,
            Language::English,
        )
        .await;
        assert_eq!(outcome, Translation::NotNeeded);
    }

    #[tokio::test]
    async fn translation_failure_resolves_to_not_needed() {
        let provider = MockTranslator::failing();
        let outcome = translate_if_needed(
            &provider,
            &content("El texto original."),
            Language::Spanish,
            Language::English,
        )
        .await;
        assert_eq!(outcome, Translation::NotNeeded);
    }
}
