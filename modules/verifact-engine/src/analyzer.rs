//! The aggregation core: one `analyze` call fires every probe, waits for all
//! of them to settle, and assembles the one `Report` this engine produces.
//! This is the only place that knows the report's field set.

use std::sync::Arc;

use chrono::Utc;
use model_client::{GenerativeModel, TranslationProvider};
use tracing::info;
use uuid::Uuid;
use verifact_common::{Report, VerifactError};

use crate::config::EngineConfig;
use crate::content::{Content, PageMetadata};
use crate::format::format_response;
use crate::probes::{translate_if_needed, ModelProbes};
use crate::signals::{author, dates, language, publisher, red_flags, source_trust};

pub struct CredibilityAnalyzer {
    model: Arc<dyn GenerativeModel>,
    translator: Arc<dyn TranslationProvider>,
    config: EngineConfig,
}

impl CredibilityAnalyzer {
    pub fn new(model: Arc<dyn GenerativeModel>, translator: Arc<dyn TranslationProvider>) -> Self {
        Self::with_config(model, translator, EngineConfig::default())
    }

    pub fn with_config(
        model: Arc<dyn GenerativeModel>,
        translator: Arc<dyn TranslationProvider>,
        config: EngineConfig,
    ) -> Self {
        Self {
            model,
            translator,
            config,
        }
    }

    /// Run one full analysis. Either yields a complete report or fails with
    /// `EmptyContent`; individual probe failures surface as field values,
    /// never as errors.
    pub async fn analyze(
        &self,
        raw_text: &str,
        page: &PageMetadata,
    ) -> Result<Report, VerifactError> {
        let content = Content::normalize(raw_text, self.config.content_cap)?;
        let run_id = Uuid::new_v4();
        info!(%run_id, chars = content.len(), "Starting credibility analysis");

        // Local signal probes are pure and instantaneous; run them inline.
        let hostname = page.hostname();
        let source = source_trust::check_source(&hostname);
        let publisher = publisher::rate_publisher(&hostname);
        let date = dates::verify_date(&page.date_candidates);
        let author = author::check_author(
            page.byline.as_deref(),
            page.has_contact_link,
            page.has_author_bio,
        );
        let red_flags = red_flags::detect_red_flags(content.text());
        let detected = language::detect_language(content.text(), self.config.base_language);

        // Fire every model-backed probe at once. The join point is
        // all-settled: a failing probe degrades to its fallback value and
        // cannot block or fail the others.
        let probes = ModelProbes::new(self.model.clone(), self.config.base_language);
        let headline = page.headline.as_deref().unwrap_or(&page.title);
        let (credibility, bias, fact_opinion, sentiment, key_points, related_coverage, translation) =
            tokio::join!(
                probes.credibility(&content),
                probes.bias(&content),
                probes.fact_opinion(&content),
                probes.sentiment(&content, headline),
                probes.key_points(&content),
                probes.related_coverage(&content),
                translate_if_needed(
                    &*self.translator,
                    &content,
                    detected,
                    self.config.base_language
                ),
            );

        // Successful raw answers are structured by the formatter; an
        // unavailability message is placed into the report as-is.
        let report = Report {
            run_id,
            analyzed_at: Utc::now(),
            source,
            publisher,
            date,
            author,
            red_flags,
            language: detected,
            credibility: credibility.map(|raw| format_response(&raw)),
            bias: bias.map(|raw| format_response(&raw)),
            fact_opinion: fact_opinion.map(|raw| format_response(&raw)),
            sentiment: sentiment.map(|raw| format_response(&raw)),
            key_points: key_points.map(|raw| format_response(&raw)),
            related_coverage: related_coverage.map(|raw| format_response(&raw)),
            translation,
        };

        let unavailable = [
            &report.credibility,
            &report.bias,
            &report.fact_opinion,
            &report.sentiment,
            &report.key_points,
            &report.related_coverage,
        ]
        .iter()
        .filter(|probe| !probe.is_success())
        .count();

        info!(
            %run_id,
            unavailable_probes = unavailable,
            red_flags = report.red_flags.len(),
            language = %report.language,
            "Analysis complete"
        );
        Ok(report)
    }
}
