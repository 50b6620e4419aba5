use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Probe Outcomes ---

/// Outcome of a single analysis probe. A probe either produces its value or
/// degrades to a human-readable unavailability message; it never fails the
/// run it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeResult<T> {
    Success(T),
    Unavailable(String),
}

impl<T> ProbeResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Success(_))
    }

    /// Map the success value, leaving an unavailability message untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProbeResult<U> {
        match self {
            ProbeResult::Success(value) => ProbeResult::Success(f(value)),
            ProbeResult::Unavailable(reason) => ProbeResult::Unavailable(reason),
        }
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            ProbeResult::Success(value) => Some(value),
            ProbeResult::Unavailable(_) => None,
        }
    }
}

// --- Formatted Narrative ---

/// One inline run of narrative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Strong(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Strong(text) => text,
        }
    }
}

/// One structurally-tagged unit of a model narrative. An ordered sequence of
/// these is the normalized shape of every model-derived field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormattedBlock {
    Heading(String),
    Subheading(String),
    Bullet(Vec<Span>),
    Text(Vec<Span>),
    LineBreak,
    SectionBreak,
}

impl FormattedBlock {
    /// Flattened text content of this block, trimmed. Breaks yield an empty
    /// string.
    pub fn plain_text(&self) -> String {
        match self {
            FormattedBlock::Heading(text) | FormattedBlock::Subheading(text) => {
                text.trim().to_string()
            }
            FormattedBlock::Bullet(spans) | FormattedBlock::Text(spans) => spans
                .iter()
                .map(Span::text)
                .collect::<String>()
                .trim()
                .to_string(),
            FormattedBlock::LineBreak | FormattedBlock::SectionBreak => String::new(),
        }
    }
}

/// A formatted model narrative: what the response formatter produces from one
/// probe's raw answer.
pub type Narrative = Vec<FormattedBlock>;

// --- Source Trust ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustStatus {
    Trusted,
    Unknown,
}

impl std::fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustStatus::Trusted => write!(f, "Trusted Source"),
            TrustStatus::Unknown => write!(f, "Unknown Source - Verify Independently"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTrust {
    pub domain: String,
    pub is_trusted: bool,
    pub status: TrustStatus,
}

// --- Publisher Rating ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoliticalBias {
    Left,
    CenterLeft,
    Center,
    CenterRight,
    Right,
    Unknown,
}

impl std::fmt::Display for PoliticalBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoliticalBias::Left => write!(f, "Left"),
            PoliticalBias::CenterLeft => write!(f, "Center-Left"),
            PoliticalBias::Center => write!(f, "Center"),
            PoliticalBias::CenterRight => write!(f, "Center-Right"),
            PoliticalBias::Right => write!(f, "Right"),
            PoliticalBias::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Static editorial rating for a publisher domain. Domains absent from the
/// rating table carry the `"Unknown"` sentinel in every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherRating {
    pub domain: String,
    pub rating: String,
    pub outlet_type: String,
    pub bias: PoliticalBias,
    pub is_trusted: bool,
}

// --- Date Verification ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Recent,
    PotentiallyOutdated,
    NotFound,
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Freshness::Recent => write!(f, "Recent"),
            Freshness::PotentiallyOutdated => write!(f, "Potentially Outdated"),
            Freshness::NotFound => write!(f, "Date not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateVerification {
    pub status: Freshness,
    pub date: Option<NaiveDate>,
    pub days_old: Option<u32>,
}

// --- Author Credibility ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityTier {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for CredibilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredibilityTier::High => write!(f, "High"),
            CredibilityTier::Medium => write!(f, "Medium"),
            CredibilityTier::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorIndicators {
    pub has_author: bool,
    pub has_contact: bool,
    pub has_bio: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCredibility {
    pub author: String,
    pub score: u8,
    pub status: CredibilityTier,
    pub indicators: AuthorIndicators,
}

// --- Language ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
}

impl Language {
    /// BCP-47 primary language subtag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Spanish"),
            Language::French => write!(f, "French"),
            Language::German => write!(f, "German"),
        }
    }
}

// --- Translation ---

/// Outcome of the conditional translation probe. Total: an unavailable
/// translation service or a failed translation yields `NotNeeded`, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Translation {
    NotNeeded,
    Translated(String),
}

// --- Report ---

/// The complete aggregation of all probe outcomes for one analysis run.
///
/// The field set is fixed and total: every run populates every field, with
/// `Unavailable` standing in for any model probe that failed. Built once per
/// run and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub run_id: Uuid,
    pub analyzed_at: DateTime<Utc>,

    // Local signal probes (always available)
    pub source: SourceTrust,
    pub publisher: PublisherRating,
    pub date: DateVerification,
    pub author: AuthorCredibility,
    pub red_flags: Vec<String>,
    pub language: Language,

    // Model-backed probes
    pub credibility: ProbeResult<Narrative>,
    pub bias: ProbeResult<Narrative>,
    pub fact_opinion: ProbeResult<Narrative>,
    pub sentiment: ProbeResult<Narrative>,
    pub key_points: ProbeResult<Narrative>,
    pub related_coverage: ProbeResult<Narrative>,
    pub translation: Translation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_result_map_preserves_unavailable() {
        let unavailable: ProbeResult<String> = ProbeResult::Unavailable("down".to_string());
        let mapped = unavailable.map(|s| s.len());
        assert_eq!(mapped, ProbeResult::Unavailable("down".to_string()));
    }

    #[test]
    fn probe_result_map_applies_to_success() {
        let success = ProbeResult::Success("abc".to_string());
        assert_eq!(success.map(|s| s.len()), ProbeResult::Success(3));
    }

    #[test]
    fn block_plain_text_flattens_spans() {
        let block = FormattedBlock::Text(vec![
            Span::Plain("credibility is ".to_string()),
            Span::Strong("high".to_string()),
        ]);
        assert_eq!(block.plain_text(), "credibility is high");
    }

    #[test]
    fn bias_display_uses_hyphenated_labels() {
        assert_eq!(PoliticalBias::CenterLeft.to_string(), "Center-Left");
        assert_eq!(PoliticalBias::CenterRight.to_string(), "Center-Right");
    }
}
