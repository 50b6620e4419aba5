use serde::{Deserialize, Serialize};
use url::Url;
use verifact_common::VerifactError;

/// Page facts the scraper supplies alongside the article text. The engine
/// performs no extraction itself; everything here arrives pre-selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    pub url: Option<String>,
    pub title: String,
    pub headline: Option<String>,
    pub byline: Option<String>,
    /// Date-bearing strings in the scraper's scan order, machine-readable
    /// markers first. The first parseable one wins.
    pub date_candidates: Vec<String>,
    pub has_contact_link: bool,
    pub has_author_bio: bool,
}

impl PageMetadata {
    /// Lowercased hostname of the page URL. Empty when the URL is absent or
    /// unparseable.
    pub fn hostname(&self) -> String {
        self.url
            .as_deref()
            .and_then(|u| Url::parse(u).ok())
            .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
            .unwrap_or_default()
    }
}

/// Article text bounded to a safe analysis length. Immutable once built;
/// one analysis run owns exactly one `Content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    text: String,
}

impl Content {
    /// Trim and bound raw extracted text. Empty or whitespace-only input is
    /// a terminal condition: no probe can run without content.
    pub fn normalize(raw: &str, cap: usize) -> Result<Self, VerifactError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VerifactError::EmptyContent);
        }
        Ok(Self {
            text: truncate(trimmed, cap).to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Prefix of at most `cap` bytes, backed off to a char boundary.
    /// Per-probe slices are a cost control, not a correctness requirement.
    pub fn slice(&self, cap: usize) -> &str {
        truncate(&self.text, cap)
    }
}

fn truncate(text: &str, cap: usize) -> &str {
    if text.len() <= cap {
        return text;
    }
    let mut end = cap;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
