use std::env;

use verifact_common::Language;

const DEFAULT_CONTENT_CAP: usize = 2000;

/// Engine configuration. Defaults fit full-page analysis; hosts can override
/// via the environment.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on analyzed content, in bytes of UTF-8 text.
    pub content_cap: usize,
    /// Language the model session runs in and the translation target.
    pub base_language: Language,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            content_cap: DEFAULT_CONTENT_CAP,
            base_language: Language::English,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let content_cap = env::var("VERIFACT_CONTENT_CAP")
            .unwrap_or_else(|_| DEFAULT_CONTENT_CAP.to_string())
            .parse()
            .expect("VERIFACT_CONTENT_CAP must be a number");

        let base_language = match env::var("VERIFACT_BASE_LANGUAGE").as_deref() {
            Ok("es") => Language::Spanish,
            Ok("fr") => Language::French,
            Ok("de") => Language::German,
            _ => Language::English,
        };

        Self {
            content_cap,
            base_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_full_page_analysis() {
        let config = EngineConfig::default();
        assert_eq!(config.content_cap, 2000);
        assert_eq!(config.base_language, Language::English);
    }
}
