use verifact_common::{AuthorCredibility, AuthorIndicators, CredibilityTier};

const AUTHOR_POINTS: u8 = 3;
const CONTACT_POINTS: u8 = 2;
const BIO_POINTS: u8 = 2;

const HIGH_THRESHOLD: u8 = 5;
const MEDIUM_THRESHOLD: u8 = 3;

/// Presence-based author scoring: a named byline weighs more than a contact
/// affordance or a bio, and the three together cap at 7.
pub fn check_author(byline: Option<&str>, has_contact: bool, has_bio: bool) -> AuthorCredibility {
    let author = byline.map(str::trim).filter(|name| !name.is_empty());
    let has_author = author.is_some();

    let mut score = 0u8;
    if has_author {
        score += AUTHOR_POINTS;
    }
    if has_contact {
        score += CONTACT_POINTS;
    }
    if has_bio {
        score += BIO_POINTS;
    }

    let status = if score >= HIGH_THRESHOLD {
        CredibilityTier::High
    } else if score >= MEDIUM_THRESHOLD {
        CredibilityTier::Medium
    } else {
        CredibilityTier::Low
    };

    AuthorCredibility {
        author: author.unwrap_or("Unknown").to_string(),
        score,
        status,
        indicators: AuthorIndicators {
            has_author,
            has_contact,
            has_bio,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_and_contact_without_bio_is_high() {
        let result = check_author(Some("Jane Doe"), true, false);
        assert_eq!(result.score, 5);
        assert_eq!(result.status, CredibilityTier::High);
    }

    #[test]
    fn author_only_is_medium() {
        let result = check_author(Some("Jane Doe"), false, false);
        assert_eq!(result.score, 3);
        assert_eq!(result.status, CredibilityTier::Medium);
    }

    #[test]
    fn nothing_present_is_low() {
        let result = check_author(None, false, false);
        assert_eq!(result.score, 0);
        assert_eq!(result.status, CredibilityTier::Low);
        assert_eq!(result.author, "Unknown");
    }

    #[test]
    fn all_indicators_score_seven() {
        let result = check_author(Some("Jane Doe"), true, true);
        assert_eq!(result.score, 7);
        assert_eq!(result.status, CredibilityTier::High);
    }

    #[test]
    fn whitespace_byline_counts_as_absent() {
        let result = check_author(Some("   "), false, false);
        assert!(!result.indicators.has_author);
        assert_eq!(result.author, "Unknown");
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(
            check_author(Some("Jane Doe"), true, true),
            check_author(Some("Jane Doe"), true, true)
        );
    }
}
