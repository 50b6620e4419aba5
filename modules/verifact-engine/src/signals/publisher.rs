use verifact_common::{PoliticalBias, PublisherRating};

use super::source_trust;

const UNKNOWN: &str = "Unknown";

/// Exact-match rating table: (domain, grade, outlet type, editorial bias).
const PUBLISHER_RATINGS: &[(&str, &str, &str, PoliticalBias)] = &[
    ("reuters.com", "A+", "Wire Service", PoliticalBias::Center),
    ("apnews.com", "A+", "Wire Service", PoliticalBias::Center),
    ("bbc.com", "A", "Public Broadcaster", PoliticalBias::CenterLeft),
    ("npr.org", "A", "Public Radio", PoliticalBias::CenterLeft),
    ("cnn.com", "B", "Cable News", PoliticalBias::Left),
    ("foxnews.com", "B", "Cable News", PoliticalBias::Right),
    ("nytimes.com", "A-", "Newspaper", PoliticalBias::CenterLeft),
    ("wsj.com", "A-", "Newspaper", PoliticalBias::CenterRight),
];

/// Look up a publisher by exact hostname. Domains absent from the table get
/// the `Unknown` sentinel in every field, never an error.
pub fn rate_publisher(hostname: &str) -> PublisherRating {
    let domain = hostname.to_lowercase();
    let is_trusted = source_trust::is_trusted(&domain);

    match PUBLISHER_RATINGS.iter().find(|(d, ..)| *d == domain) {
        Some((_, rating, outlet_type, bias)) => PublisherRating {
            domain,
            rating: rating.to_string(),
            outlet_type: outlet_type.to_string(),
            bias: *bias,
            is_trusted,
        },
        None => PublisherRating {
            domain,
            rating: UNKNOWN.to_string(),
            outlet_type: UNKNOWN.to_string(),
            bias: PoliticalBias::Unknown,
            is_trusted,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuters_gets_wire_service_rating() {
        let rating = rate_publisher("reuters.com");
        assert_eq!(rating.rating, "A+");
        assert_eq!(rating.outlet_type, "Wire Service");
        assert_eq!(rating.bias, PoliticalBias::Center);
        assert!(rating.is_trusted);
    }

    #[test]
    fn unlisted_domain_gets_unknown_sentinel() {
        let rating = rate_publisher("example.org");
        assert_eq!(rating.rating, "Unknown");
        assert_eq!(rating.outlet_type, "Unknown");
        assert_eq!(rating.bias, PoliticalBias::Unknown);
        assert!(!rating.is_trusted);
    }

    #[test]
    fn lookup_is_exact_match_not_substring() {
        // A subdomain is not in the rating table, even though the allowlist
        // still trusts it.
        let rating = rate_publisher("www.reuters.com");
        assert_eq!(rating.rating, "Unknown");
        assert!(rating.is_trusted);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(rate_publisher("wsj.com"), rate_publisher("wsj.com"));
    }
}
