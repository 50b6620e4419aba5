use verifact_common::{SourceTrust, TrustStatus};

/// Domains whose reporting or fact-checking track record earns automatic
/// trust. Substring membership: subdomains of a listed domain count.
const TRUSTED_SOURCES: &[&str] = &[
    // Wire services and broadcasters
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "npr.org",
    // Fact-checking organizations
    "snopes.com",
    "politifact.com",
    "factcheck.org",
];

pub(crate) fn is_trusted(domain: &str) -> bool {
    TRUSTED_SOURCES.iter().any(|source| domain.contains(source))
}

pub fn check_source(hostname: &str) -> SourceTrust {
    let domain = hostname.to_lowercase();
    let is_trusted = is_trusted(&domain);
    SourceTrust {
        domain,
        is_trusted,
        status: if is_trusted {
            TrustStatus::Trusted
        } else {
            TrustStatus::Unknown
        },
    }
}
