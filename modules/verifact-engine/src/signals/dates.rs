use chrono::{DateTime, NaiveDate, Utc};
use verifact_common::{DateVerification, Freshness};

/// Articles older than this many days are flagged as potentially outdated.
/// The boundary is exclusive: exactly 30 days old is still recent.
const FRESHNESS_WINDOW_DAYS: i64 = 30;

/// Plain-date formats tried, in order, after the RFC parsers.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

pub fn verify_date(candidates: &[String]) -> DateVerification {
    verify_date_at(candidates, Utc::now())
}

/// Scan date candidates in the order supplied; the first parseable one wins.
pub fn verify_date_at(candidates: &[String], now: DateTime<Utc>) -> DateVerification {
    let date = candidates.iter().find_map(|c| parse_candidate(c.trim()));

    match date {
        Some(date) => {
            // Future-dated markers clamp to zero days old.
            let days_old = (now.date_naive() - date).num_days().max(0) as u32;
            let status = if i64::from(days_old) > FRESHNESS_WINDOW_DAYS {
                Freshness::PotentiallyOutdated
            } else {
                Freshness::Recent
            };
            DateVerification {
                status,
                date: Some(date),
                days_old: Some(days_old),
            }
        }
        None => DateVerification {
            status: Freshness::NotFound,
            date: None,
            days_old: None,
        },
    }
}

fn parse_candidate(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
