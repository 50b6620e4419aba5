/// Keywords that mark a page as news-like.
const NEWS_KEYWORDS: &[&str] = &["news", "article", "story", "breaking", "report"];

/// Quick gate for hosts: does this page look like news at all? Checks the
/// URL and the page title, case-insensitively.
pub fn looks_like_news(url: &str, title: &str) -> bool {
    let url = url.to_lowercase();
    let title = title.to_lowercase();
    NEWS_KEYWORDS
        .iter()
        .any(|keyword| url.contains(keyword) || title.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_url_matches() {
        assert!(looks_like_news("https://example.com/news/item", "Example"));
    }

    #[test]
    fn news_title_matches() {
        assert!(looks_like_news(
            "https://example.com/x",
            "Breaking: storm hits the coast"
        ));
    }

    #[test]
    fn unrelated_page_does_not_match() {
        assert!(!looks_like_news("https://example.com/shop", "Buy shoes"));
    }
}
