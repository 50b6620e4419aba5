//! Response formatter: best-effort structuring of free text coming back from
//! a model with no guaranteed format. Total by construction — text no rule
//! claims stays plain `Text`, and nothing here can fail.

use std::sync::LazyLock;

use regex::Regex;
use verifact_common::{FormattedBlock, Span};

/// A line of uppercase words containing a colon ("KEY FINDINGS:",
/// "CREDIBILITY RATING: HIGH").
static SUBHEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]*:[A-Z\s]*$").unwrap());

/// A bullet marker: an asterisk followed by whitespace. Emphasis runs are
/// claimed first, so `**` pairs never read as bullets.
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\s+").unwrap());

const HEADING_MARKER: &str = "## ";

/// Convert one raw model answer into an ordered block sequence. Rules claim
/// text in a fixed priority order: emphasis, headings, subheadings, bullets,
/// then break handling.
pub fn format_response(raw: &str) -> Vec<FormattedBlock> {
    let mut blocks = Vec::new();
    let mut saw_content = false;
    let mut blank_run = 0usize;

    for line in raw.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            blank_run += 1;
            continue;
        }

        if saw_content {
            if blank_run >= 1 {
                // Two or more consecutive line breaks collapse into one
                // section break.
                blocks.push(FormattedBlock::SectionBreak);
            } else if SUBHEADING_RE.is_match(trimmed) {
                // A break right before a subsection header separates
                // sections, not lines.
                blocks.push(FormattedBlock::SectionBreak);
            } else if !starts_with_bullet(trimmed) {
                // A bullet opens its own block; only plain continuation
                // lines need an explicit break.
                blocks.push(FormattedBlock::LineBreak);
            }
        }
        blank_run = 0;
        saw_content = true;

        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            blocks.push(FormattedBlock::Heading(heading.trim().to_string()));
        } else if SUBHEADING_RE.is_match(trimmed) {
            blocks.push(FormattedBlock::Subheading(trimmed.to_string()));
        } else {
            push_line_blocks(trimmed, &mut blocks);
        }
    }

    blocks
}

fn starts_with_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('*') && chars.next().is_some_and(char::is_whitespace)
}

/// Split one content line into an optional leading `Text` block and any
/// number of `Bullet` blocks. A marker mid-line still starts a new block.
fn push_line_blocks(line: &str, blocks: &mut Vec<FormattedBlock>) {
    let spans = parse_spans(line);

    let mut lead: Vec<Span> = Vec::new();
    let mut bullets: Vec<Vec<Span>> = Vec::new();
    let mut current: Option<Vec<Span>> = None;

    for span in spans {
        match span {
            Span::Strong(_) => match current.as_mut() {
                Some(bullet) => bullet.push(span),
                None => lead.push(span),
            },
            Span::Plain(text) => {
                let mut rest = text.as_str();
                loop {
                    match BULLET_RE.find(rest) {
                        Some(marker) => {
                            let before = &rest[..marker.start()];
                            if !before.trim().is_empty() {
                                let piece = Span::Plain(before.to_string());
                                match current.as_mut() {
                                    Some(bullet) => bullet.push(piece),
                                    None => lead.push(piece),
                                }
                            }
                            if let Some(done) = current.take() {
                                bullets.push(done);
                            }
                            current = Some(Vec::new());
                            rest = &rest[marker.end()..];
                        }
                        None => {
                            if !rest.is_empty() {
                                let piece = Span::Plain(rest.to_string());
                                match current.as_mut() {
                                    Some(bullet) => bullet.push(piece),
                                    None => lead.push(piece),
                                }
                            }
                            break;
                        }
                    }
                }
            }
        }
    }
    if let Some(done) = current {
        bullets.push(done);
    }

    if lead.iter().any(|span| !span.text().trim().is_empty()) {
        blocks.push(FormattedBlock::Text(lead));
    }
    for bullet in bullets {
        if bullet.iter().any(|span| !span.text().trim().is_empty()) {
            blocks.push(FormattedBlock::Bullet(bullet));
        }
    }
}

/// Extract `**emphasis**` pairs into strong spans. Unpaired markers stay
/// plain text.
fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(start) = rest.find("**") {
        match rest[start + 2..].find("**") {
            Some(len) => {
                if start > 0 {
                    spans.push(Span::Plain(rest[..start].to_string()));
                }
                spans.push(Span::Strong(rest[start + 2..start + 2 + len].to_string()));
                rest = &rest[start + 2 + len + 2..];
            }
            None => break,
        }
    }
    if !rest.is_empty() {
        spans.push(Span::Plain(rest.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_rating_template_produces_exact_block_sequence() {
        let blocks =
            format_response("CREDIBILITY RATING: HIGH\n\nKEY FINDINGS:\n* point one * point two");
        assert_eq!(blocks.len(), 5);
        assert_eq!(
            blocks[0],
            FormattedBlock::Subheading("CREDIBILITY RATING: HIGH".to_string())
        );
        assert_eq!(blocks[1], FormattedBlock::SectionBreak);
        assert_eq!(
            blocks[2],
            FormattedBlock::Subheading("KEY FINDINGS:".to_string())
        );
        assert_eq!(blocks[3].plain_text(), "point one");
        assert_eq!(blocks[4].plain_text(), "point two");
        assert!(matches!(blocks[3], FormattedBlock::Bullet(_)));
        assert!(matches!(blocks[4], FormattedBlock::Bullet(_)));
    }

    #[test]
    fn heading_marker_claims_the_line() {
        let blocks = format_response("## Source Analysis");
        assert_eq!(
            blocks,
            vec![FormattedBlock::Heading("Source Analysis".to_string())]
        );
    }

    #[test]
    fn emphasis_becomes_strong_spans() {
        let blocks = format_response("The claim is **unverified** at this time.");
        assert_eq!(
            blocks,
            vec![FormattedBlock::Text(vec![
                Span::Plain("The claim is ".to_string()),
                Span::Strong("unverified".to_string()),
                Span::Plain(" at this time.".to_string()),
            ])]
        );
    }

    #[test]
    fn unpaired_emphasis_marker_stays_plain() {
        let blocks = format_response("A **dangling marker");
        assert_eq!(
            blocks,
            vec![FormattedBlock::Text(vec![Span::Plain(
                "A **dangling marker".to_string()
            )])]
        );
    }

    #[test]
    fn mid_line_bullet_starts_a_new_block() {
        let blocks = format_response("Summary: * first * second");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].plain_text(), "Summary:");
        assert!(matches!(blocks[0], FormattedBlock::Text(_)));
        assert_eq!(blocks[1].plain_text(), "first");
        assert_eq!(blocks[2].plain_text(), "second");
    }

    #[test]
    fn emphasis_inside_a_bullet_is_preserved() {
        let blocks = format_response("* a **strong** point");
        assert_eq!(
            blocks,
            vec![FormattedBlock::Bullet(vec![
                Span::Plain("a ".to_string()),
                Span::Strong("strong".to_string()),
                Span::Plain(" point".to_string()),
            ])]
        );
    }

    #[test]
    fn single_break_between_plain_lines_is_a_line_break() {
        let blocks = format_response("first line\nsecond line");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], FormattedBlock::LineBreak);
    }

    #[test]
    fn run_of_three_breaks_is_one_section_break() {
        let blocks = format_response("first\n\n\nsecond");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], FormattedBlock::SectionBreak);
    }

    #[test]
    fn single_break_before_subheading_is_a_section_break() {
        let blocks = format_response("intro text\nFACTS:");
        assert_eq!(
            blocks,
            vec![
                FormattedBlock::Text(vec![Span::Plain("intro text".to_string())]),
                FormattedBlock::SectionBreak,
                FormattedBlock::Subheading("FACTS:".to_string()),
            ]
        );
    }

    #[test]
    fn mixed_case_colon_line_is_not_a_subheading() {
        let blocks = format_response("Recommendation: verify independently");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], FormattedBlock::Text(_)));
    }

    #[test]
    fn empty_input_produces_no_blocks() {
        assert!(format_response("").is_empty());
        assert!(format_response("\n\n").is_empty());
    }

    #[test]
    fn malformed_input_never_panics() {
        for raw in ["***", "** * **", "* ", ":\n:", "## ", "*  *  *"] {
            let _ = format_response(raw);
        }
    }
}
