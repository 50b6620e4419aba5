//! Plain-text rendering of reports and narratives. Deterministic flattening
//! only; visual layout belongs to the presentation layer.

use std::fmt::Write;

use verifact_common::{FormattedBlock, Narrative, ProbeResult, Report, Span, Translation};

/// Flatten a formatted narrative to plain text.
pub fn narrative_text(blocks: &[FormattedBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            FormattedBlock::Heading(text) | FormattedBlock::Subheading(text) => {
                out.push_str(text);
                out.push('\n');
            }
            FormattedBlock::Bullet(spans) => {
                out.push_str("  • ");
                push_spans(&mut out, spans);
                out.push('\n');
            }
            FormattedBlock::Text(spans) => push_spans(&mut out, spans),
            FormattedBlock::LineBreak => out.push('\n'),
            FormattedBlock::SectionBreak => out.push_str("\n\n"),
        }
    }
    out.trim_end().to_string()
}

fn push_spans(out: &mut String, spans: &[Span]) {
    for span in spans {
        out.push_str(span.text());
    }
}

fn probe_text(probe: &ProbeResult<Narrative>) -> String {
    match probe {
        ProbeResult::Success(blocks) => narrative_text(blocks),
        ProbeResult::Unavailable(reason) => reason.clone(),
    }
}

/// Render the full report as sectioned plain text, in display order:
/// overview, content, source, red flags.
pub fn report_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Publisher Rating: {} | {} | {} Bias",
        report.publisher.rating, report.publisher.outlet_type, report.publisher.bias
    );
    let _ = writeln!(out, "\nAI Credibility Analysis:\n{}", probe_text(&report.credibility));
    let _ = writeln!(out, "\nPolitical Bias Analysis:\n{}", probe_text(&report.bias));
    let _ = writeln!(out, "\nSentiment Analysis:\n{}", probe_text(&report.sentiment));
    let _ = writeln!(out, "\nFact vs Opinion:\n{}", probe_text(&report.fact_opinion));
    let _ = writeln!(out, "\nKey Points:\n{}", probe_text(&report.key_points));

    if let Translation::Translated(text) = &report.translation {
        let _ = writeln!(out, "\nTranslation:\n{text}");
    }

    let _ = writeln!(out, "\nDomain: {} ({})", report.source.domain, report.source.status);
    let _ = write!(out, "\nDate Verification: {}", report.date.status);
    if let Some(date) = report.date.date {
        let _ = write!(out, "\nPublished: {date}");
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "\nAuthor Credibility: {}\nAuthor: {}",
        report.author.status, report.author.author
    );
    let _ = writeln!(
        out,
        "\nFind Related Coverage:\n{}",
        probe_text(&report.related_coverage)
    );

    if !report.red_flags.is_empty() {
        let _ = writeln!(out, "\nRed Flags:");
        for flag in &report.red_flags {
            let _ = writeln!(out, "  - {flag}");
        }
    }

    out
}
