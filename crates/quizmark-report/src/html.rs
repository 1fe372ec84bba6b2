//! HTML review report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined: the
//! post-submission review page for one graded attempt.

use anyhow::Result;
use std::path::Path;

use quizmark_core::report::AttemptRecord;
use quizmark_core::scorer::{QuestionAnalysis, QuestionStatus};
use quizmark_core::statistics::SectionStats;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn status_class(status: QuestionStatus) -> &'static str {
    match status {
        QuestionStatus::Correct => "correct",
        QuestionStatus::Incorrect => "incorrect",
        QuestionStatus::Unanswered => "unanswered",
    }
}

fn status_label(status: QuestionStatus) -> &'static str {
    match status {
        QuestionStatus::Correct => "Correct",
        QuestionStatus::Incorrect => "Incorrect",
        QuestionStatus::Unanswered => "Unanswered",
    }
}

/// Generate the review page for a graded attempt.
pub fn generate_html(record: &AttemptRecord) -> String {
    let a = &record.analytics;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>quizmark review — {}</title>\n",
        html_escape(&record.exam.source)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>quizmark review</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Source: <strong>{}</strong> | {} sections | {} questions | {}</p>\n",
        html_escape(&record.exam.source),
        record.exam.section_count,
        record.exam.question_count,
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str(&format!(
        "<p class=\"scoreline\"><span class=\"net\">{}</span> / {} points — {} of {} correct, {} answered, {} missed</p>\n",
        a.net_score,
        a.max_possible_score,
        a.correct_count,
        a.total_questions,
        a.count_answered,
        a.count_missed
    ));

    // Per-section table
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Section</th><th>Correct</th><th>Incorrect</th><th>Unanswered</th><th>Score</th><th>Time</th><th>Avg Time</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for s in &a.sections {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}/{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}s</td><td>{:.1}s</td></tr>\n",
            html_escape(&s.name),
            s.correct,
            s.total,
            s.incorrect,
            s.unanswered,
            s.score,
            s.time_taken,
            s.avg_time,
        ));
    }
    html.push_str("</tbody></table>\n");

    // SVG bar chart of time per section
    if !a.sections.is_empty() {
        html.push_str(&generate_time_chart(&a.sections));
    }

    html.push_str("</section>\n");

    // Per-question review
    html.push_str("<section class=\"review\">\n");
    html.push_str("<h2>Question review</h2>\n");
    for q in &a.question_analysis {
        html.push_str(&render_question(q));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(record)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the review page to a file.
pub fn write_html_report(record: &AttemptRecord, path: &Path) -> Result<()> {
    let html = generate_html(record);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn render_question(q: &QuestionAnalysis) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<article class=\"question {}\">\n",
        status_class(q.status)
    ));
    html.push_str(&format!(
        "<h3>Q{} <span class=\"badge {}\">{}</span> <span class=\"pts\">{:+} pts</span></h3>\n",
        q.id,
        status_class(q.status),
        status_label(q.status),
        q.points
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} | {:.1}s</p>\n",
        html_escape(&q.section),
        q.time_spent
    ));
    html.push_str(&format!("<p class=\"text\">{}</p>\n", html_escape(&q.text)));

    html.push_str("<ul class=\"options\">\n");
    for opt in &q.options {
        let mut classes = Vec::new();
        if q.correct_answer.as_deref() == Some(opt.id.as_str()) {
            classes.push("key");
        }
        if q.user_answer.as_deref() == Some(opt.id.as_str()) {
            classes.push("chosen");
        }
        html.push_str(&format!(
            "<li class=\"{}\"><strong>{}.</strong> {}</li>\n",
            classes.join(" "),
            html_escape(&opt.id),
            html_escape(&opt.text)
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("</article>\n");
    html
}

fn generate_time_chart(sections: &[SectionStats]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let max_time = sections
        .iter()
        .map(|s| s.time_taken)
        .fold(0.0_f64, f64::max);

    let total_height = sections.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, section) in sections.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = if max_time > 0.0 {
            (section.time_taken / max_time * max_width as f64) as usize
        } else {
            0
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&section.name)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"#3b82f6\" rx=\"4\"/>\n",
            label_width, y, width, bar_height
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}s</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            section.time_taken
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; --skip: #f3f4f6; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; --skip: #1f2937; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.scoreline { font-size: 1.2rem; }
.scoreline .net { font-size: 1.6rem; font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
article.question { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; margin: 1rem 0; }
article.question h3 { margin-top: 0; }
article.question .text { white-space: pre-wrap; }
.badge { font-size: 0.8rem; padding: 0.15rem 0.5rem; border-radius: 999px; vertical-align: middle; }
.badge.correct { background: var(--pass); }
.badge.incorrect { background: var(--fail); }
.badge.unanswered { background: var(--skip); }
.pts { color: #6b7280; font-size: 0.9rem; }
ul.options { list-style: none; padding: 0; }
ul.options li { padding: 0.35rem 0.75rem; margin: 0.25rem 0; border: 1px solid var(--border); border-radius: 6px; }
ul.options li.key { background: var(--pass); }
ul.options li.chosen:not(.key) { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
