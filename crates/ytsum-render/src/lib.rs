//! Markdown rendering for video summaries.
//!
//! Summaries arrive as untrusted markdown. Rendering is GitHub-flavored
//! with single newlines treated as hard breaks; the output then passes
//! through an allow-list HTML sanitizer before every unordered list is
//! tagged with the presentation class downstream styling expects.
//!
//! Sanitization never depends on a renderer option: raw HTML is let
//! through the markdown pass and stripped by `ammonia` afterwards.

use comrak::{markdown_to_html, Options};

/// Presentation class applied to every `<ul>` in rendered output.
pub const SUMMARY_LIST_CLASS: &str = "summary-list";

fn render_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Hard breaks: a single newline in a summary is a line break.
    options.render.hardbreaks = true;
    // Raw HTML passes through here and is removed by the sanitizer below.
    options.render.unsafe_ = true;
    options
}

/// Render untrusted summary markdown into sanitized HTML.
///
/// Each call produces a complete fragment that replaces any prior result;
/// nothing accumulates between invocations.
pub fn render_summary(markdown: &str) -> String {
    let html = markdown_to_html(markdown, &render_options());
    let clean = ammonia::Builder::default().clean(&html).to_string();
    tag_summary_lists(&clean)
}

/// Apply [`SUMMARY_LIST_CLASS`] to every unordered list.
///
/// Runs after sanitization: the allow-list strips all attributes from list
/// elements, so `<ul>` appears verbatim and the textual replacement is
/// exact.
fn tag_summary_lists(html: &str) -> String {
    html.replace("<ul>", &format!("<ul class=\"{SUMMARY_LIST_CLASS}\">"))
}
