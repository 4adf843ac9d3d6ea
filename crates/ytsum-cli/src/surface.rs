//! Terminal implementation of the submission surface.

use std::io::Write;
use std::path::PathBuf;

use ytsum_client::SummarizeSurface;

/// Maps the submission surface onto a terminal: alerts and the loading
/// indicator go to stderr, result text to stdout, rendered HTML to an
/// optional file.
pub struct TerminalSurface {
    html_out: Option<PathBuf>,
}

impl TerminalSurface {
    pub fn new(html_out: Option<PathBuf>) -> Self {
        Self { html_out }
    }
}

impl SummarizeSurface for TerminalSurface {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn show_loading(&self) {
        eprint!("Summarizing...");
        let _ = std::io::stderr().flush();
    }

    fn hide_loading(&self) {
        eprintln!();
    }

    fn clear_result(&self) {}

    fn set_result_text(&self, text: &str) {
        println!("{text}");
    }

    fn set_result_html(&self, html: &str) {
        match &self.html_out {
            Some(path) => match std::fs::write(path, html) {
                Ok(()) => eprintln!("wrote {}", path.display()),
                Err(err) => eprintln!("failed to write {}: {err}", path.display()),
            },
            None => println!("{html}"),
        }
    }
}
