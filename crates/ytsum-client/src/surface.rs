//! UI surface abstraction for the submission flow.

/// Handles to the pieces of UI one submission touches.
///
/// The flow receives these explicitly instead of reaching into shared page
/// state; implementations decide what the indicator and the result area
/// mean — a class flip on a page element, a terminal spinner, or a test
/// recorder.
pub trait SummarizeSurface {
    /// Blocking notification for input errors.
    fn alert(&self, message: &str);

    /// Show the loading indicator.
    fn show_loading(&self);

    /// Hide the loading indicator.
    fn hide_loading(&self);

    /// Clear the result area.
    fn clear_result(&self);

    /// Replace the result area with plain text. The text is never
    /// interpreted as HTML.
    fn set_result_text(&self, text: &str);

    /// Replace the result area with rendered HTML.
    fn set_result_html(&self, html: &str);
}
