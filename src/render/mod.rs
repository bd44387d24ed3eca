//! Decision rendering seam
//!
//! The presentation layer is an external collaborator; this module owns
//! only the trait it plugs into, plus [`HtmlRenderer`], which produces
//! the markup the sample application's pages expose: a single element
//! whose class is "message" on success and "error" on denial.

use crate::access::Decision;

/// Renders a decision for the presentation layer
pub trait DecisionRenderer {
    /// Turn a decision into presentable output
    fn render(&self, decision: &Decision) -> String;
}

/// Renders a decision as an HTML span
///
/// Output: `<span class="message">Message: public</span>` or
/// `<span class="error">403 Forbidden</span>`. Message text is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionRenderer for HtmlRenderer {
    fn render(&self, decision: &Decision) -> String {
        format!(
            "<span class=\"{}\">{}</span>",
            decision.css_class,
            escape_html(&decision.display_message)
        )
    }
}

/// Minimal HTML escaping for text content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
