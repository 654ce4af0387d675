//! Markdown rendering utilities.

/// Convert markdown content to sanitized HTML.
///
/// Generated content is untrusted, so the output is passed through `ammonia`.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = comrak::Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;

    let html_output = comrak::markdown_to_html(markdown, &options);
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bold_and_lists() {
        let html = markdown_to_html("**Key Points:**\n\n- one\n- two");
        assert!(html.contains("<strong>Key Points:</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
