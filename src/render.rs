use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to an HTML fragment for previewing a draft.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!("<div class=\"markdown-body\">\n{body}</div>\n")
}
