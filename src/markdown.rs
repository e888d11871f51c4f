use pulldown_cmark::{Options, Parser, html};

/// Renders markdown to HTML. Acceptance criteria are free text authored by
/// the same local user who views them, so the output is trusted as-is.
pub fn render(markdown_input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown_input, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
