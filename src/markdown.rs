use pulldown_cmark::{html, Event, Options, Parser};

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render GitHub-flavoured markdown to HTML.
///
/// Single newlines inside a paragraph become `<br />`. Raw HTML in the input
/// is passed through untouched.
pub fn render_markdown(input: &str) -> String {
    let parser = Parser::new_ext(input, options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut out = String::with_capacity(input.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
