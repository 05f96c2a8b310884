//! Markdown Rendering
//!
//! Renders announcement bodies to HTML with pulldown-cmark.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render an announcement body to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_basic_blocks() {
        let html = render_markdown("# Call for proposals\n\nDeadline **March 1**.");
        assert!(html.contains("<h1>Call for proposals</h1>"));
        assert!(html.contains("<strong>March 1</strong>"));
    }

    #[test]
    fn table_extension_is_enabled() {
        let html = render_markdown("| Fund | Cap |\n|------|-----|\n| A | 5000 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn strikethrough_extension_is_enabled() {
        let html = render_markdown("~~superseded~~");
        assert!(html.contains("<del>superseded</del>"));
    }
}
