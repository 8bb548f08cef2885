//! Markup to HTML

use alice_domain::MarkupText;

/// Render parsed markup as inline HTML.
///
/// Same-color runs are merged first, so `&cHot` yields one span rather than
/// three. Each break becomes `<br>`. Text is escaped.
pub fn render_markup_html(markup: &MarkupText) -> String {
    let mut html = String::new();
    for segment in markup.coalesced().segments() {
        match (segment.color(), segment.escaped_content()) {
            (Some(color), Some(content)) => {
                html.push_str("<span style=\"color: ");
                html.push_str(color.hex());
                html.push_str("\">");
                html.push_str(&content);
                html.push_str("</span>");
            }
            _ => html.push_str("<br>"),
        }
    }
    html
}
