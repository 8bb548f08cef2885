//! HTML text escaping.
//!
//! Markup content is authored by hand and rendered into an HTML document, so
//! every character that could open a tag, an entity, or close an attribute is
//! replaced by its entity form.

use std::borrow::Cow;

/// Appends `ch` to `out`, replaced by its entity if it is special in HTML.
pub fn push_escaped_char(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Escapes `text` for use as HTML text content or a quoted attribute value.
///
/// Borrows the input unchanged when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use alice_domain::common::escape_html;
///
/// assert_eq!(escape_html("<b>"), "&lt;b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        push_escaped_char(&mut out, ch);
    }
    Cow::Owned(out)
}
