/// Escapes text for use inside HTML markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped free text with line breaks kept, for `dangerous_inner_html`.
///
/// This is the only place user-provided text becomes raw markup.
pub fn multiline_html(text: &str) -> String {
    escape_html(text.trim())
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}
