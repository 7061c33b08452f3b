//! Output escaping for free-text fields.
//!
//! Escaping is character-level: markup is not parsed, every HTML-significant
//! character is replaced wherever it appears (text, tags, attribute values).
//! Apply only to values on their way out; stored and compared values stay raw.

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_opt(input: Option<&str>) -> Option<String> {
    input.map(escape_html)
}
