/// Escapes a string for use inside a double-quoted nGQL literal
pub fn escape_for_query(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps text in double quotes after escaping it
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_for_query(s))
}
