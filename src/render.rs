use crate::table::LookupTable;

/// Render `table` as a Rust module exposing `get_types()`.
pub fn render(table: &LookupTable) -> String {
    let mut entries = String::new();
    for (key, id) in table.iter() {
        entries.push_str(&format!("                ({}, {id}),\n", quote_str(key)));
    }

    let source = format!(
        "
        use std::collections::HashMap;

        pub fn get_types<'a>() -> HashMap<&'a str, u64> {{
            const ENTRIES: [(&str, u64); {len}] = [
{entries}            ];
            ENTRIES.iter().copied().collect()
        }}\n",
        len = table.len(),
    );

    dedent(&source)
}

/// Quote `s` as a Rust string literal.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() || is_bidi_control(c) => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32))
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Text direction codepoints, which rustc refuses to see unescaped in a literal.
fn is_bidi_control(c: char) -> bool {
    matches!(
        c,
        '\u{61c}' | '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}'
    )
}

/// Strip the indentation shared by all non-blank lines, then leading whitespace.
pub fn dedent(text: &str) -> String {
    let indent_of = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(indent_of)
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        // blank lines may be shorter than the common indent
        if !line.trim().is_empty() {
            out.push_str(&line[indent..]);
        }
        out.push('\n');
    }

    out.trim_start().to_string()
}
