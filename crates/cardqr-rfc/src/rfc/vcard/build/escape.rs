//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, semicolon, comma, and newline. Every other character,
/// including carriage return, is copied through.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

/// Reverses [`escape_text`].
///
/// `\N` is accepted as a newline as well. Unknown escapes and a trailing
/// lone backslash are kept literally.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('\\') => result.push('\\'),
            Some(';') => result.push(';'),
            Some(',') => result.push(','),
            Some('n' | 'N') => result.push('\n'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
