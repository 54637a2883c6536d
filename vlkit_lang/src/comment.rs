//! Comment stripping that leaves line numbering intact.

use std::borrow::Cow;

/// Removes `//` and `/* */` comments from `text`.
///
/// Two guarantees hold for all inputs: a comment opener inside a
/// double-quoted string is not a comment, and every newline of the input
/// appears in the output, so downstream line numbers are unaffected.
/// Per Verilog rules, `//` inside a block comment is inert.
///
/// String state toggles on every `"`; a backslash before the quote does
/// not escape it.  Unterminated comments and strings are not errors: the
/// output simply reflects the scanner's final state.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    // No slash, no comment.
    if !text.contains('/') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut in_block = false;
    let mut in_line = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_line {
            if c == '\n' {
                in_line = false;
                out.push(c);
            }
        } else if in_block {
            if c == '\n' {
                out.push(c);
            } else if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block = false;
            }
        } else if in_string {
            out.push(c);
            if c == '"' {
                in_string = false;
            }
        } else {
            match c {
                '"' => {
                    in_string = true;
                    out.push(c);
                }
                '/' => match chars.peek() {
                    Some('/') => {
                        chars.next();
                        in_line = true;
                    }
                    Some('*') => {
                        chars.next();
                        in_block = true;
                    }
                    _ => out.push(c),
                },
                _ => out.push(c),
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests;
