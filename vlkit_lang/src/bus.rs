//! Expansion of bus range expressions into ordered scalar references.
//!
//! A bus expression is a signal name with bracketed selectors, e.g.
//! `foo[5:1:2,10:9]`.  Each bracketed group holds comma-separated ranges
//! of the form `a`, `a:b`, or `a:b:s`; range endpoints may be any numeric
//! literal the [`crate::number`] module understands.  Expansion produces
//! one string per scalar bit.  When a specification carries several
//! bracketed groups, they zip: the output is as long as the largest
//! group, and shorter groups cycle through their indices, which matches
//! the connectivity reading of `x[1:0] = y[3:0]`.

use crate::number::number_value;

/// Scanner state while walking a bracketed group.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum BraState {
    Outside,
    ExpectBegin,
    ExpectEnd,
    ExpectStride,
}

/// One bracketed group: the text preceding it (brackets included) and the
/// expanded index strings.
struct BracketGroup {
    pretext: String,
    indices: Vec<String>,
}

/// Splits `text` on the given single-character delimiters, keeping the
/// delimiters as their own tokens.
fn split_delimited<'a>(text: &'a str, delims: &[char]) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut last = 0;
    for (pos, c) in text.char_indices() {
        if delims.contains(&c) {
            if pos > last {
                out.push(&text[last..pos]);
            }
            out.push(&text[pos..pos + c.len_utf8()]);
            last = pos + c.len_utf8();
        }
    }
    if last < text.len() {
        out.push(&text[last..]);
    }
    out
}

/// Expands one `begin[:end[:stride]]` range into `group`.  A range with a
/// non-numeric endpoint is passed through verbatim as a single index.
fn flush_range(
    group: &mut BracketGroup,
    begin: Option<&str>,
    end: Option<&str>,
    stride: Option<&str>,
) {
    let Some(begin_text) = begin else { return };
    let end_text = end.unwrap_or(begin_text);
    match (
        number_value(begin_text.trim()),
        number_value(end_text.trim()),
    ) {
        (Some(begin), Some(end)) => {
            let step = stride
                .and_then(|s| number_value(s.trim()))
                .filter(|&s| s > 0)
                .unwrap_or(1);
            let mut idx = begin;
            if begin >= end {
                while idx >= end {
                    group.indices.push(idx.to_string());
                    match idx.checked_sub(step) {
                        Some(next) => idx = next,
                        None => break,
                    }
                }
            } else {
                while idx <= end {
                    group.indices.push(idx.to_string());
                    match idx.checked_add(step) {
                        Some(next) => idx = next,
                        None => break,
                    }
                }
            }
        }
        _ => {
            let mut raw = String::from(begin_text);
            if let Some(end_text) = end {
                raw.push(':');
                raw.push_str(end_text);
            }
            if let Some(stride_text) = stride {
                raw.push(':');
                raw.push_str(stride_text);
            }
            group.indices.push(raw);
        }
    }
}

/// Expands a full bus specification: any number of bracketed groups, each
/// with comma-separated `a`, `a:b`, or `a:b:s` ranges.  A specification
/// without brackets comes back unchanged as a one-element list.  Malformed
/// input yields a best-effort expansion, never an error.
pub fn split_bus(bus: &str) -> Vec<String> {
    if !bus.contains('[') {
        return vec![bus.to_owned()];
    }
    let mut groups: Vec<BracketGroup> = Vec::new();
    let mut pretext = String::new();
    let mut state = BraState::Outside;
    let mut begin: Option<&str> = None;
    let mut end: Option<&str> = None;
    let mut stride: Option<&str> = None;
    for token in split_delimited(bus, &['[', ']', ':', ',']) {
        if state == BraState::Outside {
            if token == "[" {
                pretext.push('[');
                groups.push(BracketGroup {
                    pretext: std::mem::take(&mut pretext),
                    indices: Vec::new(),
                });
                state = BraState::ExpectBegin;
                (begin, end, stride) = (None, None, None);
            } else {
                pretext.push_str(token);
            }
            continue;
        }
        match token {
            ":" => {
                state = match state {
                    BraState::ExpectBegin => BraState::ExpectEnd,
                    // Colons past the stride position are ignored.
                    _ => BraState::ExpectStride,
                };
            }
            "," => {
                flush_range(groups.last_mut().unwrap(), begin, end, stride);
                (begin, end, stride) = (None, None, None);
                state = BraState::ExpectBegin;
            }
            "]" => {
                flush_range(groups.last_mut().unwrap(), begin, end, stride);
                (begin, end, stride) = (None, None, None);
                // The closing bracket opens the next stretch of pretext.
                pretext.push(']');
                state = BraState::Outside;
            }
            _ => match state {
                BraState::ExpectBegin => begin = Some(token),
                BraState::ExpectEnd => end = Some(token),
                BraState::ExpectStride => stride = Some(token),
                BraState::Outside => unreachable!(),
            },
        }
    }
    if state != BraState::Outside {
        // Unterminated bracket; flush what we have.
        flush_range(groups.last_mut().unwrap(), begin, end, stride);
    }
    for group in &mut groups {
        if group.indices.is_empty() {
            group.indices.push(String::new());
        }
    }
    let max_size = groups.iter().map(|g| g.indices.len()).max().unwrap_or(1);
    (0..max_size)
        .map(|idx| {
            let mut out = String::new();
            for group in &groups {
                out.push_str(&group.pretext);
                out.push_str(&group.indices[idx % group.indices.len()]);
            }
            out.push_str(&pretext);
            out
        })
        .collect()
}

/// Matches the fast shape `prefix [ msb : lsb ] suffix`: decimal indices,
/// a single bracketed group, nothing fancier.
fn match_simple_range(bus: &str) -> Option<(&str, u64, u64, &str)> {
    let open = bus.find('[')?;
    let prefix = &bus[..open + 1];
    let rest = &bus[open + 1..];
    let colon = rest.find(':')?;
    let msb_text = &rest[..colon];
    let rest = &rest[colon + 1..];
    let close = rest.find(']')?;
    let lsb_text = &rest[..close];
    let suffix = &rest[close..];
    if msb_text.is_empty() || !msb_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if lsb_text.is_empty() || !lsb_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if suffix[1..].contains('[') {
        return None;
    }
    Some((prefix, msb_text.parse().ok()?, lsb_text.parse().ok()?, suffix))
}

/// Expands the simple one-group form `prefix[a:b]suffix`.  No commas, no
/// stride; anything that doesn't match that shape (including a string
/// with no brackets at all) comes back unchanged as a one-element list.
pub fn split_bus_nocomma(bus: &str) -> Vec<String> {
    match match_simple_range(bus) {
        Some((prefix, msb, lsb, suffix)) => {
            let mut out = Vec::new();
            if msb >= lsb {
                let mut bit = msb;
                loop {
                    out.push(format!("{prefix}{bit}{suffix}"));
                    if bit == lsb {
                        break;
                    }
                    bit -= 1;
                }
            } else {
                for bit in msb..=lsb {
                    out.push(format!("{prefix}{bit}{suffix}"));
                }
            }
            out
        }
        None => vec![bus.to_owned()],
    }
}
