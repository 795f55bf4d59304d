//! Properties-file parsing.
//!
//! Line-oriented `key=value` format: `#`/`!` comments, `=`/`:`/whitespace
//! separators, backslash line continuation and `\t \n \r \f \uXXXX` escapes.
//! Unescaped trailing whitespace is trimmed from values. Duplicate keys
//! resolve to the last occurrence.

use std::collections::HashMap;

use crate::error::ParseError;

/// Parse properties content into a key/value map.
pub fn parse(input: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut props = HashMap::new();

    for logical in logical_lines(input) {
        let (raw_key, raw_value) = split_key_value(&logical.text);
        let key = unescape(raw_key, logical.line)?;
        let value = unescape(raw_value, logical.line)?;
        props.insert(key, value);
    }

    Ok(props)
}

struct LogicalLine {
    /// 1-based number of the first physical line.
    line: usize,
    text: String,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continued physical lines and drop comments and blank lines.
fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut out = Vec::new();
    let mut current: Option<LogicalLine> = None;

    for (idx, physical) in physical_lines(input).enumerate() {
        let trimmed = physical.trim_start_matches(is_blank);

        if current.is_none() {
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            current = Some(LogicalLine {
                line: idx + 1,
                text: String::new(),
            });
        }

        let Some(logical) = current.as_mut() else {
            continue;
        };

        let trailing = trimmed.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            logical.text.push_str(&trimmed[..trimmed.len() - 1]);
        } else {
            logical.text.push_str(trimmed);
            out.extend(current.take());
        }
    }

    // A continuation marker on the final line has nothing to join.
    out.extend(current);
    out
}

/// Split on `\r\n`, `\n` or a lone `\r`.
fn physical_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(input);
    std::iter::from_fn(move || {
        let s = rest?;
        match s.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let skip = if s[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&s[pos + skip..]);
                Some(&s[..pos])
            }
            None => {
                rest = None;
                if s.is_empty() { None } else { Some(s) }
            }
        }
    })
}

/// Return the still-escaped key and value of a logical line.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut chars = line.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, trim_unescaped_end(rest))
}

/// Drop trailing whitespace unless it is escaped (`\ `).
fn trim_unescaped_end(raw: &str) -> &str {
    let mut end = raw.len();
    while let Some(c) = raw[..end].chars().next_back() {
        if !is_blank(c) {
            break;
        }
        let before = &raw[..end - c.len_utf8()];
        let slashes = before.chars().rev().take_while(|&b| b == '\\').count();
        if slashes % 2 == 1 {
            break;
        }
        end -= c.len_utf8();
    }
    &raw[..end]
}

fn unescape(raw: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    // UTF-16 code units from consecutive \u escapes, so surrogate pairs combine.
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out, line)?;
            out.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            break;
        };
        if escaped == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = hex
                .chars()
                .all(|c| c.is_ascii_hexdigit())
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .filter(|_| hex.len() == 4)
                .ok_or_else(|| ParseError {
                    line,
                    message: format!("malformed \\uxxxx encoding: \\u{hex}"),
                })?;
            units.push(unit);
            continue;
        }

        flush_units(&mut units, &mut out, line)?;
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }

    flush_units(&mut units, &mut out, line)?;
    Ok(out)
}

fn flush_units(units: &mut Vec<u16>, out: &mut String, line: usize) -> Result<(), ParseError> {
    if units.is_empty() {
        return Ok(());
    }
    let decoded = String::from_utf16(units).map_err(|_| ParseError {
        line,
        message: "unpaired surrogate in \\u escape".to_string(),
    })?;
    out.push_str(&decoded);
    units.clear();
    Ok(())
}
