//! Attribute parsing for element opening tags.
//!
//! Given the raw text of an opening tag (including the tag name), produces an
//! ordered name → value mapping. Three value syntaxes are accepted:
//! double-quoted strings, single-quoted strings, and brace-delimited
//! expressions. Quoted values that parse under the plain decimal grammar
//! become numbers; everything else is kept verbatim. Brace expressions are
//! never evaluated — they are replaced by an opaque placeholder. Bare
//! attributes (no `=`) read as boolean true. Malformed fragments are skipped
//! silently; the parser only contributes what it can read.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Placeholder stored for brace-delimited expression values.
pub const EXPRESSION_PLACEHOLDER: &str = "[Expression]";

/// A parsed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Quoted value that parsed as a plain decimal number.
    Number(f64),
    /// Quoted value kept verbatim.
    Text(String),
    /// Bare attribute with no value; reads as boolean true.
    Flag,
    /// Brace-delimited expression, stored as an opaque marker.
    Expression,
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Integral values print without a trailing ".0" so that a round
            // trip of `cx="50"` emits `cx="50"`.
            AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => {
                write!(f, "{}", *n as i64)
            }
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Flag => f.write_str("true"),
            AttrValue::Expression => f.write_str(EXPRESSION_PLACEHOLDER),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < 9e15 => {
                serializer.serialize_i64(*n as i64)
            }
            AttrValue::Number(n) => serializer.serialize_f64(*n),
            AttrValue::Text(s) => serializer.serialize_str(s),
            AttrValue::Flag => serializer.serialize_bool(true),
            AttrValue::Expression => serializer.serialize_str(EXPRESSION_PLACEHOLDER),
        }
    }
}

/// Ordered attribute mapping. Keys are unique; a duplicate name overwrites
/// the earlier value but keeps its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttrMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttrMap {
    pub fn new() -> Self {
        AttrMap::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    fn insert(&mut self, name: String, value: AttrValue) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }
}

impl Serialize for AttrMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parse the attributes of an opening tag.
///
/// `opening_tag` is the full tag text, e.g. `<Circle cx="50" r='25' hidden>`
/// or `<Rect width={size} />`. Re-parsing the same text always yields the
/// same mapping.
pub fn parse_attributes(opening_tag: &str) -> AttrMap {
    let mut attrs = AttrMap::new();
    let bytes = opening_tag.as_bytes();
    let mut i = 0;

    // Skip the leading '<' and the tag name.
    if i < bytes.len() && bytes[i] == b'<' {
        i += 1;
    }
    i = skip_word(bytes, i);

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                i += 1;
            }
            b'>' => break,
            b'/' if matches!(bytes.get(i + 1), Some(b'>')) => break,
            c if is_word_byte(c) => {
                let name_start = i;
                i = skip_word(bytes, i);
                let name = &opening_tag[name_start..i];

                if bytes.get(i) == Some(&b'=') {
                    i += 1;
                    match parse_value(opening_tag, i) {
                        Some((value, next)) => {
                            attrs.insert(name.to_string(), value);
                            i = next;
                        }
                        // Unterminated or unrecognized value: drop this
                        // attribute and resynchronize at whitespace.
                        None => i = skip_to_whitespace(bytes, i),
                    }
                } else {
                    attrs.insert(name.to_string(), AttrValue::Flag);
                }
            }
            // Stray byte that can't start an attribute: skip it.
            _ => i += 1,
        }
    }

    attrs
}

fn parse_value(tag: &str, start: usize) -> Option<(AttrValue, usize)> {
    let bytes = tag.as_bytes();
    match bytes.get(start)? {
        quote @ (b'"' | b'\'') => {
            let content_start = start + 1;
            let rel = tag[content_start..].find(*quote as char)?;
            let content = &tag[content_start..content_start + rel];
            Some((coerce(content), content_start + rel + 1))
        }
        b'{' => {
            let end = match_braces(tag, start)?;
            Some((AttrValue::Expression, end))
        }
        _ => None,
    }
}

/// Find the index just past the brace matching the one at `start`.
/// Nested braces and quoted strings inside the expression are respected.
fn match_braces(tag: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (rel, ch) in tag[start..].char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(start + rel + ch.len_utf8());
                    }
                }
                _ => {}
            },
        }
    }
    None
}

/// Numeric coercion for quoted values: optionally signed decimal with an
/// optional fractional part. Deliberately tighter than a full float grammar —
/// exponents, hex, infinities and the empty string all stay strings.
fn coerce(content: &str) -> AttrValue {
    if is_plain_decimal(content) {
        match content.parse::<f64>() {
            Ok(n) => AttrValue::Number(n),
            Err(_) => AttrValue::Text(content.to_string()),
        }
    } else {
        AttrValue::Text(content.to_string())
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    if s.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in s.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn skip_word(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_word_byte(bytes[i]) {
        i += 1;
    }
    i
}

fn skip_to_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}
