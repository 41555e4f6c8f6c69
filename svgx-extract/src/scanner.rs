//! Locating vocabulary-element spans in source text.
//!
//! A single linear pass over the source looks for `<Name` where `Name` is a
//! vocabulary member. The opening tag is walked with a quote/brace-aware
//! state machine (attribute values may contain `>` inside quotes or JSX
//! expressions), then the matching close tag is found with a depth counter so
//! that same-named nested elements pair correctly. The scan resumes after
//! each matched span, so elements nested inside a match are not reported
//! again at the top level.
//!
//! Failures never abort the scan: an opening tag with no close produces a
//! [`Skip`] diagnostic and the scan resumes one byte past the failed `<`.

use crate::vocab::ElementKind;
use serde::Serialize;

/// One located element occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpan {
    pub kind: ElementKind,
    /// Byte offset of the `<` that starts the span.
    pub start: usize,
    /// Byte offset just past the end of the span (past `/>` or `</Name>`).
    pub end: usize,
    /// Byte offset just past the opening tag's `>`.
    pub open_end: usize,
    /// Byte offset of the matching `</` for container form; equals `end`
    /// for self-closing spans.
    pub close_start: usize,
    pub self_closing: bool,
}

/// A candidate match that was abandoned, recorded for the caller's
/// diagnostic side-channel. Skips never fail the scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skip {
    /// Byte offset of the `<` that started the abandoned candidate.
    pub offset: usize,
    pub reason: SkipReason,
}

/// Why a candidate span produced no record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    /// No `>`, `/>`, or matching close tag before end of input.
    UnterminatedElement { element: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnterminatedElement { element } => {
                write!(f, "unterminated <{element}> element")
            }
        }
    }
}

/// Scan `source` for top-level vocabulary-element spans, in start-offset
/// order. Tolerates arbitrary surrounding text and multi-line content.
pub fn scan_elements(source: &str) -> (Vec<ElementSpan>, Vec<Skip>) {
    let mut spans = Vec::new();
    let mut skips = Vec::new();
    let mut i = 0;

    while let Some(rel) = source[i..].find('<') {
        let lt = i + rel;
        let name = read_word(source, lt + 1);

        let Some(kind) = ElementKind::from_tag_name(name) else {
            i = lt + 1;
            continue;
        };
        // Reject `<Circlefoo`-style names the word read already handles, but
        // also names glued to a non-delimiter like `<Circle"`.
        let after_name = lt + 1 + name.len();
        if !is_name_boundary(source.as_bytes().get(after_name).copied()) {
            i = lt + 1;
            continue;
        }

        match read_opening_tag(source, lt) {
            None => {
                skips.push(skip_unterminated(kind, lt));
                i = lt + 1;
            }
            Some(OpeningTag {
                open_end,
                self_closing: true,
            }) => {
                spans.push(ElementSpan {
                    kind,
                    start: lt,
                    end: open_end,
                    open_end,
                    close_start: open_end,
                    self_closing: true,
                });
                i = open_end;
            }
            Some(OpeningTag {
                open_end,
                self_closing: false,
            }) => match find_matching_close(source, kind, open_end) {
                Some((close_start, close_end)) => {
                    spans.push(ElementSpan {
                        kind,
                        start: lt,
                        end: close_end,
                        open_end,
                        close_start,
                        self_closing: false,
                    });
                    i = close_end;
                }
                None => {
                    skips.push(skip_unterminated(kind, lt));
                    i = lt + 1;
                }
            },
        }
    }

    (spans, skips)
}

fn skip_unterminated(kind: ElementKind, offset: usize) -> Skip {
    Skip {
        offset,
        reason: SkipReason::UnterminatedElement {
            element: kind.tag_name().to_string(),
        },
    }
}

struct OpeningTag {
    open_end: usize,
    self_closing: bool,
}

/// Walk an opening tag starting at its `<`, honoring quoted values and
/// brace expressions, until the terminating `>`. Returns None when the tag
/// never closes.
fn read_opening_tag(source: &str, start: usize) -> Option<OpeningTag> {
    let mut quote: Option<char> = None;
    let mut brace_depth = 0usize;
    let mut prev_was_slash = false;

    for (rel, ch) in source[start..].char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    prev_was_slash = false;
                }
                '{' => {
                    brace_depth += 1;
                    prev_was_slash = false;
                }
                '}' => {
                    brace_depth = brace_depth.saturating_sub(1);
                    prev_was_slash = false;
                }
                '>' if brace_depth == 0 => {
                    return Some(OpeningTag {
                        open_end: start + rel + 1,
                        self_closing: prev_was_slash,
                    });
                }
                '/' => prev_was_slash = true,
                _ => prev_was_slash = false,
            },
        }
    }
    None
}

/// Find the close tag pairing with an already-read opening tag of `kind`,
/// counting same-named nested opens so `<G><G/></G>` pairs correctly.
/// Returns `(close_start, close_end)`.
fn find_matching_close(source: &str, kind: ElementKind, from: usize) -> Option<(usize, usize)> {
    let name = kind.tag_name();
    let mut depth = 1usize;
    let mut i = from;

    while let Some(rel) = source[i..].find('<') {
        let lt = i + rel;

        if source[lt + 1..].starts_with('/') {
            let candidate = read_word(source, lt + 2);
            if candidate == name {
                if let Some(close_end) = read_close_tag_end(source, lt + 2 + name.len()) {
                    depth -= 1;
                    if depth == 0 {
                        return Some((lt, close_end));
                    }
                    i = close_end;
                    continue;
                }
            }
            i = lt + 1;
            continue;
        }

        let candidate = read_word(source, lt + 1);
        if candidate == name && is_name_boundary(source.as_bytes().get(lt + 1 + name.len()).copied())
        {
            // Same-named nested open: self-closing form leaves the depth
            // untouched, container form goes one deeper.
            match read_opening_tag(source, lt) {
                Some(tag) => {
                    if !tag.self_closing {
                        depth += 1;
                    }
                    i = tag.open_end;
                }
                None => i = lt + 1,
            }
            continue;
        }

        i = lt + 1;
    }

    None
}

/// From just past the name of a `</Name`, skip whitespace to the `>`.
/// Returns the offset just past it, or None for a malformed close tag.
fn read_close_tag_end(source: &str, from: usize) -> Option<usize> {
    for (rel, ch) in source[from..].char_indices() {
        if ch == '>' {
            return Some(from + rel + 1);
        }
        if !ch.is_whitespace() {
            return None;
        }
    }
    None
}

fn read_word(source: &str, from: usize) -> &str {
    let bytes = source.as_bytes();
    let mut end = from;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }
    &source[from..end]
}

fn is_name_boundary(b: Option<u8>) -> bool {
    match b {
        None => true,
        Some(b) => !(b.is_ascii_alphanumeric() || b == b'_'),
    }
}
