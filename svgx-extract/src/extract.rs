//! Driving the scanner across whole source text to build component records.
//!
//! `extract` is total: malformed input degrades to a smaller record list plus
//! diagnostics on the side-channel, never an error. Records come back in
//! source order and are never mutated after being built.

use crate::attrs::{parse_attributes, AttrMap};
use crate::scanner::{scan_elements, ElementSpan, Skip};
use crate::vocab::ElementKind;
use serde::Serialize;
use std::ops::Range;

/// The structured result of extracting one matched element occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    /// The vocabulary member this record was matched as.
    pub kind: ElementKind,
    /// Attribute mapping from the opening tag, in source order.
    pub attributes: AttrMap,
    /// Trimmed raw text between the opening and closing tags; empty for
    /// self-closing elements.
    pub inner: String,
    /// Nested records, populated only in recursive mode.
    pub children: Vec<ComponentRecord>,
    /// Byte range of the full matched span in the source text.
    pub span: Range<usize>,
    pub self_closing: bool,
}

/// Result of one extraction call: records in source order plus the
/// diagnostic side-channel of abandoned candidates.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Extraction {
    pub records: Vec<ComponentRecord>,
    pub skipped: Vec<Skip>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Knobs for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// Re-run extraction over each record's inner content, building a
    /// nested tree. Shallow (the default) treats inner content as raw text.
    pub recursive: bool,
}

/// Extract all top-level vocabulary elements from `source`, shallow mode.
pub fn extract(source: &str) -> Extraction {
    extract_with_options(source, &ExtractOptions::default())
}

/// Extract with explicit options. Zero matches is a valid, empty result.
pub fn extract_with_options(source: &str, options: &ExtractOptions) -> Extraction {
    let (spans, skipped) = scan_elements(source);
    let mut extraction = Extraction {
        records: Vec::with_capacity(spans.len()),
        skipped,
    };

    for span in &spans {
        extraction
            .records
            .push(record_from_span(source, span, options, &mut extraction.skipped));
    }

    extraction
}

fn record_from_span(
    source: &str,
    span: &ElementSpan,
    options: &ExtractOptions,
    skipped: &mut Vec<Skip>,
) -> ComponentRecord {
    let opening_tag = &source[span.start..span.open_end];
    let attributes = parse_attributes(opening_tag);

    let raw_inner = if span.self_closing {
        ""
    } else {
        &source[span.open_end..span.close_start]
    };

    let children = if options.recursive && !span.self_closing {
        let mut nested = extract_with_options(raw_inner, options);
        offset_records(&mut nested.records, span.open_end);
        for skip in &mut nested.skipped {
            skip.offset += span.open_end;
        }
        skipped.append(&mut nested.skipped);
        nested.records
    } else {
        Vec::new()
    };

    ComponentRecord {
        kind: span.kind,
        attributes,
        inner: raw_inner.trim().to_string(),
        children,
        span: span.start..span.end,
        self_closing: span.self_closing,
    }
}

/// Shift record spans (recursively) into the enclosing coordinate space.
fn offset_records(records: &mut [ComponentRecord], base: usize) {
    for record in records {
        record.span = record.span.start + base..record.span.end + base;
        offset_records(&mut record.children, base);
    }
}
