//! Converting component records to standard SVG markup.
//!
//! Each vocabulary member either has an explicit output mapping (see
//! [`ElementKind::explicit_svg_mapping`]) or falls back to the default
//! lowering rule: lowercase the dialect name and wrap the inner content in
//! open/close tags. The fallback means conversion never fails for a
//! recognized element.
//!
//! Attribute values are XML-escaped on the way out; attribute order follows
//! source order for reproducible output.

use crate::extract::ComponentRecord;
use crate::scanner::scan_elements;
use crate::vocab::TagForm;

/// Knobs for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Convert nested vocabulary elements found in the inner content instead
    /// of splicing it verbatim. Shallow (the default) mirrors the
    /// single-pass behavior: inner content passes through untouched.
    pub recursive: bool,
}

/// Convert one record to an SVG element string.
pub fn convert_component(record: &ComponentRecord, options: &ConvertOptions) -> String {
    let tag = record.kind.svg_tag_name();
    let mut out = String::new();

    out.push('<');
    out.push_str(&tag);
    for (name, value) in record.attributes.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_xml(&value.to_string()));
        out.push('"');
    }

    // Self-closing-capable elements with no children self-close; container
    // elements always get explicit open/close tags, even when empty.
    if record.kind.tag_form() == TagForm::SelfClosing && record.inner.is_empty() {
        out.push_str(" />");
        return out;
    }

    out.push('>');
    if options.recursive {
        out.push_str(&convert_inner(&record.inner, options));
    } else {
        out.push_str(&record.inner);
    }
    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
    out
}

/// Convert every record, preserving order.
pub fn convert_all(records: &[ComponentRecord], options: &ConvertOptions) -> Vec<String> {
    records
        .iter()
        .map(|record| convert_component(record, options))
        .collect()
}

/// Recursively convert inner content: nested vocabulary elements are
/// re-extracted and converted in place, interleaved plain text is escaped.
fn convert_inner(inner: &str, options: &ConvertOptions) -> String {
    let (spans, _skips) = scan_elements(inner);
    if spans.is_empty() {
        return escape_xml(inner);
    }

    let mut out = String::new();
    let mut cursor = 0;
    for span in &spans {
        out.push_str(&escape_xml(&inner[cursor..span.start]));
        let nested = crate::extract::extract(&inner[span.start..span.end]);
        if let Some(record) = nested.records.first() {
            out.push_str(&convert_component(record, options));
        }
        cursor = span.end;
    }
    out.push_str(&escape_xml(&inner[cursor..]));
    out
}

/// Escape XML special characters in attribute values and text content.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
