//! Assembling converted markup into a presentable preview document.
//!
//! This is templating, not logic: each component becomes a card with its
//! element name, its attribute mapping, the converted markup (both as source
//! and rendered), wrapped into a complete HTML document with embedded CSS.
//! The condensed variants return bare fragments with no decoration.

use crate::error::PreviewError;
use crate::extract::ComponentRecord;
use crate::svg::{convert_all, convert_component, ConvertOptions};
use crate::vocab::ElementKind;

/// CSS theme for the preview document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewTheme {
    #[default]
    Light,
    Dark,
}

impl PreviewTheme {
    /// Parse a theme name as used in configuration and on the CLI.
    pub fn from_name(name: &str) -> Result<PreviewTheme, PreviewError> {
        match name {
            "light" => Ok(PreviewTheme::Light),
            "dark" => Ok(PreviewTheme::Dark),
            other => Err(PreviewError::UnknownTheme(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PreviewTheme::Light => "light",
            PreviewTheme::Dark => "dark",
        }
    }

    fn css(&self) -> &'static str {
        match self {
            PreviewTheme::Light => include_str!("../css/themes/theme-light.css"),
            PreviewTheme::Dark => include_str!("../css/themes/theme-dark.css"),
        }
    }
}

/// Options for full-document preview assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub theme: PreviewTheme,
    /// Include the converted markup source under each rendered component.
    pub show_markup: bool,
    /// Include the attribute badge list in each card header.
    pub show_attributes: bool,
    pub convert: ConvertOptions,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        PreviewOptions {
            theme: PreviewTheme::default(),
            show_markup: true,
            show_attributes: true,
            convert: ConvertOptions::default(),
        }
    }
}

/// The baseline CSS embedded in every preview document, for callers that
/// want to extend or replace the styling.
pub fn default_css() -> &'static str {
    include_str!("../css/preview.css")
}

/// Assemble a complete preview document for the extracted components.
///
/// `display_id` is a human-readable identifier (typically the source file
/// name), used only for presentation. Zero components produces a placeholder
/// block rather than an empty body.
pub fn render_document(
    records: &[ComponentRecord],
    display_id: &str,
    options: &PreviewOptions,
) -> String {
    let body = if records.is_empty() {
        "<div class=\"no-components\">No SVG components found in this file.</div>\n".to_string()
    } else {
        let mut cards = String::new();
        for record in records {
            cards.push_str(&render_card(record, options));
        }
        cards
    };

    let baseline_css = default_css();
    let theme_css = options.theme.css();
    let escaped_id = escape_html(display_id);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="svgx-extract">
  <title>SVG Preview: {escaped_id}</title>
  <style>
{baseline_css}
{theme_css}
  </style>
</head>
<body>
<div class="header">
  <h1>SVG Component Preview</h1>
  <div class="file-path">{escaped_id}</div>
</div>
{body}</body>
</html>"##
    )
}

/// Condensed variant: the bare converted markup fragments, no decoration.
pub fn render_fragments(records: &[ComponentRecord], options: &ConvertOptions) -> Vec<String> {
    convert_all(records, options)
}

/// A single standalone converted fragment, by extraction-order index.
pub fn render_fragment(
    records: &[ComponentRecord],
    index: usize,
    options: &ConvertOptions,
) -> Result<String, PreviewError> {
    records
        .get(index)
        .map(|record| convert_component(record, options))
        .ok_or(PreviewError::ComponentIndexOutOfRange {
            index,
            len: records.len(),
        })
}

fn render_card(record: &ComponentRecord, options: &PreviewOptions) -> String {
    let fragment = convert_component(record, &options.convert);
    let mut card = String::new();

    card.push_str("<div class=\"component-card\">\n");
    card.push_str("  <div class=\"component-header\">\n");
    card.push_str(&format!("    <h3>{}</h3>\n", record.kind.tag_name()));

    if options.show_attributes && !record.attributes.is_empty() {
        card.push_str("    <div class=\"component-attrs\">\n");
        for (name, value) in record.attributes.iter() {
            card.push_str(&format!(
                "      <span class=\"attr\"><strong>{}</strong>: {}</span>\n",
                escape_html(name),
                escape_html(&value.to_string())
            ));
        }
        card.push_str("    </div>\n");
    }
    card.push_str("  </div>\n");

    card.push_str("  <div class=\"component-preview\">\n");
    if options.show_markup {
        card.push_str(&format!(
            "    <div class=\"markup-code\"><pre><code>{}</code></pre></div>\n",
            escape_html(&fragment)
        ));
    }
    card.push_str(&format!(
        "    <div class=\"svg-render\">{}</div>\n",
        renderable_fragment(record, &fragment)
    ));
    card.push_str("  </div>\n");
    card.push_str("</div>\n");
    card
}

/// Fragments whose root is not `<svg>` would be invisible in a browser, so
/// the render pane wraps them in a default viewport.
fn renderable_fragment(record: &ComponentRecord, fragment: &str) -> String {
    if record.kind == ElementKind::Svg {
        fragment.to_string()
    } else {
        format!(r##"<svg width="100" height="100" viewBox="0 0 100 100">{fragment}</svg>"##)
    }
}

/// Escape HTML special characters in text
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
