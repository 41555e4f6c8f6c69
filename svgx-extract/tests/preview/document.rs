//! Preview document assembly over the fixtures.

use crate::common;
use svgx_extract::{
    extract, render_document, render_fragments, ConvertOptions, PreviewOptions, PreviewTheme,
};

#[test]
fn sample_preview_contains_one_card_per_component() {
    let extraction = extract(common::sample());
    let html = render_document(
        &extraction.records,
        "SampleSvg.tsx",
        &PreviewOptions::default(),
    );

    assert_eq!(html.matches(r##"<div class="component-card">"##).count(), 3);
    assert!(html.contains("SampleSvg.tsx"));
    assert!(!html.contains("No SVG components found"));
}

#[test]
fn preview_balances_its_own_tags() {
    let extraction = extract(common::kitchensink());
    let html = render_document(&extraction.records, "k.tsx", &PreviewOptions::default());

    for tag in ["<html", "<head", "<body", "<style", "<div", "<h1", "<h3"] {
        let open = html.matches(tag).count();
        let close = html.matches(&format!("</{}", &tag[1..])).count();
        assert_eq!(open, close, "unbalanced {tag}");
    }
}

#[test]
fn malformed_file_still_previews_the_good_parts() {
    let extraction = extract(common::malformed());
    let html = render_document(&extraction.records, "b.tsx", &PreviewOptions::default());
    assert!(html.contains("<h3>Circle</h3>"));
    assert!(html.contains("<h3>Rect</h3>"));
}

#[test]
fn empty_file_previews_the_placeholder() {
    let extraction = extract("const nothing = true;");
    let html = render_document(&extraction.records, "n.ts", &PreviewOptions::default());
    assert!(html.contains("No SVG components found"));
}

#[test]
fn condensed_fragments_carry_no_chrome() {
    let extraction = extract(common::sample());
    let fragments = render_fragments(&extraction.records, &ConvertOptions { recursive: true });
    assert_eq!(fragments.len(), 3);
    for fragment in &fragments {
        assert!(fragment.starts_with("<svg"));
        assert!(!fragment.contains("component-card"));
        assert!(!fragment.contains("<!DOCTYPE"));
    }
}

#[test]
fn recursive_preview_renders_nested_markup() {
    let extraction = extract(common::sample());
    let options = PreviewOptions {
        convert: ConvertOptions { recursive: true },
        ..PreviewOptions::default()
    };
    let html = render_document(&extraction.records, "s.tsx", &options);
    assert!(html.contains(r##"<circle cx="50" cy="50" r="25" fill="#007ACC" />"##));
    // Shallow keeps the dialect tag in the spliced inner content instead.
    let shallow = render_document(&extraction.records, "s.tsx", &PreviewOptions::default());
    assert!(shallow.contains("<Circle"));
}

#[test]
fn themes_only_change_the_palette() {
    let extraction = extract(common::sample());
    let light = render_document(&extraction.records, "s", &PreviewOptions::default());
    let dark = render_document(
        &extraction.records,
        "s",
        &PreviewOptions {
            theme: PreviewTheme::Dark,
            ..PreviewOptions::default()
        },
    );
    assert_eq!(
        light.matches(r##"<div class="component-card">"##).count(),
        dark.matches(r##"<div class="component-card">"##).count()
    );
    assert_ne!(light, dark);
}
