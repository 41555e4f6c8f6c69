//! Fixture-driven extraction tests.

use crate::common;
use svgx_extract::{extract, extract_with_options, AttrValue, ElementKind, ExtractOptions};

#[test]
fn sample_yields_three_svg_blocks_in_order() {
    let extraction = extract(common::sample());
    assert!(extraction.skipped.is_empty());

    let kinds: Vec<_> = extraction.records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Svg, ElementKind::Svg, ElementKind::Svg]
    );

    // Left-to-right order by source offset.
    let starts: Vec<_> = extraction.records.iter().map(|r| r.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

#[test]
fn sample_shallow_inner_is_raw_text() {
    let extraction = extract(common::sample());
    let second = &extraction.records[1];
    assert_eq!(second.attributes.get("width"), Some(&AttrValue::Number(120.0)));
    assert_eq!(second.attributes.get("height"), Some(&AttrValue::Number(80.0)));
    assert!(second.inner.starts_with("<Rect"));
    assert!(second.inner.ends_with("/>"));
    assert!(second.children.is_empty());
}

#[test]
fn sample_recursive_builds_the_component_tree() {
    let options = ExtractOptions { recursive: true };
    let extraction = extract_with_options(common::sample(), &options);

    let children: Vec<Vec<ElementKind>> = extraction
        .records
        .iter()
        .map(|r| r.children.iter().map(|c| c.kind).collect())
        .collect();
    assert_eq!(
        children,
        vec![
            vec![ElementKind::Circle],
            vec![ElementKind::Rect],
            vec![ElementKind::G],
        ]
    );

    let g = &extraction.records[2].children[0];
    let grandchildren: Vec<_> = g.children.iter().map(|c| c.kind).collect();
    assert_eq!(grandchildren, vec![ElementKind::Path, ElementKind::Circle]);
}

#[test]
fn recursive_spans_index_into_the_original_source() {
    let source = common::sample();
    let options = ExtractOptions { recursive: true };
    let extraction = extract_with_options(source, &options);

    let circle = &extraction.records[0].children[0];
    assert_eq!(
        &source[circle.span.clone()],
        r##"<Circle cx="50" cy="50" r="25" fill="#007ACC" />"##
    );
}

#[test]
fn kitchensink_covers_the_wider_vocabulary() {
    let options = ExtractOptions { recursive: true };
    let extraction = extract_with_options(common::kitchensink(), &options);
    assert!(extraction.skipped.is_empty());
    assert_eq!(extraction.records.len(), 1);

    let svg = &extraction.records[0];
    assert_eq!(svg.attributes.get("width"), Some(&AttrValue::Expression));

    let kinds: Vec<_> = svg.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Defs,
            ElementKind::G,
            ElementKind::Circle,
            ElementKind::Use,
            ElementKind::Text,
        ]
    );

    let defs = &svg.children[0];
    let def_kinds: Vec<_> = defs.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        def_kinds,
        vec![ElementKind::LinearGradient, ElementKind::ClipPath]
    );

    let gradient = &defs.children[0];
    assert_eq!(gradient.children.len(), 2);
    assert_eq!(
        gradient.children[1].attributes.get("stopColor"),
        Some(&AttrValue::Expression)
    );

    let text = &svg.children[4];
    assert_eq!(text.children.len(), 1);
    assert_eq!(text.children[0].kind, ElementKind::TSpan);
    assert_eq!(text.children[0].inner, "sink");
}

#[test]
fn malformed_input_degrades_instead_of_failing() {
    let extraction = extract(common::malformed());

    let kinds: Vec<_> = extraction.records.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![ElementKind::Circle, ElementKind::Rect]);

    // The unterminated Path opening tag and the unclosed Svg container both
    // land on the side-channel.
    assert_eq!(extraction.skipped.len(), 2);
    let skipped: Vec<_> = extraction
        .skipped
        .iter()
        .map(|s| s.reason.to_string())
        .collect();
    assert_eq!(
        skipped,
        vec![
            "unterminated <Path> element",
            "unterminated <Svg> element"
        ]
    );
}

#[test]
fn records_serialize_with_natural_attribute_json() {
    let extraction = extract(r##"<Circle cx="50" cy="50" r="25" fill="#007ACC" />"##);
    let json = serde_json::to_value(&extraction.records).unwrap();
    assert_eq!(json[0]["kind"], "Circle");
    assert_eq!(
        json[0]["attributes"],
        serde_json::json!({"cx": 50, "cy": 50, "r": 25, "fill": "#007ACC"})
    );
    assert_eq!(json[0]["inner"], "");
}
