//! Forward conversion tests (the transform is one-way by design; there is
//! no inverse to round-trip).

use crate::common;
use svgx_extract::{convert_all, convert_component, extract, ConvertOptions};

#[test]
fn circle_scenario_converts_exactly() {
    let extraction = extract(r##"<Circle cx="50" cy="50" r="25" fill="#007ACC" />"##);
    let svg = convert_component(&extraction.records[0], &ConvertOptions::default());
    assert_eq!(svg, r##"<circle cx="50" cy="50" r="25" fill="#007ACC" />"##);
}

#[test]
fn nested_svg_scenario_shallow_and_recursive() {
    let source = r##"<Svg width="120" height="80"><Rect x="10" y="10" width="100" height="60" fill="#FF6B6B" stroke="#333" strokeWidth="2" /></Svg>"##;
    let extraction = extract(source);
    assert_eq!(extraction.records.len(), 1);

    let shallow = convert_component(&extraction.records[0], &ConvertOptions::default());
    assert!(shallow.starts_with(r##"<svg width="120" height="80">"##));
    assert!(shallow.contains("<Rect")); // raw inner, untouched

    let recursive = convert_component(
        &extraction.records[0],
        &ConvertOptions { recursive: true },
    );
    assert_eq!(
        recursive,
        r##"<svg width="120" height="80"><rect x="10" y="10" width="100" height="60" fill="#FF6B6B" stroke="#333" strokeWidth="2" /></svg>"##
    );
}

#[test]
fn sample_converts_in_order() {
    let extraction = extract(common::sample());
    let fragments = convert_all(&extraction.records, &ConvertOptions { recursive: true });
    assert_eq!(fragments.len(), 3);
    assert!(fragments[0].contains(r##"<circle cx="50" cy="50" r="25" fill="#007ACC" />"##));
    assert!(fragments[1].contains("<rect"));
    assert!(fragments[2].contains("<g>"));
    assert!(fragments[2].contains("<path"));
}

#[test]
fn kitchensink_fallback_tags_are_lowercased() {
    let extraction = extract(common::kitchensink());
    let svg = convert_component(
        &extraction.records[0],
        &ConvertOptions { recursive: true },
    );

    assert!(svg.contains("<defs>"));
    assert!(svg.contains("<lineargradient id=\"grad\""));
    assert!(svg.contains("<stop offset=\"0\" stopColor=\"#FF6B6B\" />"));
    assert!(svg.contains("<clippath id=\"clip\">"));
    assert!(svg.contains("<use href=\"#clip\""));
    assert!(svg.contains("<tspan fontWeight=\"bold\">sink</tspan>"));
}

#[test]
fn expression_values_emit_the_placeholder() {
    let extraction = extract(common::kitchensink());
    let svg = convert_component(&extraction.records[0], &ConvertOptions::default());
    assert!(svg.contains(r##"width="[Expression]""##));
    assert!(svg.contains(r##"height="[Expression]""##));
}
