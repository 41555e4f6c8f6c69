//! The closed vocabulary of recognized graphics elements.
//!
//! Extraction only ever produces records for members of this set; any other
//! tag name in the source is left untouched. Lookup is case-sensitive, so
//! host-language elements like `<svg>` or `<circle>` never match.

use serde::Serialize;

/// A member of the closed graphics-element vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    Svg,
    Circle,
    Ellipse,
    G,
    Text,
    TSpan,
    TextPath,
    Path,
    Polygon,
    Polyline,
    Line,
    Rect,
    Use,
    Image,
    Symbol,
    Defs,
    LinearGradient,
    RadialGradient,
    Stop,
    ClipPath,
    Pattern,
    Mask,
    ForeignObject,
}

/// How an element is emitted in the converted SVG markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagForm {
    /// Emitted as `<tag ... />` when there is no inner content.
    SelfClosing,
    /// Always emitted with explicit open/close tags.
    Container,
}

impl ElementKind {
    /// All vocabulary members, in a fixed order (useful for docs and tests).
    pub const ALL: &'static [ElementKind] = &[
        ElementKind::Svg,
        ElementKind::Circle,
        ElementKind::Ellipse,
        ElementKind::G,
        ElementKind::Text,
        ElementKind::TSpan,
        ElementKind::TextPath,
        ElementKind::Path,
        ElementKind::Polygon,
        ElementKind::Polyline,
        ElementKind::Line,
        ElementKind::Rect,
        ElementKind::Use,
        ElementKind::Image,
        ElementKind::Symbol,
        ElementKind::Defs,
        ElementKind::LinearGradient,
        ElementKind::RadialGradient,
        ElementKind::Stop,
        ElementKind::ClipPath,
        ElementKind::Pattern,
        ElementKind::Mask,
        ElementKind::ForeignObject,
    ];

    /// Look up a tag name in the vocabulary. Case-sensitive.
    pub fn from_tag_name(name: &str) -> Option<ElementKind> {
        let kind = match name {
            "Svg" => ElementKind::Svg,
            "Circle" => ElementKind::Circle,
            "Ellipse" => ElementKind::Ellipse,
            "G" => ElementKind::G,
            "Text" => ElementKind::Text,
            "TSpan" => ElementKind::TSpan,
            "TextPath" => ElementKind::TextPath,
            "Path" => ElementKind::Path,
            "Polygon" => ElementKind::Polygon,
            "Polyline" => ElementKind::Polyline,
            "Line" => ElementKind::Line,
            "Rect" => ElementKind::Rect,
            "Use" => ElementKind::Use,
            "Image" => ElementKind::Image,
            "Symbol" => ElementKind::Symbol,
            "Defs" => ElementKind::Defs,
            "LinearGradient" => ElementKind::LinearGradient,
            "RadialGradient" => ElementKind::RadialGradient,
            "Stop" => ElementKind::Stop,
            "ClipPath" => ElementKind::ClipPath,
            "Pattern" => ElementKind::Pattern,
            "Mask" => ElementKind::Mask,
            "ForeignObject" => ElementKind::ForeignObject,
            _ => return None,
        };
        Some(kind)
    }

    /// The dialect-side tag name, e.g. `LinearGradient`.
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Svg => "Svg",
            ElementKind::Circle => "Circle",
            ElementKind::Ellipse => "Ellipse",
            ElementKind::G => "G",
            ElementKind::Text => "Text",
            ElementKind::TSpan => "TSpan",
            ElementKind::TextPath => "TextPath",
            ElementKind::Path => "Path",
            ElementKind::Polygon => "Polygon",
            ElementKind::Polyline => "Polyline",
            ElementKind::Line => "Line",
            ElementKind::Rect => "Rect",
            ElementKind::Use => "Use",
            ElementKind::Image => "Image",
            ElementKind::Symbol => "Symbol",
            ElementKind::Defs => "Defs",
            ElementKind::LinearGradient => "LinearGradient",
            ElementKind::RadialGradient => "RadialGradient",
            ElementKind::Stop => "Stop",
            ElementKind::ClipPath => "ClipPath",
            ElementKind::Pattern => "Pattern",
            ElementKind::Mask => "Mask",
            ElementKind::ForeignObject => "ForeignObject",
        }
    }

    /// The SVG output tag name from the explicit mapping table, if any.
    ///
    /// Elements without an explicit mapping use the default lowering rule
    /// (lowercased tag name, container form) — see [`ElementKind::svg_tag_name`].
    pub fn explicit_svg_mapping(&self) -> Option<(&'static str, TagForm)> {
        let mapped = match self {
            ElementKind::Svg => ("svg", TagForm::Container),
            ElementKind::G => ("g", TagForm::Container),
            ElementKind::Text => ("text", TagForm::Container),
            ElementKind::Circle => ("circle", TagForm::SelfClosing),
            ElementKind::Rect => ("rect", TagForm::SelfClosing),
            ElementKind::Path => ("path", TagForm::SelfClosing),
            ElementKind::Line => ("line", TagForm::SelfClosing),
            ElementKind::Polygon => ("polygon", TagForm::SelfClosing),
            ElementKind::Polyline => ("polyline", TagForm::SelfClosing),
            ElementKind::Ellipse => ("ellipse", TagForm::SelfClosing),
            _ => return None,
        };
        Some(mapped)
    }

    /// The SVG output tag name, falling back to the lowercased dialect name.
    pub fn svg_tag_name(&self) -> String {
        match self.explicit_svg_mapping() {
            Some((tag, _)) => tag.to_string(),
            None => self.tag_name().to_ascii_lowercase(),
        }
    }

    /// The output form: explicit table entry, or container for the fallback
    /// rule (fallback elements always wrap their inner content).
    pub fn tag_form(&self) -> TagForm {
        match self.explicit_svg_mapping() {
            Some((_, form)) => form,
            None => TagForm::Container,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag_name())
    }
}
