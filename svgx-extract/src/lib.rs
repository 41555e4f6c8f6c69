//! Extraction and SVG conversion for JSX vector-graphics components
//!
//!     This crate locates components written in a JSX-like graphics dialect
//!     (the react-native-svg vocabulary: Svg, Circle, Rect, G, gradients,
//!     clipping, text and friends) inside arbitrary source text, parses them
//!     into typed records, and converts them to standard SVG markup for
//!     visual inspection.
//!
//!     This is a pure lib: it powers the svgx CLI but is shell agnostic — no
//!     file reading, no printing, no env vars. Callers hand in source text
//!     and a display identifier and get back structured records or rendered
//!     strings.
//!
//! Architecture
//!
//!     The pipeline is leaf-first: each stage is usable on its own and the
//!     later stages drive the earlier ones.
//!
//!     source text
//!         → scanner    locates vocabulary-element spans (tokenizing scan,
//!                      quote/brace aware, depth-counted close-tag pairing)
//!         → attrs      parses each opening tag into a typed attribute map
//!         → extract    builds ordered ComponentRecords (+ skip diagnostics)
//!         → svg        converts records to standard SVG markup
//!         → preview    wraps fragments into a presentable HTML document
//!
//!     The file structure:
//!     .
//!     ├── lib.rs
//!     ├── error.rs        # PreviewError
//!     ├── vocab.rs        # ElementKind: the closed element vocabulary
//!     ├── attrs.rs        # AttrValue / AttrMap, opening-tag parsing
//!     ├── scanner.rs      # ElementSpan location, Skip diagnostics
//!     ├── extract.rs      # ComponentRecord, Extraction
//!     ├── svg.rs          # record → SVG markup conversion
//!     └── preview.rs      # HTML preview assembly, themes
//!
//! Error Philosophy
//!
//!     Extraction is total. Source files are edited live and are malformed
//!     more often than not, so a bad element can never fail the whole call:
//!     it becomes a Skip on the extraction result's side-channel and the
//!     scan moves on. Zero matches is an empty result, not an error. The
//!     only Result-returning surfaces are the genuinely failable ones
//!     (fragment selection by index, theme lookup by name).
//!
//! Matching Semantics
//!
//!     Top-level means one linear pass: the scan resumes after each matched
//!     span, so nested elements live inside their parent's raw inner text
//!     rather than surfacing as separate records. Recursive extraction
//!     re-runs the pass over inner content and builds a nested tree; it is
//!     opt-in via ExtractOptions. Same-named nesting (a G inside a G) is
//!     paired with a depth counter, so the matched span always ends at the
//!     close tag that actually balances the open.
//!
//!     Everything is deterministic: the same input yields the same records,
//!     the same attribute order, the same output bytes.

pub mod attrs;
pub mod error;
pub mod extract;
pub mod preview;
pub mod scanner;
pub mod svg;
pub mod vocab;

pub use attrs::{parse_attributes, AttrMap, AttrValue, EXPRESSION_PLACEHOLDER};
pub use error::PreviewError;
pub use extract::{extract, extract_with_options, ComponentRecord, ExtractOptions, Extraction};
pub use preview::{
    default_css, render_document, render_fragment, render_fragments, PreviewOptions, PreviewTheme,
};
pub use scanner::{Skip, SkipReason};
pub use svg::{convert_all, convert_component, ConvertOptions};
pub use vocab::{ElementKind, TagForm};
