//! Shared fixture helpers for the integration tests.

/// A small component file with three Svg blocks (the README example).
pub fn sample() -> &'static str {
    include_str!("../fixtures/sample.tsx")
}

/// Gradients, clipping, expressions, text spans — most of the vocabulary.
pub fn kitchensink() -> &'static str {
    include_str!("../fixtures/kitchensink.tsx")
}

/// A file caught mid-edit: unterminated elements mixed with good ones.
pub fn malformed() -> &'static str {
    include_str!("../fixtures/malformed.tsx")
}
