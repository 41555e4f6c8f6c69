//! Property tests for the extraction invariants.

use proptest::prelude::*;
use svgx_extract::{extract, extract_with_options, ExtractOptions};

proptest! {
    /// Re-running extraction on identical input yields identical results —
    /// no hidden randomness or time-dependence, in either mode.
    #[test]
    fn extraction_is_deterministic(source in ".{0,400}") {
        prop_assert_eq!(extract(&source), extract(&source));

        let options = ExtractOptions { recursive: true };
        prop_assert_eq!(
            extract_with_options(&source, &options),
            extract_with_options(&source, &options)
        );
    }

    /// Source text with no `<` at all cannot contain vocabulary elements,
    /// so extraction must return an empty, non-error result.
    #[test]
    fn no_tags_means_empty_result(source in "[^<]{0,400}") {
        let extraction = extract(&source);
        prop_assert!(extraction.records.is_empty());
        prop_assert!(extraction.skipped.is_empty());
    }

    /// Records always come back ordered by start offset, with spans inside
    /// the source bounds.
    #[test]
    fn records_are_ordered_and_in_bounds(source in ".{0,400}") {
        let extraction = extract(&source);
        let mut last_start = 0;
        for record in &extraction.records {
            prop_assert!(record.span.start >= last_start);
            prop_assert!(record.span.end <= source.len());
            prop_assert!(record.span.start < record.span.end);
            last_start = record.span.start;
        }
    }

    /// Self-closing records never carry inner content.
    #[test]
    fn self_closing_records_have_empty_inner(source in ".{0,400}") {
        for record in extract(&source).records {
            if record.self_closing {
                prop_assert_eq!(record.inner.as_str(), "");
                prop_assert!(record.children.is_empty());
            }
        }
    }
}
