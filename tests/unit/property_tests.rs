/*!
 * Randomized tests for deduplication, ordering and blank skipping
 */

use proptest::prelude::*;
use std::collections::BTreeSet;

use glossary_builder::glossary::GlossaryBuilder;

fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 ()/-]{0,12}",
        Just("   ".to_string()),
        Just("Beta".to_string()),
        Just(" Beta ".to_string()),
        Just("金融".to_string()),
    ]
}

proptest! {
    #[test]
    fn build_keeps_each_trimmed_term_once(terms in prop::collection::vec(term_strategy(), 0..40)) {
        let doc = GlossaryBuilder::default().build(&terms);

        let expected: BTreeSet<&str> = terms
            .iter()
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .collect();
        let sources: Vec<&str> = doc.terms.iter().map(|term| term.source.as_str()).collect();

        prop_assert_eq!(sources.len(), expected.len());
        prop_assert_eq!(sources, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn build_orders_sources_by_code_point(terms in prop::collection::vec(term_strategy(), 0..40)) {
        let doc = GlossaryBuilder::default().build(&terms);

        for pair in doc.terms.windows(2) {
            prop_assert!(pair[0].source <= pair[1].source);
        }
    }

    #[test]
    fn build_never_emits_blank_sources(terms in prop::collection::vec(term_strategy(), 0..40)) {
        let doc = GlossaryBuilder::default().build(&terms);

        for term in &doc.terms {
            prop_assert!(!term.source.trim().is_empty());
            prop_assert_eq!(term.source.trim(), term.source.as_str());
        }
    }
}
