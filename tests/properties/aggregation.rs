//! Property tests for error aggregation.

use proptest::prelude::*;
use std::collections::HashSet;

use layoutcheck::domain::entities::{ErrorId, ValidationError};
use layoutcheck::domain::services::ErrorAggregator;

fn error(spec: u8, rule: u8) -> ValidationError {
    let id = ErrorId::new(format!("spec-{}.yaml", spec), "Main", rule as usize, "header");
    ValidationError::new(id, "header visible", format!("failure {}", rule))
}

fn errors() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..3, 0u8..5), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every distinct identity is kept exactly once, in first-seen order.
    #[test]
    fn property_aggregation_dedups_by_identity(keys in errors()) {
        let mut aggregator = ErrorAggregator::new();
        let added = aggregator.extend(keys.iter().map(|(s, r)| error(*s, *r)));

        let mut seen = HashSet::new();
        let expected: Vec<(u8, u8)> = keys.iter().copied().filter(|k| seen.insert(*k)).collect();

        prop_assert_eq!(added, expected.len());
        let ids: Vec<ErrorId> = aggregator.errors().iter().map(|e| e.id().clone()).collect();
        let expected_ids: Vec<ErrorId> = expected.iter().map(|(s, r)| error(*s, *r).id().clone()).collect();
        prop_assert_eq!(ids, expected_ids);
    }

    /// PROPERTY: Feeding the same errors through a second channel changes nothing.
    #[test]
    fn property_second_channel_is_idempotent(keys in errors()) {
        let mut aggregator = ErrorAggregator::new();
        aggregator.extend(keys.iter().map(|(s, r)| error(*s, *r)));
        let before = aggregator.len();

        let added = aggregator.extend(keys.iter().map(|(s, r)| error(*s, *r)));

        prop_assert_eq!(added, 0);
        prop_assert_eq!(aggregator.len(), before);
    }
}
