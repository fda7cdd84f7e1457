//! Property tests for section filtering.

use proptest::prelude::*;

use layoutcheck::domain::entities::Section;
use layoutcheck::domain::services::SectionFilter;

const TAGS: &[&str] = &["desktop", "mobile", "tablet", "smoke", "wip"];

fn tag_list() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(TAGS, 0..=TAGS.len())
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

fn sections() -> impl Strategy<Value = Vec<Section>> {
    proptest::collection::vec(tag_list(), 0..8).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(i, tags)| Section::new(format!("section-{}", i)).with_tags(tags))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Exclusion always wins over inclusion.
    #[test]
    fn property_excluded_sections_never_run(
        sections in sections(),
        included in tag_list(),
        excluded in tag_list(),
    ) {
        let filter = SectionFilter::new(included, excluded.clone());
        for section in filter.active_sections(&sections) {
            prop_assert!(!section.has_any_tag(&excluded));
        }
    }

    /// PROPERTY: Active sections keep their declaration order.
    #[test]
    fn property_active_sections_preserve_order(
        sections in sections(),
        included in tag_list(),
        excluded in tag_list(),
    ) {
        let filter = SectionFilter::new(included, excluded);
        let positions: Vec<usize> = filter
            .active_sections(&sections)
            .iter()
            .map(|s| sections.iter().position(|o| o.name == s.name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: Without any tags every section runs.
    #[test]
    fn property_empty_filter_selects_everything(sections in sections()) {
        let filter = SectionFilter::default();
        prop_assert_eq!(filter.active_sections(&sections).len(), sections.len());
    }

    /// PROPERTY: A section is active iff it matches the inclusion list (or the
    /// list is empty) and carries no excluded tag.
    #[test]
    fn property_activity_matches_definition(
        tags in tag_list(),
        included in tag_list(),
        excluded in tag_list(),
    ) {
        let section = Section::new("s").with_tags(tags.clone());
        let expected = (included.is_empty() || tags.iter().any(|t| included.contains(t)))
            && !tags.iter().any(|t| excluded.contains(t));
        let filter = SectionFilter::new(included, excluded);
        prop_assert_eq!(filter.is_active(&section), expected);
    }
}
