//! Property tests for error identity across a whole check.
//!
//! Generated specs reuse section names and requests repeat spec paths, so
//! every failing rule instance must survive the merge of pushed and
//! returned errors.

use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use layoutcheck::application::{CheckLayoutRequest, CheckLayoutUseCase};
use layoutcheck::domain::entities::{LayoutRule, Section, Specification};
use layoutcheck::domain::ports::{
    Browser, CaptureError, ListenerError, LoadError, Page, PageElement, SpecLoader,
    ValidationEvent, ValidationListener,
};
use layoutcheck::domain::value_objects::{Constraint, Properties, Rect};
use layoutcheck::infrastructure::PageSectionValidator;

const SECTION_NAMES: &[&str] = &["Header", "Footer"];
const SPEC_PATHS: &[&str] = &["a.yaml", "b.yaml"];

struct FixedPage;

impl Page for FixedPage {
    fn title(&self) -> String {
        "Fixed".to_string()
    }

    fn screen_area(&self) -> Rect {
        Rect::new(0, 0, 1000, 800)
    }

    fn find_element(&self, locator: &str) -> Option<PageElement> {
        (locator == "#present").then(|| PageElement::visible(Rect::new(0, 0, 100, 100)))
    }
}

struct FixedBrowser(FixedPage);

impl Browser for FixedBrowser {
    fn create_screenshot(&self) -> Result<PathBuf, CaptureError> {
        Err(CaptureError::Unsupported)
    }

    fn page(&self) -> &dyn Page {
        &self.0
    }
}

struct InMemoryLoader(HashMap<PathBuf, Specification>);

impl SpecLoader for InMemoryLoader {
    fn read(
        &self,
        path: &Path,
        _properties: &Properties,
        _page: &dyn Page,
    ) -> Result<Specification, LoadError> {
        self.0.get(path).cloned().ok_or_else(|| LoadError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

#[derive(Default)]
struct ErrorCounter(RefCell<usize>);

impl ValidationListener for ErrorCounter {
    fn on_event(&self, event: &ValidationEvent<'_>) -> Result<(), ListenerError> {
        if matches!(event, ValidationEvent::ErrorFound(_)) {
            *self.0.borrow_mut() += 1;
        }
        Ok(())
    }
}

/// Section outline: `true` marks a failing rule
#[derive(Debug, Clone)]
struct Outline {
    name: &'static str,
    rules: Vec<bool>,
    children: Vec<Outline>,
}

impl Outline {
    fn failing(&self) -> usize {
        self.rules.iter().filter(|failing| **failing).count()
            + self.children.iter().map(Outline::failing).sum::<usize>()
    }

    fn to_section(&self) -> Section {
        let mut section = Section::new(self.name);
        for failing in &self.rules {
            let object = if *failing { "missing" } else { "present" };
            section = section.with_rule(LayoutRule::new(object, Constraint::Visible));
        }
        for child in &self.children {
            section = section.with_section(child.to_section());
        }
        section
    }
}

fn outline(children: impl Strategy<Value = Vec<Outline>>) -> impl Strategy<Value = Outline> {
    (
        prop::sample::select(SECTION_NAMES),
        prop::collection::vec(any::<bool>(), 0..4),
        children,
    )
        .prop_map(|(name, rules, children)| Outline {
            name,
            rules,
            children,
        })
}

fn sections() -> impl Strategy<Value = Vec<Outline>> {
    let leaf = outline(Just(Vec::new()));
    prop::collection::vec(outline(prop::collection::vec(leaf, 0..3)), 0..4)
}

fn spec(path: &str, outlines: &[Outline]) -> Specification {
    outlines.iter().fold(
        Specification::new(path)
            .with_object("present", "#present")
            .with_object("missing", "#missing"),
        |spec, outline| spec.with_section(outline.to_section()),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The report holds one error per failing rule instance, per pass.
    #[test]
    fn property_every_failing_rule_instance_is_reported(
        first in sections(),
        second in sections(),
        picks in prop::collection::vec(0usize..2, 0..4),
    ) {
        let outlines = [first, second];
        let loader = InMemoryLoader(
            SPEC_PATHS
                .iter()
                .zip(&outlines)
                .map(|(path, outline)| (PathBuf::from(*path), spec(path, outline)))
                .collect(),
        );
        let use_case = CheckLayoutUseCase::new(loader, PageSectionValidator::new());
        let request = CheckLayoutRequest::new(picks.iter().map(|i| SPEC_PATHS[*i]));
        let counter = ErrorCounter::default();

        let report = use_case
            .check_layout(&FixedBrowser(FixedPage), &request, &counter, None)
            .unwrap();

        let expected: usize = picks
            .iter()
            .map(|i| outlines[*i].iter().map(Outline::failing).sum::<usize>())
            .sum();
        prop_assert_eq!(report.error_count(), expected);
        prop_assert_eq!(*counter.0.borrow(), expected);
        prop_assert_eq!(report.is_passed(), expected == 0);
    }
}
