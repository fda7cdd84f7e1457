//! Scenario: Responsive login page
//!
//! Journey: A test suite checks one login page for every device class.
//!
//! Steps:
//! 1. Load the page snapshot
//! 2. Register a named test session
//! 3. Check the desktop sections, then the mobile sections
//! 4. Inspect the session report and the streamed events
//!
//! Success Criteria:
//! - Each check appends one node to the session report
//! - Errors of nested sections reach the report exactly once

use std::cell::RefCell;

use layoutcheck::application::{CheckLayoutRequest, SessionScope};
use layoutcheck::domain::entities::ReportStatus;
use layoutcheck::domain::ports::{ListenerError, ValidationEvent, ValidationListener};
use layoutcheck::infrastructure::StaticPageBrowser;
use layoutcheck::presentation::create_check_layout_use_case;

use crate::common::*;

#[derive(Default)]
struct Recorder(RefCell<Vec<String>>);

impl ValidationListener for Recorder {
    fn on_event(&self, event: &ValidationEvent<'_>) -> Result<(), ListenerError> {
        if let ValidationEvent::ErrorFound(error) = event {
            self.0.borrow_mut().push(error.to_string());
        }
        Ok(())
    }
}

fn open_page(env: &TestEnv) -> StaticPageBrowser {
    let page = env.write_project_file("login.json", LOGIN_PAGE);
    StaticPageBrowser::open(&page).unwrap()
}

/// SCENARIO: One session, two device checks
#[test]
fn scenario_desktop_then_mobile_in_one_session() {
    let env = TestEnv::new();
    let browser = open_page(&env);
    let spec = env.write_project_file("login.yaml", LOGIN_SPEC);

    let mut scope = SessionScope::new();
    scope.register_test("login is responsive");
    let use_case = create_check_layout_use_case();
    let recorder = Recorder::default();

    let desktop = CheckLayoutRequest::new([spec.clone()]).with_included_tags(["desktop"]);
    let report = use_case
        .check_layout(&browser, &desktop, &recorder, scope.current())
        .unwrap();
    assert!(report.is_passed());

    let mobile = CheckLayoutRequest::new([spec.clone()]).with_included_tags(["mobile"]);
    let report = use_case
        .check_layout(&browser, &mobile, &recorder, scope.current())
        .unwrap();
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.errors()[0].object(), "burger");

    let session = scope.report().unwrap();
    assert_eq!(session.nodes().len(), 2);
    assert_eq!(session.nodes()[0].status(), ReportStatus::Passed);
    assert_eq!(session.nodes()[1].status(), ReportStatus::Failed);
    assert_eq!(
        session.nodes()[1].title(),
        format!("Check layout: {} included tags: mobile", spec.display())
    );
    assert_eq!(session.status(), ReportStatus::Failed);

    assert_eq!(
        recorder.0.into_inner(),
        vec!["Mobile menu: burger is not visible on page".to_string()]
    );
}

/// SCENARIO: Nested section failures are reported once
#[test]
fn scenario_nested_section_error_is_reported_once() {
    let env = TestEnv::new();
    let browser = open_page(&env);
    let spec = env.write_project_file(
        "nested.yaml",
        r##"
objects:
  form: "#login-form"
  submit: "#submit"
sections:
  - name: Form
    rules:
      - object: form
        check: visible
    sections:
      - name: Actions
        rules:
          - object: submit
            check:
              width: { min: 300 }
      - name: Work in progress
        tags: [wip]
        rules:
          - object: submit
            check: absent
"##,
    );

    let use_case = create_check_layout_use_case();
    let request = CheckLayoutRequest::new([spec]).with_excluded_tags(["wip"]);
    let report = use_case.execute(&browser, &request).unwrap();

    assert_eq!(report.error_count(), 1);
    let error = &report.errors()[0];
    assert_eq!(error.section(), "Form > Actions");
    assert_eq!(
        error.message(),
        "submit width is 200px but it should be >= 300px"
    );
}

/// SCENARIO: A broken spec stops the check before later specs run
#[test]
fn scenario_missing_spec_aborts_without_report() {
    let env = TestEnv::new();
    let browser = open_page(&env);
    let good = env.write_project_file("login.yaml", LOGIN_SPEC);
    let missing = env.project_path("missing.yaml");

    let mut scope = SessionScope::new();
    scope.register_test("broken");
    let use_case = create_check_layout_use_case();
    let recorder = Recorder::default();

    let request = CheckLayoutRequest::new([missing, good]);
    let result = use_case.check_layout(&browser, &request, &recorder, scope.current());

    assert!(result.is_err());
    assert!(scope.report().unwrap().nodes().is_empty());
}
