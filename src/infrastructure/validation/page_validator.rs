//! Page Section Validator
//!
//! Default `SectionValidator`. Walks the active sections depth-first,
//! evaluates every rule against element boxes from the page and reports
//! progress through the context listener.
//!
//! Errors of the top-level sections are returned. Errors found in nested
//! sections only travel through `ErrorFound` events.

use tracing::{trace, warn};

use crate::domain::entities::{ErrorId, Section, ValidationError, SCREEN_OBJECT};
use crate::domain::ports::{
    PageElement, SectionValidator, ValidationContext, ValidationEvent, ValidationListener,
};

use super::rules::evaluate;

const PATH_SEPARATOR: &str = " > ";

#[derive(Debug, Default, Clone, Copy)]
pub struct PageSectionValidator;

impl PageSectionValidator {
    pub fn new() -> Self {
        Self
    }

    fn check_section(
        &self,
        context: &ValidationContext<'_>,
        section: &Section,
        path: &str,
        position: &str,
    ) -> Vec<ValidationError> {
        if section.is_empty() {
            trace!(section = path, "skipping section without rules");
            return Vec::new();
        }

        let spec_path = context.spec.path();
        emit(
            context.listener,
            ValidationEvent::SectionStarted {
                spec: spec_path,
                section: path,
            },
        );

        let resolve = |object: &str| self.resolve(context, object);
        let mut errors = Vec::new();
        for (index, rule) in section.rules.iter().enumerate() {
            match evaluate(&rule.object, &rule.constraint, resolve) {
                Ok(()) => emit(
                    context.listener,
                    ValidationEvent::RulePassed {
                        spec: spec_path,
                        section: path,
                        rule,
                    },
                ),
                Err(failure) => {
                    let id = ErrorId::new(spec_path, path, index, rule.object.as_str())
                        .with_pass(context.pass)
                        .with_position(position);
                    let error = ValidationError::new(id, rule.to_string(), failure.message)
                        .with_areas(failure.areas);
                    emit(context.listener, ValidationEvent::ErrorFound(&error));
                    errors.push(error);
                }
            }
        }

        emit(
            context.listener,
            ValidationEvent::SectionFinished {
                spec: spec_path,
                section: path,
                errors: errors.len(),
            },
        );

        for (index, child) in section.sections.iter().enumerate() {
            if !context.filter.admits_child(child) {
                trace!(section = %child.name, parent = path, "child section excluded");
                continue;
            }
            let child_path = format!("{}{}{}", path, PATH_SEPARATOR, child.name);
            let child_position = format!("{}/{}", position, index);
            // Already reported through ErrorFound
            let _ = self.check_section(context, child, &child_path, &child_position);
        }

        errors
    }

    fn resolve(&self, context: &ValidationContext<'_>, object: &str) -> Option<PageElement> {
        if object == SCREEN_OBJECT {
            return Some(PageElement::visible(context.page.screen_area()));
        }
        let locator = context.spec.locator(object)?;
        context.page.find_element(locator)
    }
}

impl SectionValidator for PageSectionValidator {
    fn check(&self, context: &ValidationContext<'_>, sections: &[&Section]) -> Vec<ValidationError> {
        sections
            .iter()
            .enumerate()
            .flat_map(|(index, section)| {
                let position = context
                    .spec
                    .sections()
                    .iter()
                    .position(|declared| std::ptr::eq(declared, *section))
                    .unwrap_or(index);
                self.check_section(context, section, &section.name, &position.to_string())
            })
            .collect()
    }
}

/// The listener hub already isolates failures; a bare listener's are logged
fn emit(listener: &dyn ValidationListener, event: ValidationEvent<'_>) {
    if let Err(err) = listener.on_event(&event) {
        warn!(error = %err, "validation listener failed");
    }
}
