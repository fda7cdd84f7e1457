//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::CheckLayoutUseCase;
use crate::infrastructure::{PageSectionValidator, YamlSpecLoader};

/// Type alias for the concrete CheckLayoutUseCase with all dependencies
pub type ConcreteCheckLayoutUseCase = CheckLayoutUseCase<YamlSpecLoader, PageSectionValidator>;

/// Create a check layout use case with YAML specs and the page validator
pub fn create_check_layout_use_case() -> ConcreteCheckLayoutUseCase {
    CheckLayoutUseCase::new(YamlSpecLoader::new(), PageSectionValidator::new())
}
