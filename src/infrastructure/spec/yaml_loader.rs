//! YAML Spec Loader
//!
//! Implements the SpecLoader port for `.yaml` layout specs:
//!
//! ```yaml
//! objects:
//!   header: "#header"
//!   menu: "#menu-${device}"
//! sections:
//!   - name: Header
//!     tags: [desktop]
//!     rules:
//!       - object: header
//!         check: visible
//!       - object: menu
//!         check:
//!           below: { other: header, gap: { min: 0, max: 10 } }
//! ```
//!
//! `${name}` placeholders in locators, section names and tags are expanded
//! from the request properties. Every object a rule mentions must be declared
//! under `objects:` unless it is the built-in `screen`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{LayoutRule, Section, Specification};
use crate::domain::ports::{LoadError, Page, SpecLoader};
use crate::domain::value_objects::{Constraint, Properties};

/// YAML-backed spec loader
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSpecLoader;

impl YamlSpecLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse spec text; `path` is only used for error reporting
    pub fn parse(
        &self,
        path: &Path,
        content: &str,
        properties: &Properties,
    ) -> Result<Specification, LoadError> {
        let doc: YamlSpec = if content.trim().is_empty() {
            YamlSpec::default()
        } else {
            serde_yaml_ng::from_str(content).map_err(|e| LoadError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let expander = Expander { path, properties };

        let mut spec = Specification::new(path);
        for (name, locator) in doc.objects {
            spec = spec.with_object(name, expander.expand(&locator)?);
        }

        let mut sections = Vec::with_capacity(doc.sections.len());
        for section in doc.sections {
            sections.push(expander.section(section)?);
        }
        for section in &sections {
            check_objects(&spec, section)?;
        }
        for section in sections {
            spec = spec.with_section(section);
        }

        Ok(spec)
    }
}

impl SpecLoader for YamlSpecLoader {
    fn read(
        &self,
        path: &Path,
        properties: &Properties,
        _page: &dyn Page,
    ) -> Result<Specification, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.parse(path, &content, properties)
    }
}

/// YAML representation of a spec file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct YamlSpec {
    #[serde(default)]
    objects: BTreeMap<String, String>,
    #[serde(default)]
    sections: Vec<YamlSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct YamlSection {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    rules: Vec<YamlRule>,
    #[serde(default)]
    sections: Vec<YamlSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct YamlRule {
    object: String,
    #[serde(with = "serde_yaml_ng::with::singleton_map")]
    check: Constraint,
}

struct Expander<'a> {
    path: &'a Path,
    properties: &'a Properties,
}

impl Expander<'_> {
    fn expand(&self, input: &str) -> Result<String, LoadError> {
        self.properties
            .expand(input)
            .map_err(|name| LoadError::UnknownVariable {
                path: self.path.to_path_buf(),
                name,
            })
    }

    fn section(&self, raw: YamlSection) -> Result<Section, LoadError> {
        let mut tags = Vec::with_capacity(raw.tags.len());
        for tag in &raw.tags {
            tags.push(self.expand(tag)?);
        }

        let mut section = Section::new(self.expand(&raw.name)?).with_tags(tags);
        for rule in raw.rules {
            section = section.with_rule(LayoutRule::new(rule.object, rule.check));
        }
        for child in raw.sections {
            section = section.with_section(self.section(child)?);
        }
        Ok(section)
    }
}

/// Every object a rule names must be known to the spec
fn check_objects(spec: &Specification, section: &Section) -> Result<(), LoadError> {
    for rule in &section.rules {
        let referenced = std::iter::once(rule.object.as_str())
            .chain(rule.constraint.referenced_objects());
        for object in referenced {
            if !spec.knows_object(object) {
                return Err(LoadError::UnknownObject {
                    path: spec.path().to_path_buf(),
                    section: section.name.clone(),
                    object: object.to_string(),
                });
            }
        }
    }
    for child in &section.sections {
        check_objects(spec, child)?;
    }
    Ok(())
}
