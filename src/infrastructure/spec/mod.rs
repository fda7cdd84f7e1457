//! Spec loader implementations

mod yaml_loader;

pub use yaml_loader::YamlSpecLoader;
