//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LayoutCheckError, LayoutCheckResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "layoutcheck.toml";

/// User config path relative to the platform config directory
pub const USER_CONFIG_FILE: &str = "layoutcheck/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LayoutCheckResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LayoutCheckError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn discover(project_root: &Path) -> LayoutCheckResult<(Config, Vec<ConfigWarning>)> {
    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE)),
    ];

    for path in candidates.into_iter().flatten() {
        if path.exists() {
            debug!(config = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (LAYOUTCHECK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |name| std::env::var(name).ok())
}

pub(super) fn apply_env<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // LAYOUTCHECK_INCLUDE (comma-separated)
    if let Some(tags) = var("LAYOUTCHECK_INCLUDE") {
        config.check.include = split_tags(&tags);
    }

    // LAYOUTCHECK_EXCLUDE (comma-separated)
    if let Some(tags) = var("LAYOUTCHECK_EXCLUDE") {
        config.check.exclude = split_tags(&tags);
    }

    // LAYOUTCHECK_REPORT_DIR
    if let Some(dir) = var("LAYOUTCHECK_REPORT_DIR") {
        config.report.dir = (!dir.trim().is_empty()).then(|| PathBuf::from(dir));
    }

    config
}

/// Split a comma-separated tag list, dropping blanks
fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "check",
        "include",
        "exclude",
        "specs",
        "properties",
        "report",
        "dir",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
