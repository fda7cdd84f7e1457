use std::path::{Path, PathBuf};

use layoutcheck::config::PROJECT_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Walks upward from `start`; the first directory holding a
/// `layoutcheck.toml` or a `.git` entry wins. Falls back to `start`.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).exists() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Resolve a config-relative path against the project root
pub(crate) fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        root.join(path)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("web/src")).unwrap();
        std::fs::write(root.join("web/layoutcheck.toml"), "").unwrap();

        assert_eq!(discover_project_root(&root.join("web/src")), root.join("web"));
    }

    #[test]
    fn discover_project_root_falls_back_to_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("sub/src")).unwrap();

        assert_eq!(discover_project_root(&root.join("sub/src")), root.to_path_buf());
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let root = Path::new("/project");
        assert_eq!(resolve(root, Path::new("specs/a.yaml")), root.join("specs/a.yaml"));
        assert_eq!(resolve(root, Path::new("/abs/a.yaml")), Path::new("/abs/a.yaml"));
    }
}
