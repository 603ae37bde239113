use std::path::{Path, PathBuf};

/// Environment variable pointing at an annotation set JSON file.
pub const ANNOTATIONS_ENV_VAR: &str = "REELNOTES_ANNOTATIONS";

pub fn get_root_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("reelnotes")
}

/// Get the default location of the annotation set file
pub fn get_default_annotations_path(data_dir: &Path) -> PathBuf {
    data_dir.join("annotations.json")
}

/// Get the directory segment export requests are written to
pub fn get_exports_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("exports")
}

/// Pick the annotation file to load: an explicit path wins, then the
/// environment variable, then the default file if it exists.
pub fn resolve_annotations_path(explicit: Option<&Path>, data_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(ANNOTATIONS_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }

    let default = get_default_annotations_path(data_dir);
    default.exists().then_some(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_path_wins() {
        let dir = tempdir().expect("failed to create temp dir");
        let explicit = dir.path().join("mine.json");

        assert_eq!(
            resolve_annotations_path(Some(&explicit), dir.path()),
            Some(explicit)
        );
    }

    // Only this test touches the environment variable, so the resolution
    // order is checked in one place.
    #[test]
    fn resolution_order_flag_env_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let explicit = dir.path().join("mine.json");
        let from_env = dir.path().join("from-env.json");
        let default = get_default_annotations_path(dir.path());

        // SAFETY: no other test in this crate touches this variable.
        unsafe { std::env::remove_var(ANNOTATIONS_ENV_VAR) };
        assert_eq!(resolve_annotations_path(None, dir.path()), None);

        std::fs::write(&default, "{}").expect("failed to write fixture");
        assert_eq!(
            resolve_annotations_path(None, dir.path()),
            Some(default.clone())
        );

        // SAFETY: see above.
        unsafe { std::env::set_var(ANNOTATIONS_ENV_VAR, &from_env) };
        assert_eq!(
            resolve_annotations_path(None, dir.path()),
            Some(from_env.clone())
        );
        assert_eq!(
            resolve_annotations_path(Some(&explicit), dir.path()),
            Some(explicit)
        );

        // SAFETY: see above.
        unsafe { std::env::set_var(ANNOTATIONS_ENV_VAR, "   ") };
        assert_eq!(resolve_annotations_path(None, dir.path()), Some(default));

        // SAFETY: see above.
        unsafe { std::env::remove_var(ANNOTATIONS_ENV_VAR) };
    }
}
