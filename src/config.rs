use std::path::{Path, PathBuf};

/// Application-level constants
pub const APP_NAME: &str = "Nurture Glow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A catalog record must score strictly above this to be returned.
pub const DEFAULT_MATCH_THRESHOLD: usize = 2;

/// Environment variable pointing at a catalog override file.
pub const CATALOG_ENV_VAR: &str = "NURTURE_GLOW_CATALOG";

/// File name of the catalog override inside the app data directory.
const CATALOG_FILE_NAME: &str = "myth_catalog.json";

/// Get the application data directory
/// ~/NurtureGlow/ on all platforms
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join("NurtureGlow")
}

/// Default location of a catalog override.
pub fn default_catalog_path() -> PathBuf {
    app_data_dir().join(CATALOG_FILE_NAME)
}

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "warn"
}

/// Catalog override to load at startup, if any.
///
/// Priority:
/// 1. Explicit path (command line)
/// 2. `NURTURE_GLOW_CATALOG` env var
/// 3. `~/NurtureGlow/myth_catalog.json` if it exists
/// 4. `None`: use the bundled catalog
pub fn catalog_override_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_catalog_path(
        explicit,
        std::env::var(CATALOG_ENV_VAR).ok().as_deref(),
        &default_catalog_path(),
    )
}

fn resolve_catalog_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    default_path: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    default_path.is_file().then(|| default_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_name() {
        assert!(app_data_dir().ends_with("NurtureGlow"));
    }

    #[test]
    fn default_catalog_under_app_data() {
        let path = default_catalog_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("myth_catalog.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn explicit_path_wins() {
        let resolved = resolve_catalog_path(
            Some(Path::new("/tmp/explicit.json")),
            Some("/tmp/env.json"),
            Path::new("/nonexistent/default.json"),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/explicit.json")));
    }

    #[test]
    fn env_value_used_when_no_explicit_path() {
        let resolved = resolve_catalog_path(
            None,
            Some("/tmp/env.json"),
            Path::new("/nonexistent/default.json"),
        );
        assert_eq!(resolved, Some(PathBuf::from("/tmp/env.json")));
    }

    #[test]
    fn blank_env_value_ignored() {
        let resolved =
            resolve_catalog_path(None, Some("  "), Path::new("/nonexistent/default.json"));
        assert_eq!(resolved, None);
    }

    #[test]
    fn default_file_used_only_if_present() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join(CATALOG_FILE_NAME);
        assert_eq!(resolve_catalog_path(None, None, &default_path), None);

        std::fs::write(&default_path, "{}").unwrap();
        assert_eq!(
            resolve_catalog_path(None, None, &default_path),
            Some(default_path.clone())
        );
    }
}
