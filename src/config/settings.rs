use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{PassExportError, Result};

/// Exporter configuration, loaded from `~/.pass2keepass.toml`.
///
/// Every field has a default so the exporter works without any config
/// file at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root of the password store (default: `<home>/.password-store`).
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Executable used to decrypt secrets (default: `/usr/bin/pass`).
    #[serde(default = "default_pass_program")]
    pub pass_program: String,

    /// File extension that marks a secret file, without the dot.
    #[serde(default = "default_secret_extension")]
    pub secret_extension: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_pass_program() -> String {
    "/usr/bin/pass".to_string()
}

fn default_secret_extension() -> String {
    "gpg".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: None,
            pass_program: default_pass_program(),
            secret_extension: default_secret_extension(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the home directory.
    const FILE_NAME: &'static str = ".pass2keepass.toml";

    /// Directory name of the password store below the home directory.
    const STORE_DIR_NAME: &'static str = ".password-store";

    /// Load settings from `<home>/.pass2keepass.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassExportError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!("loaded settings from {}", config_path.display());
        Ok(settings)
    }

    /// Resolve the password store root.
    ///
    /// Example: `/home/user/.password-store`
    pub fn store_root(&self, home: &Path) -> PathBuf {
        match &self.store_dir {
            Some(dir) => dir.clone(),
            None => home.join(Self::STORE_DIR_NAME),
        }
    }
}

/// Read the invoking user's home directory from `HOME`.
pub fn home_dir() -> Result<PathBuf> {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(PassExportError::HomeNotSet),
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert!(s.store_dir.is_none());
        assert_eq!(s.pass_program, "/usr/bin/pass");
        assert_eq!(s.secret_extension, "gpg");
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.pass_program, "/usr/bin/pass");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
store_dir = "/srv/secrets"
pass_program = "/opt/pass/bin/pass"
secret_extension = "age"
"#;
        fs::write(tmp.path().join(".pass2keepass.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.store_dir, Some(PathBuf::from("/srv/secrets")));
        assert_eq!(settings.pass_program, "/opt/pass/bin/pass");
        assert_eq!(settings.secret_extension, "age");
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".pass2keepass.toml"),
            "pass_program = \"gopass\"\n",
        )
        .unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.pass_program, "gopass");
        assert!(settings.store_dir.is_none());
        assert_eq!(settings.secret_extension, "gpg");
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".pass2keepass.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(PassExportError::ConfigError(_))));
    }

    #[test]
    fn store_root_defaults_under_home() {
        let s = Settings::default();
        let root = s.store_root(Path::new("/home/user"));
        assert_eq!(root, PathBuf::from("/home/user/.password-store"));
    }

    #[test]
    fn store_root_respects_override() {
        let s = Settings {
            store_dir: Some(PathBuf::from("/mnt/store")),
            ..Settings::default()
        };
        assert_eq!(s.store_root(Path::new("/home/user")), PathBuf::from("/mnt/store"));
    }
}
