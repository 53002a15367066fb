//! # Configuration
//!
//! Propmeta configuration is managed by [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! Nothing here changes what extraction returns. The settings only decide
//! which diagnostics the extractor emits through `tracing`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `warn_on_duplicate_kinds` | `PROPMETA_WARN_ON_DUPLICATE_KINDS` | `false` | Log repeated annotation kinds at `warn` instead of `trace` |
//! | `log_foreign_annotations` | `PROPMETA_LOG_FOREIGN_ANNOTATIONS` | `true` | Emit a `trace` event for each ignored foreign annotation |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for propmeta, optionally stored in `propmeta.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropmetaConfig {
    /// Log an annotation kind attached twice to one property at `warn` level.
    #[config(default = false, env = "PROPMETA_WARN_ON_DUPLICATE_KINDS")]
    pub warn_on_duplicate_kinds: bool,

    /// Trace foreign annotations skipped during extraction.
    #[config(default = true, env = "PROPMETA_LOG_FOREIGN_ANNOTATIONS")]
    pub log_foreign_annotations: bool,
}

impl Default for PropmetaConfig {
    fn default() -> Self {
        Self {
            warn_on_duplicate_kinds: false,
            log_foreign_annotations: true,
        }
    }
}

impl PropmetaConfig {
    /// Load configuration: env, then `file` (if given and present), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Every test that calls `load` reads the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_config() {
        let config = PropmetaConfig::default();
        assert!(!config.warn_on_duplicate_kinds);
        assert!(config.log_foreign_annotations);
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("propmeta.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "warn_on_duplicate_kinds = true").unwrap();
        writeln!(file, "log_foreign_annotations = false").unwrap();

        let config = PropmetaConfig::load(Some(&path)).unwrap();
        assert!(config.warn_on_duplicate_kinds);
        assert!(!config.log_foreign_annotations);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = PropmetaConfig::load(Some(&path)).unwrap();
        assert_eq!(config, PropmetaConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("propmeta.toml");
        std::fs::write(&path, "warn_on_duplicate_kinds = true\n").unwrap();

        let config = PropmetaConfig::load(Some(&path)).unwrap();
        assert!(config.warn_on_duplicate_kinds);
        assert!(config.log_foreign_annotations);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("propmeta.toml");
        std::fs::write(&path, "warn_on_duplicate_kinds = \"sometimes\"\n").unwrap();

        assert!(PropmetaConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = env_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("propmeta.toml");
        std::fs::write(
            &path,
            "warn_on_duplicate_kinds = false\nlog_foreign_annotations = true\n",
        )
        .unwrap();

        std::env::set_var("PROPMETA_WARN_ON_DUPLICATE_KINDS", "true");
        std::env::set_var("PROPMETA_LOG_FOREIGN_ANNOTATIONS", "false");
        let loaded = PropmetaConfig::load(Some(&path));
        std::env::remove_var("PROPMETA_WARN_ON_DUPLICATE_KINDS");
        std::env::remove_var("PROPMETA_LOG_FOREIGN_ANNOTATIONS");

        let config = loaded.unwrap();
        assert!(config.warn_on_duplicate_kinds);
        assert!(!config.log_foreign_annotations);
    }
}
