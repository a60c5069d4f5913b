use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CommitHelperError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
   /// Author name used when git config has no `user.name` (overridden by
   /// `COMMIT_HELPER_AUTHOR_NAME`)
   pub fallback_author_name: String,

   /// Author email used when git config has no `user.email` (overridden by
   /// `COMMIT_HELPER_AUTHOR_EMAIL`)
   pub fallback_author_email: String,

   pub type_char_limit:    usize,
   pub scope_char_limit:   usize,
   pub subject_char_limit: usize,

   /// Body length cap; unbounded when unset
   pub body_char_limit: Option<usize>,

   /// GPG sign commits by default (can be overridden by --sign CLI flag)
   pub gpg_sign: bool,

   /// Cursor blink period in milliseconds
   pub blink_interval_ms: u64,
}

impl Default for HelperConfig {
   fn default() -> Self {
      Self {
         fallback_author_name:  "Unknown Author".to_string(),
         fallback_author_email: "author@example.com".to_string(),
         type_char_limit:       20,
         scope_char_limit:      50,
         subject_char_limit:    100,
         body_char_limit:       None,
         gpg_sign:              false,
         blink_interval_ms:     530,
      }
   }
}

impl HelperConfig {
   /// Load config from default location (~/.config/commit-helper/config.toml)
   /// Falls back to Default if file doesn't exist. `COMMIT_HELPER_CONFIG`
   /// points at an alternative file.
   pub fn load() -> Result<Self> {
      let config_path = if let Ok(custom_path) = std::env::var("COMMIT_HELPER_CONFIG") {
         PathBuf::from(custom_path)
      } else {
         Self::default_config_path().unwrap_or_default()
      };

      let mut config = if config_path.is_file() {
         Self::parse_file(&config_path)?
      } else {
         Self::default()
      };

      config.apply_env_overrides(|key| std::env::var(key).ok());
      Ok(config)
   }

   /// Load config from specific file
   pub fn from_file(path: &Path) -> Result<Self> {
      let mut config = Self::parse_file(path)?;
      config.apply_env_overrides(|key| std::env::var(key).ok());
      Ok(config)
   }

   fn parse_file(path: &Path) -> Result<Self> {
      let contents = std::fs::read_to_string(path).map_err(|e| {
         CommitHelperError::ConfigError(format!("Failed to read {}: {e}", path.display()))
      })?;
      toml::from_str(&contents).map_err(|e| {
         CommitHelperError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
      })
   }

   /// Apply environment variable overrides, read through `lookup`
   fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
      if let Some(name) = lookup("COMMIT_HELPER_AUTHOR_NAME").filter(|v| !v.trim().is_empty()) {
         self.fallback_author_name = name;
      }
      if let Some(email) = lookup("COMMIT_HELPER_AUTHOR_EMAIL").filter(|v| !v.trim().is_empty()) {
         self.fallback_author_email = email;
      }
   }

   /// Get default config path (platform-safe)
   /// Tries HOME (Unix/Linux/macOS) then USERPROFILE (Windows)
   pub fn default_config_path() -> Result<PathBuf> {
      std::env::var("HOME")
         .or_else(|_| std::env::var("USERPROFILE"))
         .map(|home| PathBuf::from(home).join(".config/commit-helper/config.toml"))
         .map_err(|_| {
            CommitHelperError::ConfigError(
               "No home directory found (tried HOME and USERPROFILE)".to_string(),
            )
         })
   }
}

#[cfg(test)]
mod tests {
   use std::fs;

   use tempfile::TempDir;

   use super::*;

   #[test]
   fn test_defaults() {
      let config = HelperConfig::default();
      assert_eq!(config.fallback_author_name, "Unknown Author");
      assert_eq!(config.fallback_author_email, "author@example.com");
      assert_eq!(config.type_char_limit, 20);
      assert_eq!(config.scope_char_limit, 50);
      assert_eq!(config.subject_char_limit, 100);
      assert_eq!(config.body_char_limit, None);
      assert!(!config.gpg_sign);
   }

   #[test]
   fn test_partial_file_keeps_defaults() {
      let dir = TempDir::new().unwrap();
      let path = dir.path().join("config.toml");
      fs::write(&path, "subject_char_limit = 72\ngpg_sign = true\nbody_char_limit = 500\n").unwrap();

      let config = HelperConfig::parse_file(&path).unwrap();
      assert_eq!(config.subject_char_limit, 72);
      assert!(config.gpg_sign);
      assert_eq!(config.body_char_limit, Some(500));
      assert_eq!(config.type_char_limit, 20);
      assert_eq!(config.fallback_author_name, "Unknown Author");
   }

   #[test]
   fn test_invalid_file_is_config_error() {
      let dir = TempDir::new().unwrap();
      let path = dir.path().join("config.toml");
      fs::write(&path, "subject_char_limit = \"lots\"").unwrap();

      let err = HelperConfig::parse_file(&path).unwrap_err();
      assert!(matches!(err, CommitHelperError::ConfigError(_)));
   }

   #[test]
   fn test_missing_file_is_config_error() {
      let dir = TempDir::new().unwrap();
      let err = HelperConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
      assert!(err.to_string().contains("Failed to read"));
   }

   #[test]
   fn test_env_overrides() {
      let mut config = HelperConfig::default();
      config.apply_env_overrides(|key| match key {
         "COMMIT_HELPER_AUTHOR_NAME" => Some("Ada Lovelace".to_string()),
         "COMMIT_HELPER_AUTHOR_EMAIL" => Some("  ".to_string()),
         _ => None,
      });
      assert_eq!(config.fallback_author_name, "Ada Lovelace");
      assert_eq!(config.fallback_author_email, "author@example.com");
   }
}
