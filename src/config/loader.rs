//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reddit account credentials, loaded from a JSON file.
///
/// The file is read once at startup and its contents are never logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth application client ID.
    pub client_id: String,

    /// OAuth application client secret.
    pub client_secret: String,

    /// Reddit account username.
    pub username: String,

    /// Reddit account password.
    pub password: String,

    /// User agent string identifying this client to Reddit.
    pub user_agent: String,
}

impl AuthConfig {
    /// Load credentials from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Authentication file not found: {}. Create one from authentication.example.json",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: AuthConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Malformed authentication file: {}", e)))?;
        Ok(config)
    }
}

/// The set of allowed media file extensions.
///
/// Loaded once at startup and shared read-only across all resolution
/// decisions. Membership is exact and case-sensitive on the stored token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiletypeSet {
    /// Allowed extensions including the leading dot, in configured order.
    pub allowed_filetypes: Vec<String>,
}

impl FiletypeSet {
    /// Load the filetype set from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Filetype file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let set: FiletypeSet = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Malformed filetype file: {}", e)))?;

        if set.allowed_filetypes.is_empty() {
            return Err(Error::ConfigValidation {
                field: "allowed_filetypes".to_string(),
                message: "At least one extension is required".to_string(),
            });
        }

        Ok(set)
    }

    /// Check whether an extension token is a member of the set.
    pub fn contains(&self, extension: &str) -> bool {
        self.allowed_filetypes.iter().any(|e| e == extension)
    }
}

impl Default for FiletypeSet {
    fn default() -> Self {
        Self {
            allowed_filetypes: vec![".jpg".to_string(), ".png".to_string(), ".gif".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_filetypes() {
        let set = FiletypeSet::default();
        assert!(set.contains(".jpg"));
        assert!(set.contains(".png"));
        assert!(set.contains(".gif"));
        assert!(!set.contains(".mp4"));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let set = FiletypeSet::default();
        assert!(!set.contains(".JPG"));
    }

    #[test]
    fn test_load_filetypes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"allowed_filetypes": [".jpg", ".webm"]}}"#).unwrap();

        let set = FiletypeSet::load(file.path()).unwrap();
        assert!(set.contains(".webm"));
        assert!(!set.contains(".png"));
    }

    #[test]
    fn test_load_filetypes_empty_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"allowed_filetypes": []}}"#).unwrap();

        assert!(FiletypeSet::load(file.path()).is_err());
    }

    #[test]
    fn test_load_auth_missing_file() {
        let err = AuthConfig::load(Path::new("/nonexistent/auth.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_auth() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "client_id": "abc123def456",
                "client_secret": "secret-secret-secret",
                "username": "someone",
                "password": "hunter2hunter2",
                "user_agent": "linux:reddit-saved-downloader:v0.1.0 (by /u/someone)"
            }}"#
        )
        .unwrap();

        let auth = AuthConfig::load(file.path()).unwrap();
        assert_eq!(auth.username, "someone");
    }
}
