//! Configuration validation logic.

use crate::config::loader::AuthConfig;
use crate::error::{Error, Result};

/// Minimum length for the OAuth client ID.
const MIN_CLIENT_ID_LENGTH: usize = 10;

/// Minimum length for the user agent.
const MIN_USER_AGENT_LENGTH: usize = 10;

/// Validate the credential configuration.
///
/// Catches empty and placeholder values before any network activity so a
/// bad config file fails fast with a field-specific message.
pub fn validate_auth(auth: &AuthConfig) -> Result<()> {
    validate_field("client_id", &auth.client_id, MIN_CLIENT_ID_LENGTH)?;
    validate_field("client_secret", &auth.client_secret, 1)?;
    validate_field("username", &auth.username, 1)?;
    validate_field("password", &auth.password, 1)?;
    validate_field("user_agent", &auth.user_agent, MIN_USER_AGENT_LENGTH)?;

    Ok(())
}

fn validate_field(field: &str, value: &str, min_length: usize) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    if value.len() < min_length {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Value must be at least {} characters (got {})",
                min_length,
                value.len()
            ),
        });
    }

    // Check for placeholder values
    let lower = value.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_") {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Value appears to be a placeholder. Fill in your actual Reddit credentials."
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_auth() -> AuthConfig {
        AuthConfig {
            client_id: "abc123def456".to_string(),
            client_secret: "s3cr3t-s3cr3t".to_string(),
            username: "someone".to_string(),
            password: "hunter2".to_string(),
            user_agent: "linux:reddit-saved-downloader:v0.1.0 (by /u/someone)".to_string(),
        }
    }

    #[test]
    fn test_valid_auth() {
        assert!(validate_auth(&valid_auth()).is_ok());
    }

    #[test]
    fn test_empty_username() {
        let mut auth = valid_auth();
        auth.username = String::new();
        assert!(matches!(
            validate_auth(&auth),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_placeholder_client_id() {
        let mut auth = valid_auth();
        auth.client_id = "YOUR_CLIENT_ID".to_string();
        assert!(matches!(
            validate_auth(&auth),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_short_user_agent() {
        let mut auth = valid_auth();
        auth.user_agent = "ua".to_string();
        assert!(matches!(
            validate_auth(&auth),
            Err(Error::ConfigValidation { .. })
        ));
    }
}
