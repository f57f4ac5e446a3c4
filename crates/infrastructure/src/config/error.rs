//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required provider credential is absent or blank
    #[error("Missing credential: {name} (set {env_var})")]
    MissingCredential {
        /// Config key of the credential
        name: &'static str,
        /// Environment variable that supplies it
        env_var: &'static str,
    },

    /// A section holds an unusable value
    #[error("Invalid [{section}] configuration: {message}")]
    Invalid {
        /// Config section name
        section: &'static str,
        /// What is wrong
        message: String,
    },
}

impl ConfigurationError {
    pub(crate) fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
        }
    }
}
