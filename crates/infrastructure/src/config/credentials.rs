//! Provider credentials.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// API credentials for the external providers
///
/// Values are never serialized and are redacted from `Debug` output.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Mapbox access token (required)
    #[serde(default, skip_serializing)]
    pub mapbox_token: Option<SecretString>,

    /// MBTA v3 API key (required)
    #[serde(default, skip_serializing)]
    pub mbta_api_key: Option<SecretString>,

    /// Ticketmaster Discovery API key (required)
    #[serde(default, skip_serializing)]
    pub ticketmaster_api_key: Option<SecretString>,

    /// OpenWeatherMap API key (optional, weather is disabled without it)
    #[serde(default, skip_serializing)]
    pub openweather_api_key: Option<SecretString>,
}

/// Legacy environment variable names, paired with their config keys
pub(crate) const LEGACY_ENV_VARS: [(&str, &str); 4] = [
    ("MAPBOX_TOKEN", "credentials.mapbox_token"),
    ("MBTA_API_KEY", "credentials.mbta_api_key"),
    ("TICKETMASTER_API_KEY", "credentials.ticketmaster_api_key"),
    ("OPENWEATHER_API_KEY", "credentials.openweather_api_key"),
];

/// Expose a secret only when it holds a non-blank value
pub(crate) fn present(secret: Option<&SecretString>) -> Option<String> {
    secret
        .map(|s| s.expose_secret().trim().to_string())
        .filter(|s| !s.is_empty())
}

impl CredentialsConfig {
    /// Whether each credential is set, by config key
    #[must_use]
    pub fn presence(&self) -> [(&'static str, bool); 4] {
        [
            ("mapbox_token", present(self.mapbox_token.as_ref()).is_some()),
            ("mbta_api_key", present(self.mbta_api_key.as_ref()).is_some()),
            (
                "ticketmaster_api_key",
                present(self.ticketmaster_api_key.as_ref()).is_some(),
            ),
            (
                "openweather_api_key",
                present(self.openweather_api_key.as_ref()).is_some(),
            ),
        ]
    }
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |s: &Option<SecretString>| s.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CredentialsConfig")
            .field("mapbox_token", &redact(&self.mapbox_token))
            .field("mbta_api_key", &redact(&self.mbta_api_key))
            .field("ticketmaster_api_key", &redact(&self.ticketmaster_api_key))
            .field("openweather_api_key", &redact(&self.openweather_api_key))
            .finish()
    }
}
