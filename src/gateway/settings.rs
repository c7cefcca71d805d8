//! Endpoint configuration for the remote lookups.

use serde::Deserialize;

use super::GatewayError;

/// Default country directory endpoint.
pub const DEFAULT_DIRECTORY_URL: &str = "http://api.countrylayer.com/v2/all";

/// Default VAT rate endpoint; the country code is appended as a path segment.
pub const DEFAULT_RATES_URL: &str = "http://api.vatlookup.eu/rates";

/// Gateway settings.
///
/// Loaded from built-in defaults, then an optional `invoicer.toml` (or any
/// format `config` recognizes) in the working directory, then environment
/// variables such as `INVOICER__RATES_URL`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub directory_url: String,
    /// Access key sent as the `access_key` query parameter.
    #[serde(default)]
    pub directory_access_key: Option<String>,
    pub rates_url: String,
    /// Per-request timeout in seconds. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.to_string(),
            directory_access_key: None,
            rates_url: DEFAULT_RATES_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Load settings from `invoicer.*` and `INVOICER__*` environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Config` if a source is malformed.
    pub fn load() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok();
        Self::load_from(
            config::File::with_name("invoicer").required(false),
            config::Environment::with_prefix("INVOICER").separator("__"),
        )
    }

    fn load_from<F, E>(file: F, env: E) -> Result<Self, GatewayError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let cfg = config::Config::builder()
            .set_default("directory_url", DEFAULT_DIRECTORY_URL)?
            .set_default("rates_url", DEFAULT_RATES_URL)?
            .add_source(file)
            .add_source(env)
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

impl From<config::ConfigError> for GatewayError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn no_env() -> config::Environment {
        config::Environment::with_prefix("INVOICER_TEST_UNSET").separator("__")
    }

    #[test]
    fn defaults_without_sources() {
        let settings =
            Settings::load_from(config::File::from_str("", FileFormat::Toml), no_env()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout_secs, None);
    }

    #[test]
    fn file_overrides_defaults() {
        let toml = r#"
            rates_url = "http://localhost:9000/rates"
            directory_access_key = "secret"
            timeout_secs = 5
        "#;
        let settings =
            Settings::load_from(config::File::from_str(toml, FileFormat::Toml), no_env()).unwrap();
        assert_eq!(settings.rates_url, "http://localhost:9000/rates");
        assert_eq!(settings.directory_access_key.as_deref(), Some("secret"));
        assert_eq!(settings.timeout_secs, Some(5));
        assert_eq!(settings.directory_url, DEFAULT_DIRECTORY_URL);
    }

    #[test]
    fn malformed_value_is_config_error() {
        let toml = r#"timeout_secs = "soon""#;
        let err = Settings::load_from(config::File::from_str(toml, FileFormat::Toml), no_env())
            .unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }
}
