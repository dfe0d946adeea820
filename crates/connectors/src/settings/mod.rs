//! Connection settings for the listing store.
//!
//! Resolution order: `LIGHTBNB_DATABASE_URL` if set (URL or `key=value`
//! form), otherwise the libpq-style `PG*` variables with local defaults.

pub mod env;
pub mod error;

use crate::settings::{env::EnvVars, error::SettingsError};
use std::path::Path;
use tokio_postgres::{Config, config::SslMode};

pub const DATABASE_URL_VAR: &str = "LIGHTBNB_DATABASE_URL";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "lightbnb";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    config: Config,
}

impl StoreSettings {
    pub fn from_url(url: &str) -> Result<Self, SettingsError> {
        let config = url
            .parse::<Config>()
            .map_err(|e| SettingsError::InvalidUrl(e.to_string()))?;
        Ok(Self { config })
    }

    /// Settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(&EnvVars::from_process())
    }

    /// Settings from the process environment overlaid with an env file.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let mut vars = EnvVars::from_process();
        vars.load_from_file(path)?;
        Self::from_vars(&vars)
    }

    pub fn from_vars(vars: &EnvVars) -> Result<Self, SettingsError> {
        if let Some(url) = vars.get(DATABASE_URL_VAR) {
            return Self::from_url(url);
        }

        let mut config = Config::new();
        config
            .host(vars.get("PGHOST").unwrap_or(DEFAULT_HOST))
            .dbname(vars.get("PGDATABASE").unwrap_or(DEFAULT_DATABASE))
            .ssl_mode(parse_ssl_mode(vars.get("PGSSLMODE"))?);

        let port = match vars.get("PGPORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidPort(port.to_string()))?,
            None => DEFAULT_PORT,
        };
        config.port(port);

        if let Some(user) = vars.get("PGUSER") {
            config.user(user);
        }
        if let Some(password) = vars.get("PGPASSWORD") {
            config.password(password);
        }

        Ok(Self { config })
    }

    pub fn pg_config(&self) -> &Config {
        &self.config
    }
}

fn parse_ssl_mode(mode: Option<&str>) -> Result<SslMode, SettingsError> {
    match mode.map(str::to_lowercase).as_deref() {
        None | Some("prefer") => Ok(SslMode::Prefer),
        Some("disable") => Ok(SslMode::Disable),
        Some("require") => Ok(SslMode::Require),
        Some(other) => Err(SettingsError::InvalidSslMode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, io::Write};
    use tokio_postgres::config::Host;

    fn vars(pairs: &[(&str, &str)]) -> EnvVars {
        EnvVars::from_map(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_defaults_point_at_local_lightbnb() {
        let settings = StoreSettings::from_vars(&vars(&[])).unwrap();
        let config = settings.pg_config();

        assert_eq!(config.get_hosts(), &[Host::Tcp("localhost".to_string())]);
        assert_eq!(config.get_ports(), &[5432]);
        assert_eq!(config.get_dbname(), Some("lightbnb"));
        assert_eq!(config.get_ssl_mode(), SslMode::Prefer);
        assert_eq!(config.get_user(), None);
    }

    #[test]
    fn test_pg_variables_are_applied() {
        let settings = StoreSettings::from_vars(&vars(&[
            ("PGHOST", "db"),
            ("PGPORT", "6543"),
            ("PGUSER", "vagrant"),
            ("PGPASSWORD", "123"),
            ("PGDATABASE", "lightbnb_test"),
            ("PGSSLMODE", "disable"),
        ]))
        .unwrap();
        let config = settings.pg_config();

        assert_eq!(config.get_ports(), &[6543]);
        assert_eq!(config.get_user(), Some("vagrant"));
        assert_eq!(config.get_password(), Some(&b"123"[..]));
        assert_eq!(config.get_dbname(), Some("lightbnb_test"));
        assert_eq!(config.get_ssl_mode(), SslMode::Disable);
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let settings = StoreSettings::from_vars(&vars(&[
            (DATABASE_URL_VAR, "postgres://labber@remote:5000/bnb?sslmode=require"),
            ("PGHOST", "ignored"),
        ]))
        .unwrap();
        let config = settings.pg_config();

        assert_eq!(config.get_hosts(), &[Host::Tcp("remote".to_string())]);
        assert_eq!(config.get_dbname(), Some("bnb"));
        assert_eq!(config.get_ssl_mode(), SslMode::Require);
    }

    #[test]
    fn test_env_file_overrides_process_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# local overrides").unwrap();
        writeln!(
            file,
            "{DATABASE_URL_VAR}=\"postgres://guest@filehost:5433/from_file\""
        )
        .unwrap();

        let settings = StoreSettings::from_env_file(file.path()).unwrap();
        let config = settings.pg_config();

        assert_eq!(config.get_hosts(), &[Host::Tcp("filehost".to_string())]);
        assert_eq!(config.get_ports(), &[5433]);
        assert_eq!(config.get_dbname(), Some("from_file"));
    }

    #[test]
    fn test_missing_env_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            StoreSettings::from_env_file(dir.path().join("absent.env")),
            Err(SettingsError::EnvFileRead { .. })
        ));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            StoreSettings::from_vars(&vars(&[("PGPORT", "not-a-port")])),
            Err(SettingsError::InvalidPort(_))
        ));
        assert!(matches!(
            StoreSettings::from_vars(&vars(&[("PGSSLMODE", "verify-full")])),
            Err(SettingsError::InvalidSslMode(_))
        ));
        assert!(matches!(
            StoreSettings::from_url("postgres://host:notaport/db"),
            Err(SettingsError::InvalidUrl(_))
        ));
    }
}
