use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_JWT_SECRET: &str = "un segreto meno bello";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
    pub mask_storage_faults: bool,
    pub run_migrations: bool,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione da una sorgente di variabili qualsiasi
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| "DATABASE_URL must be set in .env file".to_string())?;

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEFAULT_JWT_SECRET.to_string()
        });

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = parse_or(&lookup, "SERVER_PORT", 3000u16)
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = parse_or(&lookup, "MAX_DB_CONNECTIONS", 10u32)
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let connection_lifetime_secs = parse_or(&lookup, "DB_CONNECTION_LIFETIME_SECS", 1800u64)
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let mask_storage_faults = parse_or(&lookup, "MASK_STORAGE_FAULTS", true)
            .map_err(|_| "Invalid MASK_STORAGE_FAULTS: must be true or false".to_string())?;

        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)
            .map_err(|_| "Invalid RUN_MIGRATIONS: must be true or false".to_string())?;

        Ok(Config {
            database_url,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
            mask_storage_faults,
            run_migrations,
        })
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}:{}", self.server_host, self.server_port);
        info!("   Database: {}", Self::mask_url(&self.database_url));
        info!("   Max DB Connections: {}", self.max_connections);
        info!("   Connection Lifetime: {}s", self.connection_lifetime_secs);
        info!("   Mask Storage Faults: {}", self.mask_storage_faults);
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("   JWT Secret: USING DEFAULT (INSECURE!)");
        } else {
            info!("   JWT Secret: custom secret configured");
        }
    }

    /// Maschera le credenziali dell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let (Some(at_pos), Some(scheme_end)) = (url.rfind('@'), url.find("://")) {
            let scheme = &url[..scheme_end + 3];
            let after_at = &url[at_pos..];
            return format!("{}***{}", scheme, after_at);
        }
        "***".to_string()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, T::Err>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>(),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "mysql://root:pw@localhost/hotels")]).unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert!(config.mask_storage_faults);
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_missing_database_url() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = config_from(&[("DATABASE_URL", "mysql://x"), ("SERVER_PORT", "70000")]).unwrap_err();
        assert!(err.contains("SERVER_PORT"));

        let err = config_from(&[("DATABASE_URL", "mysql://x"), ("MASK_STORAGE_FAULTS", "forse")])
            .unwrap_err();
        assert!(err.contains("MASK_STORAGE_FAULTS"));
    }

    #[test]
    fn test_mask_url() {
        assert_eq!(
            Config::mask_url("mysql://root:secret@db:3306/hotels"),
            "mysql://***@db:3306/hotels"
        );
        assert_eq!(Config::mask_url("not-a-url"), "***");
    }
}
