use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        if host.trim().is_empty() {
            anyhow::bail!("APP_HOST must not be empty");
        }
        Ok(Self {
            host,
            port,
            catalog_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn reads_host_port_and_catalog() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "8080"),
            ("CATALOG_PATH", "/etc/shop/products.json"),
        ]))
        .expect("config");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/shop/products.json"))
        );
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("APP_PORT", "not-a-port")])).expect("config");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn blank_host_is_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("APP_HOST", "  ")])).is_err());
    }
}
