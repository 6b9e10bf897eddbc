use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct SessionConfig {
    /// Shared secret the bearer credentials are signed with.
    pub secret: String,
    /// Credential validity window, 1 hour unless configured otherwise.
    #[serde(default = "default_validity_seconds")]
    pub validity_seconds: u64,
}

#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_address")]
    pub address: String,
    pub session: SessionConfig,
}

fn default_validity_seconds() -> u64 {
    3600
}

fn default_address() -> String {
    "0.0.0.0:3000".to_owned()
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file("santa.toml"))
        .merge(Env::prefixed("SANTA_"))
        .extract()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_address_and_validity() {
        let config: Config = Figment::new()
            .merge(Toml::string("[session]\nsecret = \"hunter2\""))
            .extract()
            .unwrap();
        assert_eq!(config.address, "0.0.0.0:3000");
        assert_eq!(config.session.secret, "hunter2");
        assert_eq!(config.session.validity_seconds, 3600);
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let config: Config = Figment::new()
            .merge(Toml::string(
                "address = \"127.0.0.1:8080\"\n[session]\nsecret = \"s\"\nvalidity_seconds = 60",
            ))
            .extract()
            .unwrap();
        assert_eq!(config.address, "127.0.0.1:8080");
        assert_eq!(config.session.validity_seconds, 60);
    }
}
