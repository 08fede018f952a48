use eyre::Context;
use serde::Deserialize;
use url::Url;

use crate::locale::Locale;

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_preference_max_age_days() -> u32 {
    730
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Locale used when neither the preference cookie nor the browser's
    /// language matches a supported one.
    #[serde(default)]
    pub default_locale: Locale,

    /// Canonical address of the site, advertised in the page metadata.
    pub public_url: Option<Url>,

    #[serde(default = "default_preference_max_age_days")]
    pub preference_max_age_days: u32,
}

impl Config {
    pub fn try_from_env() -> eyre::Result<Self> {
        envy::from_env().context("failed to read config from environment variables")
    }

    pub fn preference_max_age(&self) -> time::Duration {
        time::Duration::days(self.preference_max_age_days.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = envy::from_iter::<_, Config>(vars(&[])).unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.default_locale, Locale::En);
        assert!(config.public_url.is_none());
        assert_eq!(config.preference_max_age(), time::Duration::days(730));
    }

    #[test]
    fn reads_overrides() {
        let config = envy::from_iter::<_, Config>(vars(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("DEFAULT_LOCALE", "es"),
            ("PUBLIC_URL", "https://decode9.dev"),
            ("PREFERENCE_MAX_AGE_DAYS", "1095"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.default_locale, Locale::Es);
        assert_eq!(config.public_url.unwrap().as_str(), "https://decode9.dev/");
        assert_eq!(config.preference_max_age_days, 1095);
    }

    #[test]
    fn rejects_unsupported_default_locale() {
        assert!(envy::from_iter::<_, Config>(vars(&[("DEFAULT_LOCALE", "fr")])).is_err());
    }
}
