use std::{fmt, str::FromStr};

use axum::response::{IntoResponse, Response};
use fluent_templates::LanguageIdentifier;
use http::StatusCode;
use serde::{Deserialize, Deserializer};
use unic_langid::langid;

/// A language the site ships a translation table for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            Self::En => langid!("en"),
            Self::Es => langid!("es"),
        }
    }

    /// Matches the primary subtag of a platform language tag (`es-AR`,
    /// `en_US`, `ES`) against the supported set.
    pub fn from_primary_subtag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .chars()
            .take(2)
            .collect::<String>()
            .to_ascii_lowercase();
        primary.parse().ok()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            other => Err(LocaleError::InvalidLocale(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported locale `{0}`")]
    InvalidLocale(String),
    #[error("no translation table is packaged for locale `{0}`")]
    UnknownLocale(Locale),
    #[error("the active locale was read outside of a published locale context")]
    ContextMisuse,
}

impl IntoResponse for LocaleError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidLocale(_) => StatusCode::BAD_REQUEST,
            Self::UnknownLocale(_) | Self::ContextMisuse => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "locale context failure");
        }
        (status, self.to_string()).into_response()
    }
}
