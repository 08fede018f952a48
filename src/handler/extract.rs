use std::{convert::Infallible, sync::Arc};

use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{headers, TypedHeader};
use http::header;

use crate::{
    locale::LocaleError,
    resolver::{LocaleSession, LocaleSignals},
};

use super::preference::PREFERENCE_COOKIE_KEY;

impl<S> FromRequestParts<S> for LocaleSignals
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let preference = parts
            .extract::<TypedHeader<headers::Cookie>>()
            .await
            .ok()
            .and_then(|TypedHeader(cookies)| {
                cookies.get(PREFERENCE_COOKIE_KEY).map(str::to_string)
            });
        let platform_language = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header| header.to_str().ok())
            .and_then(first_language_tag);

        Ok(Self {
            preference,
            platform_language,
        })
    }
}

/// The browser's most preferred language tag from an `Accept-Language` value.
fn first_language_tag(header: &str) -> Option<String> {
    let tag = header.split(',').next()?.split(';').next()?.trim();
    (!tag.is_empty() && tag != "*").then(|| tag.to_string())
}

/// The locale session of the current request.
///
/// Only available behind the layer that resolves it; anywhere else the
/// request fails with [`LocaleError::ContextMisuse`].
#[derive(Clone)]
pub struct ActiveLocale(pub Arc<LocaleSession>);

impl<S> FromRequestParts<S> for ActiveLocale
where
    S: Send + Sync,
{
    type Rejection = LocaleError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ActiveLocale>()
            .cloned()
            .ok_or(LocaleError::ContextMisuse)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut request = Request::builder().uri("/");
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request.body(()).unwrap().into_parts().0
    }

    #[test]
    fn picks_first_language_tag() {
        assert_eq!(
            first_language_tag("es-AR,es;q=0.9,en;q=0.8").as_deref(),
            Some("es-AR")
        );
        assert_eq!(first_language_tag("en;q=0.5").as_deref(), Some("en"));
        assert_eq!(first_language_tag(" *"), None);
        assert_eq!(first_language_tag(""), None);
    }

    #[tokio::test]
    async fn reads_signals_from_headers() {
        let mut parts = parts(&[
            ("cookie", "theme=dark; locale=es"),
            ("accept-language", "en-US,en;q=0.9"),
        ]);

        let signals = LocaleSignals::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(signals.preference.as_deref(), Some("es"));
        assert_eq!(signals.platform_language.as_deref(), Some("en-US"));
    }

    #[tokio::test]
    async fn missing_headers_give_empty_signals() {
        let mut parts = parts(&[]);

        let signals = LocaleSignals::from_request_parts(&mut parts, &()).await.unwrap();

        assert!(signals.preference.is_none());
        assert!(signals.platform_language.is_none());
    }

    #[tokio::test]
    async fn active_locale_outside_session_is_misuse() {
        let mut parts = parts(&[]);

        let error = ActiveLocale::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();

        assert!(matches!(error, LocaleError::ContextMisuse));
    }
}
