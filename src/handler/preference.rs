use axum::response::{IntoResponseParts, ResponseParts};
use http::{header, HeaderMap, HeaderValue, StatusCode};
use time::Duration;

use crate::locale::Locale;

pub const PREFERENCE_COOKIE_KEY: &str = "locale";

/// The client's persisted locale preference, written back as a cookie.
#[derive(Clone, Copy, Debug)]
pub struct Preference {
    pub locale: Locale,
    pub max_age: Duration,
}

impl Preference {
    pub fn new(locale: Locale, max_age: Duration) -> Self {
        Self { locale, max_age }
    }

    pub fn header_value(&self) -> Result<HeaderValue, http::header::InvalidHeaderValue> {
        HeaderValue::from_str(&format!(
            "{PREFERENCE_COOKIE_KEY}={}; Max-Age={}; SameSite=Lax; Path=/",
            self.locale,
            self.max_age.whole_seconds()
        ))
    }

    /// Whether `headers` already carry a preference cookie.
    pub fn is_set_in(headers: &HeaderMap) -> bool {
        headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(|value| {
                value
                    .strip_prefix(PREFERENCE_COOKIE_KEY)
                    .is_some_and(|rest| rest.starts_with('='))
            })
    }
}

impl IntoResponseParts for Preference {
    type Error = (StatusCode, String);

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let value = self
            .header_value()
            .map_err(|error| (StatusCode::INTERNAL_SERVER_ERROR, format!("{error:?}")))?;
        res.headers_mut().append(header::SET_COOKIE, value);
        Ok(res)
    }
}
