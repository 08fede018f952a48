mod extract;
mod preference;
mod templates;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing, Router,
};
use axum_extra::{headers, TypedHeader};
use http::{header, StatusCode};
use serde::Deserialize;
use time::{Duration, OffsetDateTime};
use url::Url;

use crate::{
    content::PROFILE,
    dictionary::DictionaryStore,
    internationalization::t,
    locale::{Locale, LocaleError},
    page::{self, Filters, Page},
    resolver::{LocaleSession, LocaleSignals},
};

use self::{
    extract::ActiveLocale,
    preference::Preference,
    templates::{ErrorTemplate, HtmlTemplate, IndexTemplate},
};

#[derive(Clone)]
pub struct AppState {
    pub dictionaries: Arc<DictionaryStore>,
    pub default_locale: Locale,
    pub preference_max_age: Duration,
    pub public_url: Option<Url>,
}

pub fn create_router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", routing::get(get_index))
        .route("/locale/{locale}", routing::get(get_locale))
        .fallback(get_not_found)
        .layer(middleware::from_fn_with_state(state.clone(), publish_locale));

    Router::new()
        .route("/index.css", routing::get(get_index_css))
        .route("/healthz", routing::get(get_healthz))
        .merge(pages)
        .with_state(state)
}

/// Resolves the locale session for a page load and hands it to the handler.
/// Afterwards the preference cookie is written whenever the active locale
/// differs from what the client has stored.
async fn publish_locale(
    State(state): State<AppState>,
    signals: LocaleSignals,
    mut request: Request,
    next: Next,
) -> Response {
    let session = match LocaleSession::resolve(
        state.dictionaries.clone(),
        &signals,
        state.default_locale,
    ) {
        Ok(session) => Arc::new(session),
        Err(error) => return error.into_response(),
    };
    request
        .extensions_mut()
        .insert(ActiveLocale(session.clone()));

    let mut response = next.run(request).await;

    if session.needs_persist() && !Preference::is_set_in(response.headers()) {
        let preference = Preference::new(session.locale(), state.preference_max_age);
        match preference.header_value() {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(error) => tracing::error!(?error, "failed to encode preference cookie"),
        }
    }
    response
}

async fn get_index_css() -> (TypedHeader<headers::ContentType>, &'static [u8]) {
    (
        TypedHeader(headers::ContentType::from(mime::TEXT_CSS)),
        include_bytes!(concat!(env!("OUT_DIR"), "/index.css")),
    )
}

async fn get_healthz() -> &'static str {
    "ok"
}

#[derive(Default, Deserialize)]
struct FilterQuery {
    tech: Option<String>,
    projects: Option<String>,
}

async fn get_index(
    State(state): State<AppState>,
    ActiveLocale(session): ActiveLocale,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> HtmlTemplate<IndexTemplate> {
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let filters = Filters::parse(query.tech.as_deref(), query.projects.as_deref());
    let resolved = session.snapshot();
    let locale = resolved.locale();

    HtmlTemplate(IndexTemplate {
        language: locale.language_identifier(),
        locale: locale.as_str(),
        locale_links: page::locale_links(locale, &state.dictionaries),
        public_url: state.public_url.clone(),
        profile: &PROFILE,
        dictionary: resolved.dictionary().clone(),
        page: Page::build(&resolved, filters, OffsetDateTime::now_utc().year()),
    })
}

async fn get_locale(
    State(state): State<AppState>,
    ActiveLocale(session): ActiveLocale,
    Path(requested): Path<String>,
) -> Result<(Preference, Redirect), Response> {
    match session.set_locale(&requested) {
        Ok(locale) => Ok((
            Preference::new(locale, state.preference_max_age),
            Redirect::to("/"),
        )),
        Err(LocaleError::InvalidLocale(code)) => {
            tracing::warn!(%code, "rejected locale switch");
            Err((
                StatusCode::BAD_REQUEST,
                error_page(&state, &session, "invalid-locale-title", "invalid-locale-body"),
            )
                .into_response())
        }
        Err(error) => Err(error.into_response()),
    }
}

async fn get_not_found(
    State(state): State<AppState>,
    ActiveLocale(session): ActiveLocale,
) -> (StatusCode, HtmlTemplate<ErrorTemplate>) {
    (
        StatusCode::NOT_FOUND,
        error_page(&state, &session, "not-found-title", "not-found-body"),
    )
}

fn error_page(
    state: &AppState,
    session: &LocaleSession,
    title_id: &str,
    body_id: &str,
) -> HtmlTemplate<ErrorTemplate> {
    let locale = session.locale();
    let language = locale.language_identifier();

    HtmlTemplate(ErrorTemplate {
        title: t(&language, title_id),
        body: t(&language, body_id),
        locale: locale.as_str(),
        locale_links: page::locale_links(locale, &state.dictionaries),
        public_url: state.public_url.clone(),
        profile: &PROFILE,
        language,
    })
}

#[cfg(test)]
mod tests {
    use reqwest::{header::SET_COOKIE, redirect::Policy, Client};
    use tokio::net::TcpListener;

    use super::*;

    fn state(default_locale: Locale) -> AppState {
        AppState {
            dictionaries: Arc::new(DictionaryStore::embedded().unwrap()),
            default_locale,
            preference_max_age: Duration::days(730),
            public_url: None,
        }
    }

    async fn serve(state: AppState) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_router(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client() -> Client {
        Client::builder().redirect(Policy::none()).build().unwrap()
    }

    fn cookie(response: &reqwest::Response) -> Option<&str> {
        response
            .headers()
            .get(SET_COOKIE)
            .map(|value| value.to_str().unwrap())
    }

    #[tokio::test]
    async fn first_visit_follows_browser_language_and_persists_it() {
        let base = serve(state(Locale::En)).await;

        let response = client()
            .get(format!("{base}/"))
            .header("accept-language", "es-AR,es;q=0.9")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            cookie(&response),
            Some("locale=es; Max-Age=63072000; SameSite=Lax; Path=/")
        );
        let body = response.text().await.unwrap();
        assert!(body.contains(r#"<html lang="es""#));
        assert!(body.contains("Sobre mí"));
    }

    #[tokio::test]
    async fn stored_preference_wins_without_rewriting_cookie() {
        let base = serve(state(Locale::En)).await;

        let response = client()
            .get(format!("{base}/"))
            .header("cookie", "locale=es")
            .header("accept-language", "en-US")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert!(cookie(&response).is_none());
        assert!(response.text().await.unwrap().contains(r#"<html lang="es""#));
    }

    #[tokio::test]
    async fn unsupported_language_uses_configured_default() {
        let base = serve(state(Locale::Es)).await;

        let response = client()
            .get(format!("{base}/"))
            .header("accept-language", "fr-FR")
            .send()
            .await
            .unwrap();

        assert!(response.text().await.unwrap().contains(r#"<html lang="es""#));
    }

    #[tokio::test]
    async fn switched_locale_survives_next_load() {
        let base = serve(state(Locale::En)).await;

        for locale in Locale::ALL {
            let switched = client()
                .get(format!("{base}/locale/{locale}"))
                .header("accept-language", "de")
                .send()
                .await
                .unwrap();
            assert_eq!(switched.status(), StatusCode::SEE_OTHER);
            assert_eq!(switched.headers()["location"], "/");
            assert_eq!(
                switched.headers().get_all(SET_COOKIE).iter().count(),
                1,
                "one preference cookie for `{locale}`"
            );
            assert!(cookie(&switched)
                .unwrap()
                .starts_with(&format!("locale={locale};")));

            let reloaded = client()
                .get(format!("{base}/"))
                .header("cookie", format!("locale={locale}"))
                .header("accept-language", "de")
                .send()
                .await
                .unwrap();
            assert!(cookie(&reloaded).is_none());
            assert!(reloaded
                .text()
                .await
                .unwrap()
                .contains(&format!(r#"<html lang="{locale}""#)));
        }
    }

    #[tokio::test]
    async fn rejected_switch_keeps_locale() {
        let base = serve(state(Locale::En)).await;

        let response = client()
            .get(format!("{base}/locale/fr"))
            .header("cookie", "locale=es")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(cookie(&response).is_none());
        let body = response.text().await.unwrap();
        assert!(body.contains(r#"<html lang="es""#));
        assert!(body.contains("Idioma no disponible"));
    }

    #[tokio::test]
    async fn unknown_route_renders_localized_not_found() {
        let base = serve(state(Locale::En)).await;

        let response = client()
            .get(format!("{base}/no/such/page"))
            .header("cookie", "locale=en")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.text().await.unwrap().contains("Page not found"));
    }

    #[tokio::test]
    async fn static_routes_skip_locale_resolution() {
        let base = serve(state(Locale::En)).await;

        let health = client().get(format!("{base}/healthz")).send().await.unwrap();
        assert!(cookie(&health).is_none());
        assert_eq!(health.text().await.unwrap(), "ok");

        let css = client().get(format!("{base}/index.css")).send().await.unwrap();
        assert_eq!(css.status(), 200);
        assert!(cookie(&css).is_none());
        assert_eq!(css.headers()["content-type"], "text/css");
    }

    #[tokio::test]
    async fn query_filters_projects() {
        let base = serve(state(Locale::En)).await;

        let filtered = client()
            .get(format!("{base}/?projects=mobile&tech=unknown"))
            .header("cookie", "locale=en")
            .send()
            .await
            .unwrap();

        assert_eq!(filtered.status(), 200);
        let body = filtered.text().await.unwrap();
        assert!(body.contains("Fleet Tracker"));
        assert!(!body.contains("Payments Gateway"));
        assert!(body.contains("PostgreSQL"));
    }
}
