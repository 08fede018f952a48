use std::sync::Arc;

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use fluent_templates::LanguageIdentifier;
use http::StatusCode;
use url::Url;

use crate::{
    content::Profile,
    dictionary::Dictionary,
    page::{LocaleLink, Page},
};

mod filters;

/// Renders an askama template into an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(error) => {
                tracing::error!(?error, "failed to render template");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub language: LanguageIdentifier,
    pub locale: &'static str,
    pub locale_links: Vec<LocaleLink>,
    pub public_url: Option<Url>,
    pub profile: &'static Profile,
    pub dictionary: Arc<Dictionary>,
    pub page: Page,
}

/// Page shown for unknown routes and rejected locale switches.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub language: LanguageIdentifier,
    pub locale: &'static str,
    pub locale_links: Vec<LocaleLink>,
    pub public_url: Option<Url>,
    pub profile: &'static Profile,
    pub title: String,
    pub body: String,
}
