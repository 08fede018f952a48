use fluent_templates::LanguageIdentifier;

pub fn t(
    language: &LanguageIdentifier,
    _: &dyn askama::Values,
    text_id: &str,
) -> askama::Result<String> {
    Ok(crate::internationalization::t(language, text_id))
}
