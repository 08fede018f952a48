use fluent_templates::{LanguageIdentifier, Loader};

fluent_templates::static_loader! {
    pub static LOCALES = {
        locales: "locales",
        fallback_language: "en",
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

pub fn t(language: &LanguageIdentifier, text_id: &str) -> String {
    LOCALES
        .try_lookup(language, text_id)
        .unwrap_or_else(|| format!("t({})", text_id))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::locale::Locale;

    const RESOURCES: [(Locale, &str); 2] = [
        (
            Locale::En,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en/main.ftl")),
        ),
        (
            Locale::Es,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/es/main.ftl")),
        ),
    ];

    fn message_ids(resource: &str) -> BTreeSet<&str> {
        resource
            .lines()
            .filter(|line| !line.starts_with([' ', '#', '.']))
            .filter_map(|line| line.split_once('='))
            .map(|(id, _)| id.trim())
            .collect()
    }

    #[test]
    fn every_locale_defines_the_same_messages() {
        let (_, default_resource) = RESOURCES[0];
        let expected = message_ids(default_resource);
        assert!(expected.contains("page-title"));

        for (locale, resource) in RESOURCES {
            assert_eq!(message_ids(resource), expected, "`{locale}` messages differ");
        }
    }

    #[test]
    fn looks_up_per_locale() {
        assert_eq!(t(&Locale::En.language_identifier(), "language-label"), "Language");
        assert_eq!(t(&Locale::Es.language_identifier(), "language-label"), "Idioma");
    }

    #[test]
    fn every_message_resolves_in_every_locale() {
        let (_, default_resource) = RESOURCES[0];
        for locale in Locale::ALL {
            for id in message_ids(default_resource) {
                let text = t(&locale.language_identifier(), id);
                assert_ne!(text, format!("t({id})"), "`{id}` missing for `{locale}`");
            }
        }
    }

    #[test]
    fn unknown_message_renders_its_id() {
        assert_eq!(t(&Locale::En.language_identifier(), "no-such-message"), "t(no-such-message)");
    }
}
