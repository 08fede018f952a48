//! Active locale resolution.
//!
//! A [`LocaleSession`] is created once per page load from the signals the
//! browser sends (the preference cookie and its preferred language), and is
//! handed to every view that renders text. The active `(locale, dictionary)`
//! pair lives in a single [`Resolved`] value that is swapped as a whole, so
//! readers always see a matching pair.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    dictionary::{Dictionary, DictionaryStore},
    locale::{Locale, LocaleError},
};

/// What the client told us about its language, before any validation.
#[derive(Clone, Debug, Default)]
pub struct LocaleSignals {
    /// Value of the persisted preference, if the client sent one.
    pub preference: Option<String>,
    /// The client's preferred language tag, e.g. `es-AR`.
    pub platform_language: Option<String>,
}

/// Picks the locale for a fresh page load.
///
/// A valid persisted preference wins, then the primary subtag of the platform
/// language, then `default`.
pub fn resolve_initial_locale(signals: &LocaleSignals, default: Locale) -> Locale {
    if let Some(locale) = signals
        .preference
        .as_deref()
        .and_then(|preference| preference.parse::<Locale>().ok())
    {
        return locale;
    }
    signals
        .platform_language
        .as_deref()
        .and_then(Locale::from_primary_subtag)
        .unwrap_or(default)
}

/// The active locale and its translation table.
#[derive(Debug)]
pub struct Resolved {
    locale: Locale,
    dictionary: Arc<Dictionary>,
}

impl Resolved {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }
}

#[derive(Debug)]
pub struct LocaleSession {
    dictionaries: Arc<DictionaryStore>,
    active: watch::Sender<Arc<Resolved>>,
    persisted: Option<Locale>,
}

impl LocaleSession {
    pub fn resolve(
        dictionaries: Arc<DictionaryStore>,
        signals: &LocaleSignals,
        default: Locale,
    ) -> Result<Self, LocaleError> {
        let locale = resolve_initial_locale(signals, default);
        let dictionary = dictionaries.get(locale)?;
        let persisted = signals
            .preference
            .as_deref()
            .and_then(|preference| preference.parse().ok());
        tracing::debug!(%locale, ?signals, "resolved initial locale");

        let (active, _) = watch::channel(Arc::new(Resolved { locale, dictionary }));
        Ok(Self {
            dictionaries,
            active,
            persisted,
        })
    }

    pub fn snapshot(&self) -> Arc<Resolved> {
        self.active.borrow().clone()
    }

    pub fn locale(&self) -> Locale {
        self.active.borrow().locale
    }

    /// Receives a new snapshot every time the active locale changes.
    ///
    /// Request handlers read [`snapshot`](Self::snapshot) instead; this exists
    /// for observers of `set_locale` that must react to a switch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Resolved>> {
        self.active.subscribe()
    }

    /// Switches the active locale.
    ///
    /// An unsupported code is rejected and the active pair is left as it was.
    /// Switching to the locale that is already active does not notify
    /// subscribers. On success the returned locale must be persisted as the
    /// client's preference.
    pub fn set_locale(&self, requested: &str) -> Result<Locale, LocaleError> {
        let locale = requested.parse::<Locale>()?;
        let dictionary = self.dictionaries.get(locale)?;

        let changed = self.active.send_if_modified(|active| {
            if active.locale == locale {
                return false;
            }
            *active = Arc::new(Resolved { locale, dictionary });
            true
        });
        if changed {
            tracing::info!(%locale, "switched locale");
        }
        Ok(locale)
    }

    /// Whether the client's stored preference differs from the active locale.
    pub fn needs_persist(&self) -> bool {
        self.persisted != Some(self.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<DictionaryStore> {
        Arc::new(DictionaryStore::embedded().unwrap())
    }

    fn signals(preference: Option<&str>, platform_language: Option<&str>) -> LocaleSignals {
        LocaleSignals {
            preference: preference.map(str::to_string),
            platform_language: platform_language.map(str::to_string),
        }
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(
            resolve_initial_locale(&signals(None, Some("fr-FR")), Locale::En),
            Locale::En
        );
        assert_eq!(
            resolve_initial_locale(&signals(None, None), Locale::Es),
            Locale::Es
        );
        assert_eq!(
            resolve_initial_locale(&signals(Some("fr"), Some("de")), Locale::En),
            Locale::En
        );
    }

    #[test]
    fn preference_outranks_platform_language() {
        assert_eq!(
            resolve_initial_locale(&signals(Some("es"), Some("en-US")), Locale::En),
            Locale::Es
        );
        assert_eq!(
            resolve_initial_locale(&signals(Some("en"), Some("es-AR")), Locale::Es),
            Locale::En
        );
    }

    #[test]
    fn platform_language_primary_subtag_matches() {
        assert_eq!(
            resolve_initial_locale(&signals(None, Some("es-AR")), Locale::En),
            Locale::Es
        );
        assert_eq!(
            resolve_initial_locale(&signals(Some("klingon"), Some("es")), Locale::En),
            Locale::Es
        );
    }

    #[test]
    fn session_publishes_matching_pair() {
        let session = LocaleSession::resolve(store(), &signals(None, Some("es-AR")), Locale::En).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.locale(), Locale::Es);
        assert_eq!(snapshot.dictionary().meta.code, "es");
        assert!(session.needs_persist());
    }

    #[test]
    fn matching_preference_does_not_need_persisting() {
        let session = LocaleSession::resolve(store(), &signals(Some("en"), None), Locale::Es).unwrap();
        assert_eq!(session.locale(), Locale::En);
        assert!(!session.needs_persist());
    }

    #[test]
    fn resolve_without_table_is_unknown_locale() {
        let store = Arc::new(
            DictionaryStore::from_documents([crate::dictionary::EMBEDDED_DOCUMENTS[0]]).unwrap(),
        );
        let error = LocaleSession::resolve(store, &signals(Some("es"), None), Locale::En).unwrap_err();
        assert!(matches!(error, LocaleError::UnknownLocale(Locale::Es)));
    }

    #[test]
    fn set_locale_swaps_pair_together() {
        let session = LocaleSession::resolve(store(), &signals(None, None), Locale::En).unwrap();
        let before = session.snapshot();

        assert_eq!(session.set_locale("es").unwrap(), Locale::Es);

        let after = session.snapshot();
        assert_eq!(before.locale(), Locale::En);
        assert_eq!(before.dictionary().meta.code, "en");
        assert_eq!(after.locale(), Locale::Es);
        assert_eq!(after.dictionary().meta.code, "es");
        assert!(session.needs_persist());
    }

    #[test]
    fn set_locale_rejects_unsupported_code() {
        let session = LocaleSession::resolve(store(), &signals(Some("es"), None), Locale::En).unwrap();

        let error = session.set_locale("fr").unwrap_err();

        assert!(matches!(error, LocaleError::InvalidLocale(ref code) if code == "fr"));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.locale(), Locale::Es);
        assert_eq!(snapshot.dictionary().meta.code, "es");
        assert!(!session.needs_persist());
    }

    #[test]
    fn set_locale_notifies_subscribers_once_per_change() {
        let session = LocaleSession::resolve(store(), &signals(None, None), Locale::En).unwrap();
        let mut receiver = session.subscribe();

        session.set_locale("en").unwrap();
        assert!(!receiver.has_changed().unwrap());

        session.set_locale("es").unwrap();
        assert!(receiver.has_changed().unwrap());
        assert_eq!(receiver.borrow_and_update().locale(), Locale::Es);

        session.set_locale("es").unwrap();
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn concurrent_readers_never_see_mixed_pairs() {
        let session = Arc::new(LocaleSession::resolve(store(), &signals(None, None), Locale::En).unwrap());

        let readers = (0..4)
            .map(|_| {
                let session = session.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let snapshot = session.snapshot();
                        assert_eq!(snapshot.dictionary().meta.code, snapshot.locale().as_str());
                    }
                })
            })
            .collect::<Vec<_>>();
        for i in 0..1000 {
            let code = if i % 2 == 0 { "es" } else { "en" };
            session.set_locale(code).unwrap();
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
