//! Typed translation tables.
//!
//! Every locale ships one JSON document with the same key layout. The layout
//! is mirrored by the structs below and every struct rejects unknown fields,
//! so a missing or misspelled key fails to deserialize instead of rendering
//! the raw key name.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use eyre::{ensure, WrapErr};
use serde::Deserialize;

use crate::locale::{Locale, LocaleError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dictionary {
    pub meta: Meta,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub tech: Tech,
    pub projects: Projects,
    pub architecture: Architecture,
    pub problems: Problems,
    pub contact: Contact,
    pub footer: Footer,
}

/// Describes the document itself; `code` must match the locale the document
/// is registered for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Meta {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Nav {
    pub home: String,
    pub about: String,
    pub technologies: String,
    pub projects: String,
    pub architecture: String,
    pub problems: String,
    pub contact: String,
    pub lets_chat: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Hero {
    pub available: String,
    pub greeting: String,
    pub name: String,
    pub typing: String,
    pub roles: Roles,
    pub view_projects: String,
    pub contact_me: String,
    pub scroll: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Roles {
    pub fullstack: String,
    pub architect: String,
    pub devops: String,
    pub solver: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct About {
    pub tag: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub intro: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub location: String,
    pub location_value: String,
    pub languages: String,
    pub languages_value: String,
    pub stats: Stats,
    pub highlights: Highlights,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stats {
    pub years: String,
    pub repos: String,
    pub projects: String,
    pub satisfaction: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Highlights {
    pub fullstack: TitledText,
    pub architecture: TitledText,
    pub devops: TitledText,
    pub automation: TitledText,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TitledText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Tech {
    pub tag: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub categories: TechCategories,
    pub proficiency: ProficiencyLabels,
    pub footer: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TechCategories {
    pub all: String,
    pub language: String,
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub devops: String,
    pub tools: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProficiencyLabels {
    pub expert: String,
    pub advanced: String,
    pub intermediate: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Projects {
    pub tag: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub categories: ProjectCategories,
    pub featured: String,
    pub code: String,
    pub demo: String,
    pub view_more: String,
    pub items: ProjectItems,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectCategories {
    pub all: String,
    pub web: String,
    pub mobile: String,
    pub api: String,
    pub devops: String,
    pub automation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectItems {
    pub portfolio: String,
    pub mvp_launcher: String,
    pub fleet_tracker: String,
    pub payments_gateway: String,
    pub infra_blueprints: String,
    pub workflow_bots: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Architecture {
    pub tag: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub description: String,
    pub examples: ArchitectureExamples,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArchitectureExamples {
    pub microservices: TitledText,
    pub clean: TitledText,
    pub event: TitledText,
    pub cqrs: TitledText,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Problems {
    pub tag: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub problem: String,
    pub solution: String,
    pub show_solution: String,
    pub hide_solution: String,
    pub explanation: String,
    pub difficulty: DifficultyLabels,
    pub items: ProblemItems,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DifficultyLabels {
    pub easy: String,
    pub medium: String,
    pub hard: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemItems {
    pub memory_leak: ProblemText,
    pub n_plus_one: ProblemText,
    pub race_condition: ProblemText,
    pub debounce_throttle: ProblemText,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProblemText {
    pub title: String,
    pub description: String,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
    pub tag: String,
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub description: String,
    pub find_me: String,
    pub available: String,
    pub available_description: String,
    pub info: ContactInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Footer {
    pub description: String,
    pub navigation: String,
    pub resources: String,
    pub rights: String,
    pub made_with: String,
    pub using: String,
}

impl Dictionary {
    pub fn parse(locale: Locale, document: &str) -> eyre::Result<Self> {
        let dictionary = serde_json::from_str::<Dictionary>(document)
            .wrap_err_with(|| format!("failed to parse translation table for `{locale}`"))?;
        ensure!(
            dictionary.meta.code == locale.as_str(),
            "translation table registered for `{locale}` declares locale `{}`",
            dictionary.meta.code
        );
        Ok(dictionary)
    }
}

/// Translation documents compiled into the binary.
pub const EMBEDDED_DOCUMENTS: [(Locale, &str); 2] = [
    (
        Locale::En,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/en.json")),
    ),
    (
        Locale::Es,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/dictionaries/es.json")),
    ),
];

/// Immutable set of parsed translation tables, shared by every request.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    tables: BTreeMap<Locale, Arc<Dictionary>>,
}

impl DictionaryStore {
    pub fn embedded() -> eyre::Result<Self> {
        Self::from_documents(EMBEDDED_DOCUMENTS)
    }

    pub fn from_documents<'a>(
        documents: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> eyre::Result<Self> {
        let tables = documents
            .into_iter()
            .map(|(locale, document)| Ok((locale, Arc::new(Dictionary::parse(locale, document)?))))
            .collect::<eyre::Result<_>>()?;
        Ok(Self { tables })
    }

    pub fn get(&self, locale: Locale) -> Result<Arc<Dictionary>, LocaleError> {
        self.tables
            .get(&locale)
            .cloned()
            .ok_or(LocaleError::UnknownLocale(locale))
    }

    /// Fails with the first supported locale that has no table.
    pub fn ensure_complete(&self) -> Result<(), LocaleError> {
        Locale::ALL
            .into_iter()
            .try_for_each(|locale| self.get(locale).map(drop))
    }
}

/// Dotted key paths of every leaf in a raw translation document, e.g.
/// `nav.home` or `about.stats.years`.
pub fn key_paths(document: &str) -> eyre::Result<BTreeSet<String>> {
    fn walk(prefix: &str, value: &serde_json::Value, paths: &mut BTreeSet<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(&path, child, paths);
                }
            }
            _ => {
                paths.insert(prefix.to_string());
            }
        }
    }

    let value = serde_json::from_str::<serde_json::Value>(document)
        .wrap_err("failed to parse translation document")?;
    let mut paths = BTreeSet::new();
    walk("", &value, &mut paths);
    Ok(paths)
}
