//! View models for the portfolio page, built from the active locale snapshot
//! and the static content.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    content::{
        self, Proficiency, ProjectCategory, TechCategory, ARCHITECTURE_EXAMPLES, CODE_PROBLEMS,
        PROJECTS, TECHNOLOGIES,
    },
    dictionary::DictionaryStore,
    locale::Locale,
    resolver::Resolved,
};

static TAGGED_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>[^<]+</[^>]+>").expect("failed to compile regex"));
static HIGHLIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<highlight>([^<]+)</highlight>").expect("failed to compile regex"));

/// Removes inline elements (tag and content) from translated text.
pub fn strip_tagged(text: &str) -> String {
    TAGGED_ELEMENT.replace_all(text, "").trim_end().to_string()
}

/// Splits `text` into the text without its `<highlight>` element and the
/// first highlighted fragment.
pub fn split_highlight(text: &str) -> (String, Option<String>) {
    let highlighted = HIGHLIGHT
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string());
    let plain = HIGHLIGHT.replace_all(text, "").trim_end().to_string();
    (plain, highlighted)
}

pub fn locale_switch_href(locale: Locale) -> String {
    format!("/locale/{locale}")
}

/// Category filters selected through the page query string. `None` shows
/// every category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub tech: Option<TechCategory>,
    pub projects: Option<ProjectCategory>,
}

impl Filters {
    /// Unknown slugs select every category.
    pub fn parse(tech: Option<&str>, projects: Option<&str>) -> Self {
        Self {
            tech: tech.and_then(TechCategory::from_slug),
            projects: projects.and_then(ProjectCategory::from_slug),
        }
    }

    fn href(self, anchor: &str) -> String {
        let query = [
            self.tech.map(|category| format!("tech={}", category.slug())),
            self.projects
                .map(|category| format!("projects={}", category.slug())),
        ]
        .into_iter()
        .flatten()
        .join("&");
        if query.is_empty() {
            format!("/#{anchor}")
        } else {
            format!("/?{query}#{anchor}")
        }
    }
}

pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub struct NavLink {
    pub label: String,
    pub href: &'static str,
}

pub struct LocaleLink {
    pub code: &'static str,
    pub label: String,
    pub name: String,
    pub href: String,
    pub active: bool,
}

pub struct Stat {
    pub value: String,
    pub label: String,
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

pub struct TechGroup {
    pub label: String,
    pub items: Vec<TechItem>,
}

pub struct TechItem {
    pub name: &'static str,
    pub color: &'static str,
    pub proficiency: String,
    pub proficiency_slug: &'static str,
    pub expert: bool,
}

pub struct ProjectCard {
    pub name: &'static str,
    pub year: i32,
    pub icon: &'static str,
    pub category: String,
    pub description: String,
    pub technologies: Vec<&'static str>,
    pub hidden_technologies: usize,
    pub featured: bool,
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

pub struct ArchitectureCard {
    pub slug: &'static str,
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub code: &'static str,
    pub language: &'static str,
    pub tags: &'static [&'static str],
}

pub struct ProblemCard {
    pub slug: &'static str,
    pub title: String,
    pub description: String,
    pub problem: &'static str,
    pub solution: &'static str,
    pub explanation: String,
    pub language: &'static str,
    pub difficulty: String,
    pub difficulty_slug: &'static str,
    pub tags: &'static [&'static str],
}

pub struct ContactEntry {
    pub label: String,
    pub value: &'static str,
    pub href: Option<String>,
    pub external: bool,
}

pub struct SocialLink {
    pub name: &'static str,
    pub url: String,
}

pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavLink>,
}

/// Everything the index template renders besides plain dictionary fields.
pub struct Page {
    pub nav: Vec<NavLink>,
    pub roles: Vec<String>,
    pub years_of_experience: u32,
    pub about_intro: String,
    pub about_paragraph1: String,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub tech_filters: Vec<FilterLink>,
    pub tech_groups: Vec<TechGroup>,
    pub tech_footer: String,
    pub tech_footer_highlight: Option<String>,
    pub project_filters: Vec<FilterLink>,
    pub projects: Vec<ProjectCard>,
    pub architecture: Vec<ArchitectureCard>,
    pub problems: Vec<ProblemCard>,
    pub contact: Vec<ContactEntry>,
    pub socials: Vec<SocialLink>,
    pub footer_columns: Vec<FooterColumn>,
    pub year: i32,
}

const PROJECT_TECHNOLOGIES_SHOWN: usize = 4;

impl Page {
    pub fn build(resolved: &Resolved, filters: Filters, current_year: i32) -> Self {
        let dictionary = resolved.dictionary();
        let nav = &dictionary.nav;
        let about = &dictionary.about;
        let link = |label: &String, href: &'static str| NavLink {
            label: label.clone(),
            href,
        };

        let years_of_experience = content::YEARS_OF_EXPERIENCE;
        let (tech_footer, tech_footer_highlight) = split_highlight(&dictionary.tech.footer);

        let tech_filters = std::iter::once((None, dictionary.tech.categories.all.clone()))
            .chain(
                TechCategory::ALL
                    .into_iter()
                    .map(|category| (Some(category), category.label(dictionary).to_string())),
            )
            .map(|(category, label)| FilterLink {
                label,
                href: Filters {
                    tech: category,
                    ..filters
                }
                .href("tech"),
                active: filters.tech == category,
            })
            .collect();

        let technologies = TECHNOLOGIES
            .iter()
            .filter(|technology| filters.tech.map_or(true, |category| category == technology.category))
            .chunk_by(|technology| technology.category);
        let tech_groups = technologies
            .into_iter()
            .map(|(category, items)| TechGroup {
                label: category.label(dictionary).to_string(),
                items: items
                    .map(|technology| TechItem {
                        name: technology.name,
                        color: technology.color,
                        proficiency: technology.proficiency.label(dictionary).to_string(),
                        proficiency_slug: technology.proficiency.slug(),
                        expert: technology.proficiency == Proficiency::Expert,
                    })
                    .collect(),
            })
            .collect();

        let project_filters = std::iter::once((None, dictionary.projects.categories.all.clone()))
            .chain(
                ProjectCategory::ALL
                    .into_iter()
                    .map(|category| (Some(category), category.label(dictionary).to_string())),
            )
            .map(|(category, label)| FilterLink {
                label,
                href: Filters {
                    projects: category,
                    ..filters
                }
                .href("projects"),
                active: filters.projects == category,
            })
            .collect();

        let projects = PROJECTS
            .iter()
            .filter(|project| filters.projects.map_or(true, |category| category == project.category))
            .map(|project| ProjectCard {
                name: project.name,
                year: project.year,
                icon: project.category.icon(),
                category: project.category.label(dictionary).to_string(),
                description: project.id.description(dictionary).to_string(),
                technologies: project
                    .technologies
                    .iter()
                    .copied()
                    .take(PROJECT_TECHNOLOGIES_SHOWN)
                    .collect(),
                hidden_technologies: project
                    .technologies
                    .len()
                    .saturating_sub(PROJECT_TECHNOLOGIES_SHOWN),
                featured: project.featured,
                repo_url: project.repo_url,
                demo_url: project.demo_url,
            })
            .collect();

        let architecture = ARCHITECTURE_EXAMPLES
            .iter()
            .map(|example| {
                let text = example.id.text(dictionary);
                ArchitectureCard {
                    slug: example.id.slug(),
                    title: text.title.clone(),
                    description: text.description.clone(),
                    file_name: format!(
                        "{}.{}",
                        text.title.to_lowercase().split_whitespace().join("-"),
                        file_extension(example.language)
                    ),
                    code: example.code,
                    language: example.language,
                    tags: example.tags,
                }
            })
            .collect();

        let problems = CODE_PROBLEMS
            .iter()
            .map(|problem| {
                let text = problem.id.text(dictionary);
                ProblemCard {
                    slug: problem.id.slug(),
                    title: text.title.clone(),
                    description: text.description.clone(),
                    problem: problem.problem,
                    solution: problem.solution,
                    explanation: text.explanation.clone(),
                    language: problem.language,
                    difficulty: problem.difficulty.label(dictionary).to_string(),
                    difficulty_slug: problem.difficulty.slug(),
                    tags: problem.tags,
                }
            })
            .collect();

        let info = &dictionary.contact.info;
        let contact = vec![
            ContactEntry {
                label: info.email.clone(),
                value: content::PROFILE.email,
                href: Some(format!("mailto:{}", content::PROFILE.email)),
                external: false,
            },
            ContactEntry {
                label: info.location.clone(),
                value: content::PROFILE.location,
                href: None,
                external: false,
            },
            ContactEntry {
                label: info.github.clone(),
                value: content::PROFILE.github_handle,
                href: Some(content::PROFILE.github_url.to_string()),
                external: true,
            },
            ContactEntry {
                label: info.linkedin.clone(),
                value: content::PROFILE.linkedin_handle,
                href: Some(content::PROFILE.linkedin_url.to_string()),
                external: true,
            },
        ];

        Self {
            nav: vec![
                link(&nav.home, "#hero"),
                link(&nav.about, "#about"),
                link(&nav.technologies, "#tech"),
                link(&nav.projects, "#projects"),
                link(&nav.architecture, "#architecture"),
                link(&nav.problems, "#problems"),
                link(&nav.contact, "#contact"),
            ],
            roles: vec![
                dictionary.hero.roles.fullstack.clone(),
                dictionary.hero.roles.architect.clone(),
                dictionary.hero.roles.devops.clone(),
                dictionary.hero.roles.solver.clone(),
            ],
            years_of_experience,
            about_intro: strip_tagged(&about.intro),
            about_paragraph1: strip_tagged(&about.paragraph1),
            stats: vec![
                Stat {
                    value: format!("{years_of_experience}+"),
                    label: about.stats.years.clone(),
                },
                Stat {
                    value: content::PUBLIC_REPOS.to_string(),
                    label: about.stats.repos.clone(),
                },
                Stat {
                    value: format!("{}+", content::PROJECTS_DELIVERED),
                    label: about.stats.projects.clone(),
                },
                Stat {
                    value: format!("{}%", content::SATISFACTION_PERCENT),
                    label: about.stats.satisfaction.clone(),
                },
            ],
            highlights: [
                ("🚀", &about.highlights.fullstack),
                ("🏗️", &about.highlights.architecture),
                ("☁️", &about.highlights.devops),
                ("⚡", &about.highlights.automation),
            ]
            .into_iter()
            .map(|(icon, text)| Highlight {
                icon,
                title: text.title.clone(),
                description: text.description.clone(),
            })
            .collect(),
            tech_filters,
            tech_groups,
            tech_footer,
            tech_footer_highlight,
            project_filters,
            projects,
            architecture,
            problems,
            contact,
            socials: vec![
                SocialLink {
                    name: "GitHub",
                    url: content::PROFILE.github_url.to_string(),
                },
                SocialLink {
                    name: "LinkedIn",
                    url: content::PROFILE.linkedin_url.to_string(),
                },
                SocialLink {
                    name: "Email",
                    url: format!("mailto:{}", content::PROFILE.email),
                },
            ],
            footer_columns: vec![
                FooterColumn {
                    title: dictionary.footer.navigation.clone(),
                    links: vec![
                        link(&nav.home, "#hero"),
                        link(&nav.about, "#about"),
                        link(&nav.projects, "#projects"),
                        link(&nav.contact, "#contact"),
                    ],
                },
                FooterColumn {
                    title: dictionary.footer.resources.clone(),
                    links: vec![
                        link(&nav.architecture, "#architecture"),
                        link(&nav.problems, "#problems"),
                        link(&nav.technologies, "#tech"),
                    ],
                },
            ],
            year: current_year,
        }
    }
}

/// One switch link per supported locale, marking the active one. Each link
/// is named in its own language.
pub fn locale_links(active: Locale, dictionaries: &DictionaryStore) -> Vec<LocaleLink> {
    Locale::ALL
        .into_iter()
        .map(|locale| LocaleLink {
            code: locale.as_str(),
            label: locale.as_str().to_uppercase(),
            name: dictionaries
                .get(locale)
                .map(|dictionary| dictionary.meta.name.clone())
                .unwrap_or_else(|_| locale.to_string()),
            href: locale_switch_href(locale),
            active: locale == active,
        })
        .collect()
}

fn file_extension(language: &str) -> &str {
    match language {
        "typescript" => "ts",
        "javascript" => "js",
        "python" => "py",
        "rust" => "rs",
        other => other,
    }
}
