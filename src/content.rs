mod assets;

pub use assets::{assets_for, AssetTable, ProjectAsset, PROJECT_ASSETS};

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gallery::{Category, Project};

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<Locale, Arc<SiteContent>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "messages"]
struct Bundles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }

    /// The default locale lives at the site root.
    pub fn home_path(self) -> &'static str {
        match self {
            Locale::En => "/",
            Locale::Ja => "/ja",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("No message bundle for locale '{0}'")]
    MissingBundle(&'static str),
    #[error("Couldn't parse message bundle '{locale}': {reason}")]
    Parse {
        locale: &'static str,
        reason: String,
    },
    #[error("Category '{category}' has {texts} project texts but {assets} asset entries")]
    AssetMismatch {
        category: String,
        texts: usize,
        assets: usize,
    },
    #[error("Duplicate project category '{0}'")]
    DuplicateCategory(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaCopy {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavCopy {
    pub brand: String,
    pub links: Vec<Link>,
    pub resume: String,
    pub download_resume: String,
    pub open_menu: String,
    pub close_menu: String,
    pub toggle_theme: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCopy {
    pub available: String,
    pub title_lead: String,
    pub title_accent: String,
    pub title_tail: String,
    pub summary: String,
    pub location: String,
    pub photo_alt: String,
    pub view_services: String,
    pub download_resume: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Category id of the gallery tab this service links to.
    pub project_anchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesCopy {
    pub what_i_do: String,
    pub title: String,
    pub intro: String,
    pub view_projects: String,
    pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsCopy {
    pub eyebrow: String,
    pub title: String,
    pub intro: String,
    pub tablist_label: String,
    pub features_label: String,
    pub stack_label: String,
    pub visit_site: String,
    pub close: String,
    pub previous: String,
    pub next: String,
    pub screenshot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectText {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryText {
    pub id: String,
    pub label: String,
    pub projects: Vec<ProjectText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsMessages {
    #[serde(flatten)]
    pub copy: ProjectsCopy,
    pub categories: Vec<CategoryText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceCopy {
    pub eyebrow: String,
    pub title: String,
    pub intro: String,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsCopy {
    pub expertise: String,
    pub title: String,
    pub intro: String,
    pub certifications_title: String,
    pub groups: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub university: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationCopy {
    pub background: String,
    pub title: String,
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCopy {
    pub eyebrow: String,
    pub title: String,
    pub intro: String,
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub submit: String,
    pub channels: Vec<ContactChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterCopy {
    pub owner: String,
    pub rights: String,
    pub links: Vec<Link>,
}

/// One locale bundle as authored in `messages/<locale>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    pub meta: MetaCopy,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub services: ServicesCopy,
    pub projects: ProjectsMessages,
    pub experience: ExperienceCopy,
    pub skills: SkillsCopy,
    pub education: EducationCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
}

/// Everything the page renders for one locale, with project texts already
/// merged with their images and links.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub locale: Locale,
    pub meta: MetaCopy,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub services: ServicesCopy,
    pub projects: ProjectsCopy,
    pub categories: Arc<Vec<Category>>,
    pub experience: ExperienceCopy,
    pub skills: SkillsCopy,
    pub education: EducationCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
}

pub fn load_messages(locale: Locale) -> Result<Messages, ContentError> {
    let name = format!("{}.json", locale.code());
    let file = Bundles::get(&name).ok_or(ContentError::MissingBundle(locale.code()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        locale: locale.code(),
        reason: e.to_string(),
    })
}

/// Merges project texts with the asset table by `(category id, index)`.
///
/// With `strict`, any difference between the number of texts and asset entries in a
/// category is an error. Otherwise projects without an asset entry render with the
/// placeholder image and surplus asset entries are dropped.
pub fn join_projects(
    texts: Vec<CategoryText>,
    table: &AssetTable,
    strict: bool,
) -> Result<Vec<Category>, ContentError> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(texts.len());
    for category in texts {
        if !seen.insert(category.id.clone()) {
            if strict {
                return Err(ContentError::DuplicateCategory(category.id));
            }
            log::warn!("duplicate project category '{}'", category.id);
        }

        let assets = assets_for(table, &category.id).unwrap_or_default();
        if assets.len() != category.projects.len() {
            let err = ContentError::AssetMismatch {
                category: category.id.clone(),
                texts: category.projects.len(),
                assets: assets.len(),
            };
            if strict {
                return Err(err);
            }
            log::warn!("{err}");
        }

        let projects = category
            .projects
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let asset = assets.get(i);
                Project {
                    title: text.title,
                    description: text.description,
                    features: text.features,
                    tech: text.tech,
                    image: asset.and_then(|a| a.image).map(str::to_string),
                    images: asset
                        .map(|a| a.images.iter().map(|s| s.to_string()).collect())
                        .unwrap_or_default(),
                    link: asset.and_then(|a| a.link).map(str::to_string),
                }
            })
            .collect();

        categories.push(Category {
            id: category.id,
            label: category.label,
            projects,
        });
    }
    Ok(categories)
}

fn build_site_content(locale: Locale, strict: bool) -> Result<SiteContent, ContentError> {
    let messages = load_messages(locale)?;
    let categories = join_projects(messages.projects.categories, PROJECT_ASSETS, strict)?;
    Ok(SiteContent {
        locale,
        meta: messages.meta,
        nav: messages.nav,
        hero: messages.hero,
        services: messages.services,
        projects: messages.projects.copy,
        categories: Arc::new(categories),
        experience: messages.experience,
        skills: messages.skills,
        education: messages.education,
        contact: messages.contact,
        footer: messages.footer,
    })
}

/// Content for `locale`, built once and then served from the cache. Debug builds
/// reject bundles that drifted from the asset table.
pub fn site_content(locale: Locale) -> Result<Arc<SiteContent>, ContentError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    if let Some(content) = cache.get(&locale) {
        return Ok(content.clone());
    }
    let content = Arc::new(build_site_content(locale, cfg!(debug_assertions))?);
    cache.insert(locale, content.clone());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{
        category_href, resolve_gallery_images, resolve_preview_image, GalleryState,
        PLACEHOLDER_IMAGE,
    };

    fn text(id: &str, titles: &[&str]) -> CategoryText {
        CategoryText {
            id: id.to_string(),
            label: id.to_uppercase(),
            projects: titles
                .iter()
                .map(|t| ProjectText {
                    title: t.to_string(),
                    description: String::new(),
                    features: vec![],
                    tech: vec![],
                })
                .collect(),
        }
    }

    static TEST_TABLE: &AssetTable = &[
        (
            "alpha",
            &[
                ProjectAsset {
                    images: &["/a1.png", "/a2.png"],
                    image: None,
                    link: Some("https://example.com"),
                },
                ProjectAsset {
                    images: &[],
                    image: Some("/b.png"),
                    link: None,
                },
            ],
        ),
        ("beta", &[]),
    ];

    #[test]
    fn test_locale_paths() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().home_path(), "/");
        for locale in Locale::ALL.into_iter().filter(|l| *l != Locale::default()) {
            assert_eq!(locale.home_path(), format!("/{}", locale.code()));
        }
    }

    #[test]
    fn test_every_bundle_loads() {
        for locale in Locale::ALL {
            let content = build_site_content(locale, true)
                .unwrap_or_else(|e| panic!("bundle {} should load: {e}", locale.code()));
            assert_eq!(content.locale, locale);
            assert!(!content.categories.is_empty());
        }
    }

    #[test]
    fn test_bundles_share_category_ids() {
        let ids = |locale| {
            build_site_content(locale, true)
                .expect("bundle should load")
                .categories
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>()
        };
        let expected = PROJECT_ASSETS
            .iter()
            .map(|(id, _)| id.to_string())
            .collect::<Vec<_>>();
        for locale in Locale::ALL {
            assert_eq!(ids(locale), expected);
        }
    }

    #[test]
    fn test_service_anchors_point_at_categories() {
        for locale in Locale::ALL {
            let content = build_site_content(locale, true).expect("bundle should load");
            for service in &content.services.items {
                assert!(
                    content
                        .categories
                        .iter()
                        .any(|c| c.id == service.project_anchor),
                    "{}: unknown anchor {}",
                    locale.code(),
                    service.project_anchor
                );
            }
        }
    }

    #[test]
    fn test_service_links_select_their_tab() {
        for locale in Locale::ALL {
            let content = build_site_content(locale, true).expect("bundle should load");
            for service in &content.services.items {
                let mut gallery = GalleryState::new(content.categories.clone(), None);
                // the router reports the fragment of a clicked in-page link as the location hash
                gallery.on_hash_change(&category_href(&service.project_anchor));
                assert_eq!(
                    gallery.active_category_id(),
                    service.project_anchor,
                    "{}",
                    locale.code()
                );
            }
        }
    }

    #[test]
    fn test_site_content_is_cached() {
        let first = site_content(Locale::Ja).expect("bundle should load");
        let second = site_content(Locale::Ja).expect("bundle should load");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_join_merges_by_position() {
        let categories =
            join_projects(vec![text("alpha", &["One", "Two"])], TEST_TABLE, true).unwrap();
        let projects = &categories[0].projects;
        assert_eq!(projects[0].images, vec!["/a1.png", "/a2.png"]);
        assert_eq!(projects[0].link.as_deref(), Some("https://example.com"));
        assert_eq!(projects[1].image.as_deref(), Some("/b.png"));
        assert!(projects[1].images.is_empty());
        assert_eq!(resolve_preview_image(&projects[1]), "/b.png");
    }

    #[test]
    fn test_strict_join_rejects_mismatch() {
        let err = join_projects(vec![text("alpha", &["One", "Two", "Three"])], TEST_TABLE, true)
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::AssetMismatch {
                category: "alpha".to_string(),
                texts: 3,
                assets: 2,
            }
        );

        let err = join_projects(vec![text("gamma", &["Orphan"])], TEST_TABLE, true).unwrap_err();
        assert!(matches!(err, ContentError::AssetMismatch { assets: 0, .. }));
    }

    #[test]
    fn test_strict_join_rejects_duplicates() {
        let err = join_projects(
            vec![text("beta", &[]), text("beta", &[])],
            TEST_TABLE,
            true,
        )
        .unwrap_err();
        assert_eq!(err, ContentError::DuplicateCategory("beta".to_string()));
    }

    #[test]
    fn test_lenient_join_degrades() {
        let categories = join_projects(
            vec![text("alpha", &["One", "Two", "Three"]), text("gamma", &["Orphan"])],
            TEST_TABLE,
            false,
        )
        .unwrap();

        let extra = &categories[0].projects[2];
        assert_eq!(extra.title, "Three");
        assert!(extra.image.is_none() && extra.link.is_none());
        assert_eq!(resolve_gallery_images(extra), None);
        assert_eq!(resolve_preview_image(extra), PLACEHOLDER_IMAGE);

        let orphan = &categories[1].projects[0];
        assert_eq!(resolve_preview_image(orphan), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_lenient_join_drops_surplus_assets() {
        let categories = join_projects(vec![text("alpha", &["One"])], TEST_TABLE, false).unwrap();
        assert_eq!(categories[0].projects.len(), 1);
        assert_eq!(categories[0].projects[0].images.len(), 2);
    }

    #[test]
    fn test_join_preserves_order() {
        let categories = join_projects(
            vec![text("beta", &[]), text("alpha", &["One", "Two"])],
            TEST_TABLE,
            true,
        )
        .unwrap();
        let ids = categories.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["beta", "alpha"]);
        assert_eq!(categories[1].projects[1].title, "Two");
    }
}
