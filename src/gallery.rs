use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shown when a project has no image data at all.
pub static PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Prefix of the URL fragment that addresses a gallery tab, e.g. `#projects-saas`.
pub static FRAGMENT_PREFIX: &str = "projects-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub projects: Vec<Project>,
}

/// First image of the carousel if there is one, then the single image, then the placeholder.
pub fn resolve_preview_image(project: &Project) -> &str {
    project
        .images
        .first()
        .or(project.image.as_ref())
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// `None` means the project is shown with a single image instead of a carousel.
pub fn resolve_gallery_images(project: &Project) -> Option<&[String]> {
    if project.images.is_empty() {
        None
    } else {
        Some(&project.images)
    }
}

/// Extracts the category id from `#projects-<id>` (the leading `#` is optional).
pub fn category_id_from_fragment(fragment: &str) -> Option<&str> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    fragment
        .strip_prefix(FRAGMENT_PREFIX)
        .filter(|id| !id.is_empty())
}

pub fn fragment_for_category(id: &str) -> String {
    format!("{FRAGMENT_PREFIX}{id}")
}

/// In-page link to a gallery tab, e.g. `#projects-saas`.
pub fn category_href(id: &str) -> String {
    format!("#{}", fragment_for_category(id))
}

/// UI state of the project gallery: which tab is active and which project is
/// open in the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    categories: Arc<Vec<Category>>,
    active_category_id: String,
    selected_project: Option<Project>,
}

impl GalleryState {
    /// Starts on the first category unless `fragment` names a known one.
    pub fn new(categories: Arc<Vec<Category>>, fragment: Option<&str>) -> Self {
        let active_category_id = categories
            .first()
            .map(|c| c.id.clone())
            .unwrap_or_default();
        let mut state = Self {
            categories,
            active_category_id,
            selected_project: None,
        };
        if let Some(fragment) = fragment {
            state.on_hash_change(fragment);
        }
        state
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_category_id(&self) -> &str {
        &self.active_category_id
    }

    pub fn is_known_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.id == self.active_category_id)
            .or_else(|| self.categories.first())
    }

    pub fn displayed_projects(&self) -> &[Project] {
        self.active_category()
            .map(|c| c.projects.as_slice())
            .unwrap_or_default()
    }

    /// Returns whether the selection changed. Unknown ids are ignored.
    pub fn select_category(&mut self, id: &str) -> bool {
        if !self.is_known_category(id) {
            log::debug!("ignoring unknown project category '{id}'");
            return false;
        }
        if self.active_category_id == id {
            return false;
        }
        self.active_category_id = id.to_string();
        true
    }

    pub fn on_hash_change(&mut self, fragment: &str) -> bool {
        match category_id_from_fragment(fragment) {
            Some(id) => self.select_category(id),
            None => false,
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected_project.is_some()
    }

    pub fn open_project(&mut self, project: Project) {
        self.selected_project = Some(project);
    }

    pub fn close_project(&mut self) {
        self.selected_project = None;
    }
}

/// Position inside a looping image carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselCursor {
    len: usize,
    index: usize,
}

impl CarouselCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{title} description"),
            features: vec![],
            tech: vec!["Rust".to_string()],
            image: None,
            images: vec![],
            link: None,
        }
    }

    fn categories() -> Arc<Vec<Category>> {
        Arc::new(vec![
            Category {
                id: "poc-mvp".to_string(),
                label: "POC / MVP".to_string(),
                projects: vec![project("Agent Smith"), project("Night Club")],
            },
            Category {
                id: "saas".to_string(),
                label: "SaaS".to_string(),
                projects: vec![project("Hollynest"), project("Paperclue"), project("Suisei")],
            },
            Category {
                id: "devops".to_string(),
                label: "DevOps".to_string(),
                projects: vec![project("AWS Terraform Automation")],
            },
        ])
    }

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_initial_category_is_first() {
        let state = GalleryState::new(categories(), None);
        assert_eq!(state.active_category_id(), "poc-mvp");
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn test_initial_category_from_fragment() {
        let state = GalleryState::new(categories(), Some("#projects-saas"));
        assert_eq!(state.active_category_id(), "saas");
        assert_eq!(
            titles(state.displayed_projects()),
            vec!["Hollynest", "Paperclue", "Suisei"]
        );
    }

    #[test]
    fn test_initial_unknown_fragment_falls_back() {
        let state = GalleryState::new(categories(), Some("#projects-unknown"));
        assert_eq!(state.active_category_id(), "poc-mvp");

        let state = GalleryState::new(categories(), Some("#contact"));
        assert_eq!(state.active_category_id(), "poc-mvp");

        let state = GalleryState::new(categories(), Some(""));
        assert_eq!(state.active_category_id(), "poc-mvp");
    }

    #[test]
    fn test_select_known_category() {
        let cats = categories();
        let mut state = GalleryState::new(cats.clone(), None);
        for category in cats.iter() {
            state.select_category(&category.id);
            assert_eq!(state.active_category_id(), category.id);
            assert_eq!(state.displayed_projects(), category.projects.as_slice());
        }
    }

    #[test]
    fn test_select_unknown_category_is_ignored() {
        let mut state = GalleryState::new(categories(), None);
        state.select_category("saas");
        for id in ["", "SaaS", "unknown", "projects-saas"] {
            assert!(!state.select_category(id));
            assert_eq!(state.active_category_id(), "saas");
        }
    }

    #[test]
    fn test_select_reports_change() {
        let mut state = GalleryState::new(categories(), None);
        assert!(!state.select_category("poc-mvp"));
        assert!(state.select_category("devops"));
        assert!(!state.select_category("devops"));
    }

    #[test]
    fn test_hash_change() {
        let mut state = GalleryState::new(categories(), None);
        assert!(state.on_hash_change("#projects-devops"));
        assert_eq!(state.active_category_id(), "devops");

        // without the leading '#'
        assert!(state.on_hash_change("projects-saas"));
        assert_eq!(state.active_category_id(), "saas");

        assert!(!state.on_hash_change("#projects-nope"));
        assert!(!state.on_hash_change("#skills"));
        assert!(!state.on_hash_change("#projects-"));
        assert_eq!(state.active_category_id(), "saas");
    }

    #[test]
    fn test_hash_change_keeps_open_project() {
        let cats = categories();
        let mut state = GalleryState::new(cats.clone(), None);
        state.open_project(cats[0].projects[0].clone());
        state.on_hash_change("#projects-saas");
        assert_eq!(state.selected_project(), Some(&cats[0].projects[0]));
    }

    #[test]
    fn test_open_then_close_restores_initial_state() {
        let cats = categories();
        let initial = GalleryState::new(cats.clone(), None);
        let mut state = initial.clone();
        state.open_project(cats[1].projects[2].clone());
        assert!(state.is_open());
        state.close_project();
        assert!(!state.is_open());
        assert_eq!(state, initial);
    }

    #[test]
    fn test_open_while_open_replaces_payload() {
        let cats = categories();
        let mut state = GalleryState::new(cats.clone(), None);
        state.open_project(cats[0].projects[0].clone());
        state.open_project(cats[0].projects[1].clone());
        assert_eq!(state.selected_project(), Some(&cats[0].projects[1]));
        state.close_project();
        state.close_project();
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn test_empty_gallery() {
        let mut state = GalleryState::new(Arc::new(vec![]), Some("#projects-saas"));
        assert_eq!(state.active_category_id(), "");
        assert!(state.active_category().is_none());
        assert!(state.displayed_projects().is_empty());
        assert!(!state.select_category("saas"));
    }

    #[test]
    fn test_resolve_images_with_carousel() {
        let mut p = project("Klook");
        p.images = vec!["a.png".into(), "b.png".into(), "c.png".into()];
        p.image = Some("ignored.png".into());
        assert_eq!(
            resolve_gallery_images(&p),
            Some(&["a.png".to_string(), "b.png".to_string(), "c.png".to_string()][..])
        );
        assert_eq!(resolve_preview_image(&p), "a.png");
    }

    #[test]
    fn test_resolve_images_single() {
        let mut p = project("Time Series Forecasting");
        p.image = Some("x.png".into());
        assert_eq!(resolve_gallery_images(&p), None);
        assert_eq!(resolve_preview_image(&p), "x.png");
    }

    #[test]
    fn test_resolve_images_placeholder() {
        let p = project("AI Chatbot Platform");
        assert_eq!(resolve_gallery_images(&p), None);
        assert_eq!(resolve_preview_image(&p), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_fragment_parsing() {
        assert_eq!(category_id_from_fragment("#projects-web-mobile"), Some("web-mobile"));
        assert_eq!(category_id_from_fragment("#services"), None);
        assert_eq!(category_id_from_fragment("#"), None);
        assert_eq!(fragment_for_category("ml-solutions"), "projects-ml-solutions");
        assert_eq!(category_href("saas"), "#projects-saas");
        assert_eq!(category_id_from_fragment(&category_href("devops")), Some("devops"));
    }

    #[test]
    fn test_carousel_wraps() {
        let mut cursor = CarouselCursor::new(3);
        assert!(cursor.has_controls());
        cursor.prev();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_carousel_degenerate() {
        let mut single = CarouselCursor::new(1);
        assert!(!single.has_controls());
        single.next();
        single.prev();
        assert_eq!(single.index(), 0);

        let mut empty = CarouselCursor::new(0);
        assert!(empty.is_empty());
        empty.next();
        empty.prev();
        empty.go_to(3);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn test_carousel_go_to() {
        let mut cursor = CarouselCursor::new(4);
        cursor.go_to(3);
        assert_eq!(cursor.index(), 3);
        cursor.go_to(4);
        assert_eq!(cursor.index(), 3);
    }
}
