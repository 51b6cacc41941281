//! Project Gallery
//!
//! The project list is loaded once and never mutated; category filtering
//! derives a view over it.

mod catalog;

pub use catalog::{
    default_catalog, load_catalog, CatalogError, Category, CategoryFilter, ProjectListing,
};

use std::time::Duration;

/// Simulated fetch delay used by the site before the catalog appears
pub const PROJECT_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Stable subsequence of `projects` matching `filter`
pub fn filter_projects<'a>(
    projects: &'a [ProjectListing],
    filter: CategoryFilter,
) -> Vec<&'a ProjectListing> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Loading,
    Loaded {
        projects: Vec<ProjectListing>,
        filter: CategoryFilter,
    },
}

/// Projects page state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectGallery {
    state: GalleryState,
    pending_filter: CategoryFilter,
}

impl ProjectGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, GalleryState::Loading)
    }

    /// Accept the list from the collaborator; later loads are ignored
    pub fn load(&mut self, projects: Vec<ProjectListing>) {
        if !self.is_loading() {
            tracing::debug!("Project list already loaded, ignoring reload");
            return;
        }
        tracing::debug!(count = projects.len(), "Projects loaded");
        self.state = GalleryState::Loaded {
            projects,
            filter: self.pending_filter,
        };
    }

    pub fn active_filter(&self) -> CategoryFilter {
        match &self.state {
            GalleryState::Loading => self.pending_filter,
            GalleryState::Loaded { filter, .. } => *filter,
        }
    }

    /// Switch category and return the derived view
    pub fn set_filter(&mut self, category: CategoryFilter) -> Vec<&ProjectListing> {
        match &mut self.state {
            GalleryState::Loading => self.pending_filter = category,
            GalleryState::Loaded { filter, .. } => *filter = category,
        }
        self.visible()
    }

    /// Projects shown under the active filter; empty while loading
    pub fn visible(&self) -> Vec<&ProjectListing> {
        match &self.state {
            GalleryState::Loading => Vec::new(),
            GalleryState::Loaded { projects, filter } => filter_projects(projects, *filter),
        }
    }

    /// Loaded, but nothing matches the filter
    pub fn is_empty_view(&self) -> bool {
        !self.is_loading() && self.visible().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(view: &[&ProjectListing]) -> Vec<u32> {
        view.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let catalog = default_catalog();
        let view = filter_projects(&catalog, CategoryFilter::All);
        assert_eq!(view.len(), catalog.len());
        assert!(view.iter().zip(&catalog).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_category_is_ordered_subsequence() {
        let catalog = default_catalog();
        for category in Category::ALL {
            let view = filter_projects(&catalog, CategoryFilter::Only(category));
            assert!(view.iter().all(|p| p.category == category));

            let expected: Vec<u32> = catalog
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&view), expected);
        }

        let fullstack = filter_projects(&catalog, CategoryFilter::Only(Category::Fullstack));
        assert_eq!(ids(&fullstack), vec![1, 3, 6]);
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let catalog = default_catalog();
        let before = catalog.clone();
        let _ = filter_projects(&catalog, CategoryFilter::Only(Category::Backend));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_gallery_lifecycle() {
        let mut gallery = ProjectGallery::new();
        assert!(gallery.is_loading());
        assert!(gallery.visible().is_empty());
        assert!(!gallery.is_empty_view());

        gallery.load(default_catalog());
        assert_eq!(gallery.visible().len(), 6);

        let backend = gallery.set_filter(CategoryFilter::Only(Category::Backend));
        assert_eq!(ids(&backend), vec![5]);
        assert_eq!(gallery.active_filter(), CategoryFilter::Only(Category::Backend));

        assert_eq!(ids(&gallery.set_filter(CategoryFilter::All)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_chosen_while_loading_applies_after_load() {
        let mut gallery = ProjectGallery::new();
        gallery.set_filter(CategoryFilter::Only(Category::Frontend));
        gallery.load(default_catalog());
        assert_eq!(ids(&gallery.visible()), vec![2, 4]);
    }

    #[test]
    fn test_list_loaded_once() {
        let mut gallery = ProjectGallery::new();
        gallery.load(default_catalog());
        gallery.load(Vec::new());
        assert_eq!(gallery.visible().len(), 6);
    }

    #[test]
    fn test_empty_view() {
        let mut gallery = ProjectGallery::new();
        gallery.load(default_catalog().into_iter().filter(|p| p.id != 5).collect());
        gallery.set_filter(CategoryFilter::Only(Category::Backend));
        assert!(gallery.is_empty_view());
    }
}
