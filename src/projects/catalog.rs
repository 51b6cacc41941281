//! Project listings and the built-in catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Fullstack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Fullstack => "Full Stack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(alias = "image")]
    pub image_ref: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    pub live_link: String,
    pub github_link: String,
}

/// Category filter with the `all` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Frontend),
        CategoryFilter::Only(Category::Backend),
        CategoryFilter::Only(Category::Fullstack),
    ];

    pub fn matches(&self, project: &ProjectListing) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::CHOICES
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Unknown category: {} (expected all, frontend, backend or fullstack)",
                    s
                )
            })
    }
}

/// Catalog file errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse catalog {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Load listings from a JSON array file
pub fn load_catalog(path: &Path) -> Result<Vec<ProjectListing>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400";
const LIVE_LINK: &str = "https://example.com";
const GITHUB_LINK: &str = "https://github.com";

fn listing(
    id: u32,
    title: &str,
    description: &str,
    tags: &[&str],
    category: Category,
) -> ProjectListing {
    ProjectListing {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image_ref: PLACEHOLDER_IMAGE.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
        live_link: LIVE_LINK.to_string(),
        github_link: GITHUB_LINK.to_string(),
    }
}

/// The six showcase projects served when no catalog file is given
pub fn default_catalog() -> Vec<ProjectListing> {
    vec![
        listing(
            1,
            "E-Commerce Platform",
            "A full-featured e-commerce platform with payment integration, user authentication, and admin dashboard.",
            &["React", "Node.js", "MongoDB", "Express", "Stripe"],
            Category::Fullstack,
        ),
        listing(
            2,
            "Social Media Dashboard",
            "Analytics dashboard for social media performance tracking with real-time data visualization.",
            &["React", "Chart.js", "Node.js", "Express"],
            Category::Frontend,
        ),
        listing(
            3,
            "Task Management App",
            "A collaborative task management application with real-time updates and team collaboration features.",
            &["React", "Socket.io", "Node.js", "MongoDB"],
            Category::Fullstack,
        ),
        listing(
            4,
            "Weather Forecast App",
            "A weather forecast application with location-based weather data and 7-day forecast.",
            &["React", "API Integration", "Geolocation"],
            Category::Frontend,
        ),
        listing(
            5,
            "Blog CMS",
            "A content management system for blogs with markdown support and image uploads.",
            &["Node.js", "Express", "MongoDB", "RESTful API"],
            Category::Backend,
        ),
        listing(
            6,
            "Real Estate Listing Platform",
            "A platform for real estate listings with search, filtering, and user accounts.",
            &["React", "Node.js", "PostgreSQL", "Express"],
            Category::Fullstack,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog[0].tags[4], "Stripe");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "FullStack".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Fullstack)
        );
        assert!("mobile".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Only(Category::Fullstack).label(), "Full Stack");
    }

    #[test]
    fn test_listing_json_accepts_image_alias() {
        let json = r#"[{
            "id": 9,
            "title": "CLI",
            "description": "A tool",
            "image": "cli.png",
            "tags": ["Rust"],
            "category": "backend",
            "liveLink": "https://example.com/cli",
            "githubLink": "https://github.com/example/cli"
        }]"#;
        let parsed: Vec<ProjectListing> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].image_ref, "cli.png");
        assert_eq!(parsed[0].category, Category::Backend);
    }

    #[test]
    fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = serde_json::to_string(&default_catalog()).unwrap();
        file.write_all(body.as_bytes()).unwrap();

        let loaded = load_catalog(file.path()).unwrap();
        assert_eq!(loaded, default_catalog());
    }

    #[test]
    fn test_load_catalog_errors() {
        let missing = load_catalog(Path::new("/nonexistent/folio/catalog.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(load_catalog(file.path()), Err(CatalogError::Parse { .. })));
    }
}
