use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static GLOBAL_LANDING_CACHE: LazyLock<DashMap<String, Option<LandingPage>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github: String,
    pub demo: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPage {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: bool,
    pub keywords: String,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Page not found")]
    NotFound,
    #[error("Couldn't parse site content")]
    ParseError,
}

/// Slugs linked from the footer so crawlers can reach the landing pages.
pub const FEATURED_LANDING_SLUGS: [(&str, &str); 5] = [
    ("software-developer-midrand", "Software Developer in Midrand"),
    ("software-developer-johannesburg", "Software Developer in Johannesburg"),
    ("software-developer-gauteng", "Software Developer in Gauteng"),
    ("software-developer-zimbabwe", "Software Developer in Zimbabwe"),
    ("remote-software-developer", "Remote Software Developer"),
];

/// Catalog key for a landing URL. `best-software-developer-<loc>` and
/// `software-developer-<loc>` resolve by location; every other slug is an
/// exact key (the remote and role-based pages).
pub fn landing_key(slug: &str) -> &str {
    slug.strip_prefix("best-software-developer-")
        .or_else(|| slug.strip_prefix("software-developer-"))
        .unwrap_or(slug)
}

#[cfg(feature = "ssr")]
fn read_asset(path: &str) -> Result<String, ContentError> {
    let file = Assets::get(path).ok_or(ContentError::NotFound)?;
    String::from_utf8(file.data.into()).map_err(|_| ContentError::ParseError)
}

#[cfg(feature = "ssr")]
pub async fn get_landing(slug: String) -> Option<LandingPage> {
    let key = landing_key(&slug).to_string();
    let cache = &*GLOBAL_LANDING_CACHE;
    if let Some(hit) = cache.get(&key) {
        return (*hit).clone();
    }
    let page = read_asset("locations.json")
        .ok()
        .and_then(|raw| {
            serde_json::from_str::<std::collections::HashMap<String, LandingPage>>(&raw).ok()
        })
        .and_then(|mut catalog| catalog.remove(&key));
    cache.insert(key, page.clone());
    page
}

#[cfg(feature = "ssr")]
pub async fn get_projects() -> Option<Vec<Project>> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(hit) = cache.get("") {
        return Some((*hit).clone());
    }
    let projects: Vec<Project> = serde_json::from_str(&read_asset("projects.json").ok()?).ok()?;
    cache.insert(String::new(), projects.clone());
    Some(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_slugs_resolve_by_location() {
        assert_eq!(landing_key("software-developer-midrand"), "midrand");
        assert_eq!(landing_key("best-software-developer-midrand"), "midrand");
        assert_eq!(landing_key("software-developer-gauteng"), "gauteng");
    }

    #[test]
    fn test_remote_and_role_slugs_resolve_exactly() {
        assert_eq!(
            landing_key("remote-software-developer"),
            "remote-software-developer"
        );
        assert_eq!(
            landing_key("hire-remote-fullstack-developer"),
            "hire-remote-fullstack-developer"
        );
        assert_eq!(
            landing_key("data-scientist-south-africa"),
            "data-scientist-south-africa"
        );
    }

    #[test]
    fn test_featured_slugs_point_at_known_keys() {
        let known = [
            "midrand",
            "johannesburg",
            "gauteng",
            "zimbabwe",
            "remote-software-developer",
        ];
        for (slug, _) in FEATURED_LANDING_SLUGS {
            assert!(known.contains(&landing_key(slug)));
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod catalog_tests {
    use super::*;

    #[test]
    fn test_embedded_location_catalog_parses() {
        let raw = read_asset("locations.json").ok();
        assert!(raw.is_some());
        let catalog: std::collections::HashMap<String, LandingPage> =
            serde_json::from_str(raw.as_deref().unwrap_or_default()).unwrap();
        for key in ["midrand", "johannesburg", "zimbabwe", "gauteng"] {
            assert!(catalog.contains_key(key), "missing location page {key}");
        }
        let remote = &catalog["remote-software-developer"];
        assert!(remote.remote);
        assert!(remote.location.is_none());
    }

    #[test]
    fn test_embedded_project_catalog_parses() {
        let raw = read_asset("projects.json").ok();
        assert!(raw.is_some());
        let projects: Vec<Project> =
            serde_json::from_str(raw.as_deref().unwrap_or_default()).unwrap();
        assert!(!projects.is_empty());
        for project in &projects {
            assert!(!project.title.is_empty());
            assert!(!project.tags.is_empty());
        }
    }
}
