use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub name: String,
}

impl Project {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Lookup over the work items the terminal can list and open.
pub trait ProjectCatalog {
    fn find_by_slug(&self, slug: &str) -> Option<&Project>;
    fn list_all(&self) -> &[Project];
}

#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    projects: Vec<Project>,
}

impl StaticCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            Project::new("loom-studio", "Loom Studio"),
            Project::new("pixel-garden", "Pixel Garden"),
            Project::new("harbor-analytics", "Harbor Analytics"),
        ])
    }
}

impl ProjectCatalog for StaticCatalog {
    fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    fn list_all(&self) -> &[Project] {
        &self.projects
    }
}

/// Reads a JSON array of `{ "slug", "name" }` records, keeping file order.
pub fn load_catalog(path: &Path) -> Result<StaticCatalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read project catalog {}", path.display()))?;
    let projects: Vec<Project> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid project catalog {}", path.display()))?;
    tracing::info!(count = projects.len(), "loaded project catalog from {}", path.display());
    Ok(StaticCatalog::new(projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn finds_projects_by_exact_slug() {
        let catalog = StaticCatalog::sample();
        assert_eq!(
            catalog.find_by_slug("pixel-garden").map(|p| p.name.as_str()),
            Some("Pixel Garden")
        );
        assert!(catalog.find_by_slug("Pixel-Garden").is_none());
    }

    #[test]
    fn loads_catalog_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"slug":"b","name":"Bee"}},{{"slug":"a","name":"Ay"}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(
            catalog.list_all(),
            &[Project::new("b", "Bee"), Project::new("a", "Ay")]
        );
    }

    #[test]
    fn rejects_malformed_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid project catalog"));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog(&dir.path().join("missing.json")).is_err());
    }
}
