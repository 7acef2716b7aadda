/// Course catalog provisioning
///
/// The built-in catalog is compiled into the binary. A JSON file with the
/// same shape (an array of courses) can replace it at startup through the
/// config file, or at runtime through "Open Catalog…".
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::data::Course;
use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../../assets/courses.json");

/// The catalog shipped with the application
pub fn builtin() -> Result<Catalog, CatalogError> {
    parse(BUILTIN_CATALOG)
}

/// Parse a JSON array of courses into a catalog
pub fn parse(json: &str) -> Result<Catalog, CatalogError> {
    let courses: Vec<Course> = serde_json::from_str(json)?;
    Catalog::new(courses)
}

/// Load a catalog file from disk.
///
/// Relative local image paths are resolved against the catalog file's
/// directory so the grid can find them regardless of the working directory.
pub async fn load_from_path(path: PathBuf) -> Result<Catalog, CatalogError> {
    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;

    let mut courses: Vec<Course> = serde_json::from_str(&json)?;
    if let Some(base) = path.parent() {
        for course in &mut courses {
            course.image = resolve_image(base, &course.image);
        }
    }

    let catalog = Catalog::new(courses)?;
    tracing::debug!("parsed {} courses from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn resolve_image(base: &Path, image: &str) -> String {
    if image.is_empty() || image.contains("://") || Path::new(image).is_absolute() {
        return image.to_string();
    }

    base.join(image).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("learnhub-seed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.completed_count(), 0);

        let found = crate::state::search::filter(catalog.courses(), "testing");
        assert!(found.iter().any(|c| c.title == "Intro to Testing"));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "title": "a", "instructor": "i", "description": "d", "duration": "1h",
             "lessons": 1, "level": "l", "image": "", "category": "c"},
            {"id": 1, "title": "b", "instructor": "i", "description": "d", "duration": "1h",
             "lessons": 1, "level": "l", "image": "", "category": "c"}
        ]"#;

        assert!(matches!(parse(json), Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_resolve_image() {
        let base = Path::new("/data/catalog");
        assert_eq!(resolve_image(base, ""), "");
        assert_eq!(
            resolve_image(base, "https://example.com/a.png"),
            "https://example.com/a.png"
        );
        assert_eq!(
            resolve_image(base, "img/a.png"),
            Path::new("/data/catalog/img/a.png").to_string_lossy()
        );
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let path = temp_file(
            "courses.json",
            r#"[{"id": 9, "title": "Local", "instructor": "i", "description": "d",
                 "duration": "2 hours", "lessons": 3, "level": "Beginner",
                 "image": "cover.png", "category": "Misc", "completed": true}]"#,
        );

        let catalog = load_from_path(path.clone()).await.unwrap();
        assert_eq!(catalog.len(), 1);

        let course = catalog.get(9).unwrap();
        assert!(course.completed);
        let dir = path.parent().unwrap();
        assert_eq!(course.image, dir.join("cover.png").to_string_lossy());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let path = std::env::temp_dir().join("learnhub-does-not-exist.json");
        let err = load_from_path(path).await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
