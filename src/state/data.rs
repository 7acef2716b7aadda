/// Shared data structures for the application state
///
/// These structs represent the catalog data model that flows between
/// the seed loader, the course store and the UI layer.
use serde::{Deserialize, Serialize};

/// Unique identifier of a course within a catalog
pub type CourseId = i64;

/// Represents a single course in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique catalog ID
    pub id: CourseId,
    /// Course title (e.g., "Intro to Testing")
    pub title: String,
    /// Display name of the instructor
    pub instructor: String,
    /// Long-form description shown in the detail panel
    pub description: String,
    /// Display string, e.g. "6 hours"
    pub duration: String,
    /// Number of lessons
    pub lessons: u32,
    /// Display string, e.g. "Beginner"
    pub level: String,
    /// Image reference (local path or URL)
    pub image: String,
    pub category: String,
    /// Absent in the source data means not completed
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
pub(crate) fn sample_course(id: CourseId, title: &str, category: &str, instructor: &str) -> Course {
    Course {
        id,
        title: title.to_string(),
        instructor: instructor.to_string(),
        description: format!("Everything about {}", title),
        duration: "4 hours".to_string(),
        lessons: 12,
        level: "Beginner".to_string(),
        image: String::new(),
        category: category.to_string(),
        completed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let json = r#"{
            "id": 7,
            "title": "Rust Basics",
            "instructor": "Ferris",
            "description": "Ownership and borrowing",
            "duration": "5 hours",
            "lessons": 20,
            "level": "Beginner",
            "image": "rust.png",
            "category": "Programming"
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, 7);
        assert!(!course.completed);
    }

    #[test]
    fn test_explicit_completed_is_kept() {
        let json = r#"{
            "id": 1, "title": "t", "instructor": "i", "description": "d",
            "duration": "1 hour", "lessons": 1, "level": "l", "image": "",
            "category": "c", "completed": true
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.completed);
    }
}
