use std::collections::HashSet;

use super::data::{Course, CourseId};
use crate::error::CatalogError;

/// New completion state of a course after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Completed,
    Reopened,
}

impl Completion {
    /// User-facing notification text for this transition
    pub fn message(self) -> &'static str {
        match self {
            Completion::Completed => "Congratulations! Course completed! 🎉",
            Completion::Reopened => "Course marked as incomplete",
        }
    }
}

/// The Catalog is the in-memory course store.
///
/// Courses keep their insertion order for the lifetime of the catalog.
/// The only mutation is [`Catalog::toggle_completion`], which replaces a
/// single course's flag in place.
#[derive(Clone, Default, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog from an ordered list of courses.
    ///
    /// Fails if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !seen.insert(course.id) {
                return Err(CatalogError::DuplicateId(course.id));
            }
        }

        Ok(Catalog { courses })
    }

    /// All courses in insertion order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn contains(&self, id: CourseId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.courses.iter().filter(|course| course.completed).count()
    }

    /// Courses not yet completed
    pub fn in_progress_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Flip the completion flag of the course with `id`.
    ///
    /// Returns the new state, or `NotFound` without touching the
    /// collection when no course has that id.
    pub fn toggle_completion(&mut self, id: CourseId) -> Result<Completion, CatalogError> {
        let course = self
            .courses
            .iter_mut()
            .find(|course| course.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        course.completed = !course.completed;

        Ok(if course.completed {
            Completion::Completed
        } else {
            Completion::Reopened
        })
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("courses", &self.courses.len())
            .field("completed", &self.completed_count())
            .finish()
    }
}
