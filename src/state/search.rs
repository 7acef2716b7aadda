/// Search filtering over the course catalog
use super::data::Course;

/// The text currently typed into the search box.
/// An empty query means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn set(&mut self, text: String) {
        self.0 = text;
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Return the courses matching `query`, in catalog order.
///
/// A course matches when the lower-cased query is a substring of its
/// lower-cased title, category or instructor. The empty query matches
/// everything.
pub fn filter<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    if query.is_empty() {
        return courses.iter().collect();
    }

    let needle = query.to_lowercase();
    courses
        .iter()
        .filter(|course| matches(course, &needle))
        .collect()
}

/// `needle` must already be lower-cased
fn matches(course: &Course, needle: &str) -> bool {
    [&course.title, &course.category, &course.instructor]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::sample_course;

    fn courses() -> Vec<Course> {
        vec![
            sample_course(1, "Intro to Testing", "Quality", "Ada Lovelace"),
            sample_course(2, "React Fundamentals", "Web Development", "Dan Abramov"),
            sample_course(3, "Advanced React Patterns", "Web Development", "Kent Dodds"),
            sample_course(4, "Rust for Systems", "Programming", "Ferris Crab"),
        ]
    }

    fn ids(found: &[&Course]) -> Vec<i64> {
        found.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = courses();
        assert_eq!(ids(&filter(&all, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_case_insensitive() {
        let all = courses();
        assert_eq!(filter(&all, "REACT"), filter(&all, "react"));
        assert_eq!(ids(&filter(&all, "ReAcT")), vec![2, 3]);
    }

    #[test]
    fn test_title_match() {
        let all = courses();
        assert_eq!(ids(&filter(&all, "testing")), vec![1]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = courses();
        assert!(filter(&all, "zzz-nomatch").is_empty());
    }

    #[test]
    fn test_matches_category_and_instructor() {
        let all = courses();
        assert_eq!(ids(&filter(&all, "web dev")), vec![2, 3]);
        assert_eq!(ids(&filter(&all, "ferris")), vec![4]);
    }

    #[test]
    fn test_description_is_not_searched() {
        let all = courses();
        // sample descriptions read "Everything about ..."
        assert!(filter(&all, "everything").is_empty());
    }

    #[test]
    fn test_query_state() {
        let mut query = SearchQuery::default();
        assert!(!query.is_active());

        query.set("rust".to_string());
        assert!(query.is_active());
        assert_eq!(query.as_str(), "rust");

        query.clear();
        assert!(!query.is_active());
    }
}
