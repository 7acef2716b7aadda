use super::data::CourseId;

/// Which course, if any, the detail panel is showing.
///
/// The panel is visible exactly when a course id is held, so it can never
/// be shown without a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Hidden,
    Shown(CourseId),
}

impl DetailView {
    pub fn open(&mut self, id: CourseId) {
        *self = DetailView::Shown(id);
    }

    pub fn close(&mut self) {
        *self = DetailView::Hidden;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Shown(_))
    }

    pub fn shown(&self) -> Option<CourseId> {
        match self {
            DetailView::Shown(id) => Some(*id),
            DetailView::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut detail = DetailView::default();
        assert!(!detail.is_open());

        detail.open(5);
        assert!(detail.is_open());
        assert_eq!(detail.shown(), Some(5));

        detail.open(6);
        assert_eq!(detail.shown(), Some(6));

        detail.close();
        assert_eq!(detail, DetailView::Hidden);
        assert_eq!(detail.shown(), None);
    }
}
