/// Transient notification messages (toasts)
use std::collections::VecDeque;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    visible: VecDeque<Toast>,
    next_id: ToastId,
    capacity: usize,
}

impl Toasts {
    /// `capacity` is clamped to at least one toast
    pub fn new(capacity: usize) -> Self {
        Toasts {
            visible: VecDeque::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Show a new toast, evicting the oldest when full
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        if self.visible.len() == self.capacity {
            self.visible.pop_front();
        }

        self.visible.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|toast| toast.id != id);
        self.visible.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut toasts = Toasts::new(5);
        let a = toasts.push(ToastKind::Info, "a");
        let b = toasts.push(ToastKind::Success, "b");
        assert!(b > a);
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_oldest_evicted_when_full() {
        let mut toasts = Toasts::new(2);
        let first = toasts.push(ToastKind::Info, "one");
        toasts.push(ToastKind::Info, "two");
        toasts.push(ToastKind::Info, "three");

        let messages: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);

        // timer for the evicted toast fires later
        assert!(!toasts.dismiss(first));
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Toasts::default();
        let id = toasts.push(ToastKind::Error, "boom");
        assert!(toasts.dismiss(id));
        assert!(toasts.is_empty());
        assert!(!toasts.dismiss(id));
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut toasts = Toasts::new(0);
        toasts.push(ToastKind::Info, "kept");
        assert_eq!(toasts.len(), 1);
    }
}
