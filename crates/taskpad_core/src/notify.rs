//! Store notification hub.
//!
//! # Responsibility
//! - Carry user-facing operation outcomes from stores to subscribers.
//! - Keep UI concerns (toasts, re-render triggers) out of core.
//!
//! # Invariants
//! - Subscribers are invoked after the store's state and persistence are
//!   already consistent, never mid-mutation.

/// Outcome class of a store operation, for presentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single user-facing operation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub type NoticeListener = Box<dyn Fn(&Notice)>;

/// Subscriber list shared by a store.
///
/// Single-threaded by design; listeners run synchronously on the calling
/// thread in subscription order.
#[derive(Default)]
pub struct NoticeHub {
    listeners: Vec<NoticeListener>,
}

impl NoticeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener invoked for every subsequent notice.
    pub fn subscribe(&mut self, listener: NoticeListener) {
        self.listeners.push(listener);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    fn emit(&self, notice: Notice) {
        for listener in &self.listeners {
            listener(&notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeHub, NoticeKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_receive_notices_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hub = NoticeHub::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            hub.subscribe(Box::new(move |notice| {
                seen.borrow_mut().push((tag, notice.kind, notice.message.clone()));
            }));
        }

        hub.success("saved");
        hub.error("failed");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], ("first", NoticeKind::Success, "saved".to_string()));
        assert_eq!(seen[1], ("second", NoticeKind::Success, "saved".to_string()));
        assert_eq!(seen[2].1, NoticeKind::Error);
    }
}
