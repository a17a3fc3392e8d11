//! Synchronous change notification.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Ordered set of callbacks interested in events of type `E`.
///
/// Callbacks run on the caller's thread, in subscription order, before
/// `notify` returns. A reader woken by a callback therefore always sees the
/// state that produced the event.
pub struct Subscribers<E> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.len())
            .finish()
    }
}

impl<E> Subscribers<E> {
    /// Register a callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    /// Invoke every callback with `event`.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_notify_runs_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::<u32>::default();

        let first = Rc::clone(&seen);
        subs.subscribe(move |n| first.borrow_mut().push(("first", *n)));
        let second = Rc::clone(&seen);
        subs.subscribe(move |n| second.borrow_mut().push(("second", *n)));

        subs.notify(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subs = Subscribers::<()>::default();

        let counter = Rc::clone(&count);
        let id = subs.subscribe(move |_| *counter.borrow_mut() += 1);
        subs.notify(&());
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.notify(&());

        assert_eq!(*count.borrow(), 1);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_debug_reports_callback_count() {
        let mut subs = Subscribers::<u8>::default();
        subs.subscribe(|_| {});
        subs.subscribe(|_| {});
        assert_eq!(format!("{subs:?}"), "Subscribers { count: 2 }");
    }
}
