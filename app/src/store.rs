use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(i64)>;

/// Client-side store holding the page's counter.
///
/// The store is created explicitly and handed to whoever needs it. Clones
/// share the same state, so the view and the shell can each hold one.
#[derive(Clone, Default)]
pub struct CounterStore {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    count: Cell<i64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_count(&self) -> i64 {
        self.inner.count.get()
    }

    /// Adds one to the counter, then notifies every subscriber with the new
    /// value in the order they subscribed.
    pub fn increment(&self) {
        let count = self.inner.count.get().wrapping_add(1);
        self.inner.count.set(count);
        log::debug!("count incremented to {count}");

        // Listeners may (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(count);
        }
    }

    /// Registers `listener` to be called after every increment.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(i64) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        log::trace!("subscriber {id} registered");

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl fmt::Debug for CounterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterStore")
            .field("count", &self.get_count())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle returned by [`CounterStore::subscribe`].
///
/// Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        inner
            .listeners
            .borrow_mut()
            .retain(|(id, _)| *id != self.id);
        log::trace!("subscriber {} removed", self.id);
    }
}
