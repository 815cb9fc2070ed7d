//! Single-signal publish/subscribe
//!
//! An [`Event`] keeps an ordered list of callbacks. [`Subscription`] handles
//! remove their callback once, on the first call to `dispose`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscribers<T: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// An event that can be subscribed to and invoked
pub struct Event<T: ?Sized> {
    subscribers: Rc<RefCell<Subscribers<T>>>,
}

impl<T: ?Sized + 'static> Event<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Subscribers {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Append `callback` to the subscriber list
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let mut subscribers = self.subscribers.borrow_mut();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.entries.push((id, Rc::new(callback)));

        let weak: Weak<RefCell<Subscribers<T>>> = Rc::downgrade(&self.subscribers);
        Subscription {
            disposed: Cell::new(false),
            remove: Box::new(move || {
                if let Some(subscribers) = weak.upgrade() {
                    subscribers.borrow_mut().entries.retain(|(i, _)| *i != id);
                }
            }),
        }
    }

    /// Call every current subscriber in subscription order
    ///
    /// The list is snapshotted first, so callbacks may subscribe or dispose
    /// while the event is running; those changes apply to the next invocation.
    pub fn invoke(&self, args: &T) {
        let callbacks: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in callbacks {
            callback(args);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }
}

impl<T: ?Sized + 'static> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.subscribers.borrow().entries.len())
            .finish()
    }
}

/// Handle returned by [`Event::subscribe`]
///
/// Dropping the handle does not unsubscribe; call [`Subscription::dispose`].
pub struct Subscription {
    disposed: Cell<bool>,
    remove: Box<dyn Fn()>,
}

impl Subscription {
    /// Remove the callback; `true` the first time, `false` on every later call
    pub fn dispose(&self) -> bool {
        if self.disposed.replace(true) {
            return false;
        }
        (self.remove)();
        true
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.disposed.get())
            .finish()
    }
}
