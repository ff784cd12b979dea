use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::reactive::{self, SignalId};

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable state cell. Cloning the handle shares the cell.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    id: SignalId,
    value: RefCell<T>,
    subs: RefCell<Vec<(SubId, Subscriber<T>)>>,
    next_sub: Cell<SubId>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            id: reactive::next_signal_id(),
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
            next_sub: Cell::new(0),
        }))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        reactive::register_signal_read(self.0.id);
        self.0.value.borrow().clone()
    }

    /// Borrow the current value without cloning it. Still tracked.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        reactive::register_signal_read(self.0.id);
        f(&self.0.value.borrow())
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        *self.0.value.borrow_mut() = v;
        self.notify();
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        f(&mut self.0.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.0.next_sub.get();
        self.0.next_sub.set(id + 1);
        self.0.subs.borrow_mut().push((id, Rc::new(f)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        let mut subs = self.0.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal(Rc::downgrade(&self.0))
    }

    // The write borrow is released before any subscriber runs, so subscribers
    // may read or write this signal again.
    fn notify(&self)
    where
        T: Clone,
    {
        let snapshot = self.0.value.borrow().clone();
        let subs: SmallVec<[Subscriber<T>; 4]> =
            self.0.subs.borrow().iter().map(|(_, s)| s.clone()).collect();
        for s in subs {
            s(&snapshot);
        }
        reactive::signal_changed(self.0.id);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.0.id)
            .field("value", &*self.0.value.borrow())
            .finish()
    }
}

/// Non-owning handle to a [`Signal`].
pub struct WeakSignal<T: 'static>(Weak<Inner<T>>);

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> WeakSignal<T> {
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.0.upgrade().map(Signal)
    }

    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
