//! # Stores
//!
//! A [`Store`] owns one unit of state and the only way to change it: a pure
//! reducer declared by a [`StateHolder`]. `provide_store` keeps the store
//! alive across frames and publishes a [`StoreHandle`] to everything composed
//! inside it, so consumers deep in the tree can read and dispatch without any
//! intermediate component knowing about the store.
//!
//! ```rust
//! use lumen_core::*;
//!
//! struct Counter;
//! impl StateHolder for Counter {
//!     type State = i32;
//!     type Event = i32;
//!     fn initial_state() -> i32 { 0 }
//!     fn reduce(state: &i32, by: i32) -> i32 { state + by }
//! }
//!
//! let store = Store::<Counter>::new(Counter::initial_state());
//! store.dispatch(2);
//! store.dispatch(3);
//! assert_eq!(store.state(), 5);
//! ```

use std::marker::PhantomData;
use std::rc::Rc;

use crate::signal::{Signal, SubId, WeakSignal};
use crate::{ContextError, next_occurrence, provide_context, remember_with_key, try_use_context};

pub trait StateHolder: 'static {
    type State: Clone + 'static;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

pub struct Store<H: StateHolder> {
    key: Rc<str>,
    state: Signal<H::State>,
    _holder: PhantomData<H>,
}

impl<H: StateHolder> Store<H> {
    pub fn new(initial: H::State) -> Self {
        Self::with_key(std::any::type_name::<H>(), initial)
    }

    pub fn with_key(key: impl Into<Rc<str>>, initial: H::State) -> Self {
        let key = key.into();
        log::debug!("store '{key}' mounted");
        Self {
            key,
            state: Signal::new(initial),
            _holder: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> H::State {
        self.state.get()
    }

    /// Applies the reducer and notifies subscribers with the new state.
    pub fn dispatch(&self, event: H::Event) {
        let next = self.state.with(|s| H::reduce(s, event));
        self.state.set(next);
    }

    pub fn subscribe(&self, f: impl Fn(&H::State) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn handle(&self) -> StoreHandle<H> {
        StoreHandle {
            key: self.key.clone(),
            state: self.state.downgrade(),
            _holder: PhantomData,
        }
    }
}

impl<H: StateHolder> Drop for Store<H> {
    fn drop(&mut self) {
        log::debug!("store '{}' unmounted", self.key);
    }
}

/// Non-owning reference to a mounted [`Store`].
pub struct StoreHandle<H: StateHolder> {
    key: Rc<str>,
    state: WeakSignal<H::State>,
    _holder: PhantomData<H>,
}

impl<H: StateHolder> Clone for StoreHandle<H> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            state: self.state.clone(),
            _holder: PhantomData,
        }
    }
}

impl<H: StateHolder> StoreHandle<H> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_alive()
    }

    pub fn state(&self) -> Result<H::State, ContextError> {
        Ok(self.signal()?.get())
    }

    pub fn dispatch(&self, event: H::Event) -> Result<(), ContextError> {
        let state = self.signal()?;
        let next = state.with(|s| H::reduce(s, event));
        state.set(next);
        Ok(())
    }

    fn signal(&self) -> Result<Signal<H::State>, ContextError> {
        self.state.upgrade().ok_or_else(|| ContextError::Detached {
            key: self.key.to_string(),
        })
    }
}

/// Mounts a `Store<H>` for this position in the tree (once; later frames
/// reuse it) and makes its handle visible to `content`.
///
/// The slot is identified by `key`, the key of the enclosing `Store<H>` if
/// there is one, and how many times that pair was already mounted in the
/// current composition. A call site inside a loop or a recursive component
/// therefore owns one store per run, and nested stores never share state.
pub fn provide_store<H: StateHolder, R>(
    key: impl Into<String>,
    init: impl FnOnce() -> H::State,
    content: impl FnOnce() -> R,
) -> R {
    let key = key.into();
    let scoped = match try_use_store::<H>() {
        Ok(parent) => format!("{}/{key}", parent.key()),
        Err(_) => key,
    };
    let key = format!("{scoped}#{}", next_occurrence(&scoped));
    let store = remember_with_key(
        format!("store:{}:{key}", std::any::type_name::<H>()),
        || Store::<H>::with_key(key.as_str(), init()),
    );
    provide_context(store.handle(), content)
}

pub fn try_use_store<H: StateHolder>() -> Result<StoreHandle<H>, ContextError> {
    try_use_context::<StoreHandle<H>>()
}

/// Nearest enclosing store of type `H`. Panics outside every `provide_store::<H>`.
#[track_caller]
pub fn use_store<H: StateHolder>() -> StoreHandle<H> {
    match try_use_store::<H>() {
        Ok(h) => h,
        Err(e) => panic!("{e}"),
    }
}
