use std::cell::RefCell;
use std::rc::Rc;

use crate::remember_with_key;

#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }
}

/// Runs `f()` immediately and returns its `Dispose`.
pub fn effect<F>(f: F) -> Dispose
where
    F: FnOnce() -> Dispose,
{
    let d = f();

    // auto-register cleanup in the current scope if one exists
    if let Some(scope) = crate::scope::current_scope() {
        let d2 = d.clone();
        scope.add_disposer(move || d2.run());
    }

    d
}

/// Helper to register cleanup inside effect.
pub fn on_unmount(f: impl FnOnce() + 'static) -> Dispose {
    Dispose::new(f)
}

struct MountGuard(Dispose);

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.0.run();
    }
}

/// Runs `f` the first time the call site identified by `key` is composed.
///
/// The returned cleanup runs when a composition skips `key`, or when the
/// enclosing scope is disposed, whichever comes first.
pub fn mount_effect(key: impl Into<String>, f: impl FnOnce() -> Dispose) {
    let key = key.into();
    remember_with_key(format!("mount_effect:{key}"), || MountGuard(effect(f)));
}
