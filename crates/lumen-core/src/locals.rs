//! # Context frames
//!
//! Lumen passes ambient values down the view tree through thread‑local
//! “context frames” instead of threading them through every component.
//!
//! A provider pushes a frame for the dynamic extent of its content closure.
//! Consumers composed inside that closure resolve the nearest frame that
//! holds a value of the requested type, so an inner provider shadows an
//! outer one of the same type:
//!
//! ```rust
//! use lumen_core::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Accent(&'static str);
//!
//! provide_context(Accent("outer"), || {
//!     assert_eq!(use_context::<Accent>(), Accent("outer"));
//!     provide_context(Accent("inner"), || {
//!         assert_eq!(use_context::<Accent>(), Accent("inner"));
//!     });
//! });
//!
//! assert!(try_use_context::<Accent>().is_err());
//! ```
//!
//! Values are cloned out on lookup, so providers usually publish handles
//! (`Rc`, [`StoreHandle`](crate::StoreHandle)) rather than large records.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::ContextError;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

/// Makes `value` visible to everything composed inside `f`.
pub fn provide_context<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Nearest provided `T`, innermost frame first.
pub fn try_use_context<T: Clone + 'static>() -> Result<T, ContextError> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Ok(t.clone());
            }
        }
        Err(ContextError::Unresolved {
            type_name: std::any::type_name::<T>(),
        })
    })
}

/// Like [`try_use_context`], but panics when no provider encloses the caller.
#[track_caller]
pub fn use_context<T: Clone + 'static>() -> T {
    match try_use_context::<T>() {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

/// Number of frames currently pushed. Zero outside every provider.
pub fn context_depth() -> usize {
    LOCALS_STACK.with(|st| st.borrow().len())
}
