//! # State, Stores, and Context
//!
//! Lumen is a small immediate-mode view runtime. Every frame the host calls
//! a root function that builds a fresh `View` tree; state that must survive
//! between frames lives in remembered slots, signals and stores.
//!
//! - `Signal<T>` — observable value with an explicit subscriber list.
//! - `remember_with_key` — keyed slot storage bound to the composition; slots a frame does
//!   not visit are dropped when that frame finishes.
//! - `provide_context` / `use_context` — ambient values scoped to a region
//!   of the tree, innermost provider wins.
//! - `Store<H>` / `provide_store` / `use_store` — a signal plus a reducer,
//!   published to a region of the tree through a non-owning handle.
//!
//! ## Signals
//!
//! ```rust
//! use lumen_core::*;
//!
//! let lit = signal(false);
//! lit.update(|v| *v = !*v);
//! assert!(lit.get());
//! ```
//!
//! Reads during a composition register a dependency on the host scheduler;
//! a later write marks the scheduler invalidated and the host composes a new
//! frame. Writes nobody read during the last frame do not invalidate it.
//!
//! ## Ambient state
//!
//! ```rust
//! use lumen_core::*;
//!
//! struct Light;
//! impl StateHolder for Light {
//!     type State = bool;
//!     type Event = ();
//!     fn initial_state() -> bool { false }
//!     fn reduce(lit: &bool, _: ()) -> bool { !lit }
//! }
//!
//! provide_store::<Light, _>("hall", Light::initial_state, || {
//!     let light = use_store::<Light>();
//!     light.dispatch(()).unwrap();
//!     assert_eq!(light.state(), Ok(true));
//! });
//! ```
//!
//! Asking for a store or context value with no enclosing provider is a
//! wiring error: `try_use_*` return [`ContextError::Unresolved`] and `use_*`
//! panic with the same message. Wrap untrusted subtrees in `ErrorBoundary`
//! to render a fallback instead.

pub mod effects;
pub mod error;
pub mod input;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod reactive;
pub mod render_api;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod store;
pub mod tests;
pub mod view;

pub use effects::*;
pub use error::*;
pub use input::*;
pub use locals::*;
pub use modifier::*;
pub use render_api::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use store::*;
pub use view::*;
