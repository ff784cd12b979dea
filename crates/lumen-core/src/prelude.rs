pub use crate::effects::{Dispose, effect, mount_effect, on_unmount};
pub use crate::error::{ContextError, ErrorBoundary, ErrorInfo};
pub use crate::input::{InputEvent, Target};
pub use crate::locals::{provide_context, try_use_context, use_context};
pub use crate::modifier::Modifier;
pub use crate::render_api::RenderBackend;
pub use crate::runtime::{Frame, HitRegion, Scheduler, SemNode, next_occurrence, remember_with_key};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, WeakSignal, signal};
pub use crate::store::{
    StateHolder, Store, StoreHandle, provide_store, try_use_store, use_store,
};
pub use crate::view::{Callback, View, ViewId, ViewKind};
