#![allow(non_snake_case)]
use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;

use crate::View;

/// Failures when resolving ambient state from the view tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A consumer rendered outside every provider of the type it asked for.
    #[error("no enclosing provider for `{type_name}`; wrap the consumer in a matching provider")]
    Unresolved { type_name: &'static str },
    /// The store behind a handle was torn down.
    #[error("store `{key}` is no longer mounted")]
    Detached { key: String },
}

pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Renders `content`, or `fallback` if composing `content` panics.
pub fn ErrorBoundary(
    fallback: impl FnOnce(ErrorInfo) -> View,
    content: impl FnOnce() -> View,
) -> View {
    let component = std::any::type_name_of_val(&content).to_string();
    match catch_unwind(AssertUnwindSafe(content)) {
        Ok(view) => view,
        Err(err) => {
            let message = if let Some(s) = err.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = err.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("ErrorBoundary caught: {message}");

            fallback(ErrorInfo { message, component })
        }
    }
}
