#![allow(non_snake_case)]
//! Widgets, context widgets and the markup painter.

pub mod markup;

use std::rc::Rc;

use lumen_core::*;

pub use markup::paint_markup;

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(0, ViewKind::Text { text: text.into() })
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

pub fn Image(src: impl Into<String>, alt: impl Into<String>) -> View {
    let alt = alt.into();
    View::new(
        0,
        ViewKind::Image {
            src: src.into(),
            alt: alt.clone(),
        },
    )
    .semantics(Semantics::new(Role::Image).label(alt))
}

pub fn LineBreak() -> View {
    View::new(0, ViewKind::LineBreak)
}

/// Publishes `value` to every consumer composed by `content`.
///
/// Adds no node of its own; the result is whatever `content` returns, so a
/// provider can wrap a single view or a tuple of siblings.
pub fn Provider<T: Clone + 'static, R>(value: T, content: impl FnOnce() -> R) -> R {
    provide_context(value, content)
}

/// Render-prop consumer: resolves the nearest provided `T` and hands it to
/// `render`. Panics like [`use_context`] when nothing provides `T`.
#[track_caller]
pub fn Consumer<T: Clone + 'static>(render: impl FnOnce(T) -> View) -> View {
    render(use_context::<T>())
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
