//! A store component owns the light switch; `Room` finds it through context.
//!
//! `RoomStore` is the only place that knows how the state changes. It
//! publishes a handle to its subtree; `Room` turns that handle into a
//! [`RoomContext`] snapshot on every render and never keeps a copy.

use std::rc::Rc;

use lumen_core::prelude::*;
use lumen_ui::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoomState {
    pub is_lit: bool,
}

impl RoomState {
    pub fn toggled(self) -> Self {
        Self {
            is_lit: !self.is_lit,
        }
    }

    pub fn word(self) -> &'static str {
        if self.is_lit { "lit" } else { "dark" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomEvent {
    ToggleLight,
}

/// State holder behind every `RoomStore`.
pub struct RoomLight;

impl StateHolder for RoomLight {
    type State = RoomState;
    type Event = RoomEvent;

    fn initial_state() -> RoomState {
        RoomState::default()
    }

    fn reduce(state: &RoomState, event: RoomEvent) -> RoomState {
        match event {
            RoomEvent::ToggleLight => state.toggled(),
        }
    }
}

/// What a room consumer sees: the current value and the bound transition.
#[derive(Clone)]
pub struct RoomContext {
    pub is_lit: bool,
    pub on_toggle_light: Callback,
}

/// Owns one room's light and exposes it to `content`.
///
/// Every `RoomStore` in the tree is its own light, including repeated runs of
/// the same call site in a loop or a recursive component. Consumers see the
/// innermost one.
#[track_caller]
pub fn RoomStore<R>(initial_lit: bool, content: impl FnOnce() -> R) -> R {
    let at = std::panic::Location::caller();
    provide_store::<RoomLight, _>(
        format!("room@{}:{}:{}", at.file(), at.line(), at.column()),
        || RoomState {
            is_lit: initial_lit,
        },
        content,
    )
}

/// Resolves the nearest `RoomStore`. Panics if there is none, or if it was
/// unmounted while its handle was still published.
#[track_caller]
pub fn use_room() -> RoomContext {
    let room = use_store::<RoomLight>();
    let state = match room.state() {
        Ok(state) => state,
        Err(e) => panic!("{e}"),
    };
    RoomContext {
        is_lit: state.is_lit,
        on_toggle_light: Rc::new(move || {
            if let Err(e) = room.dispatch(RoomEvent::ToggleLight) {
                log::warn!("ignoring toggle: {e}");
            }
        }),
    }
}

pub fn Room() -> View {
    let RoomContext {
        is_lit,
        on_toggle_light,
    } = use_room();
    let word = RoomState { is_lit }.word();

    Box(Modifier::new().class("room").class(word)).child((
        Text(format!("The room is {word}.")),
        LineBreak(),
        Button("Flip", move || on_toggle_light()),
    ))
}

pub fn App() -> View {
    Box(Modifier::new().class("app")).child(Room())
}

pub fn app(initial_lit: bool) -> impl FnMut(&mut Scheduler) -> View + 'static {
    move |_: &mut Scheduler| RoomStore(initial_lit, App)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_flips_unconditionally() {
        let dark = RoomLight::initial_state();
        assert!(!dark.is_lit);
        let lit = RoomLight::reduce(&dark, RoomEvent::ToggleLight);
        assert!(lit.is_lit);
        assert_eq!(RoomLight::reduce(&lit, RoomEvent::ToggleLight), dark);
    }

    #[test]
    fn toggle_parity_over_many_sequences() {
        for initial in [false, true] {
            let store = Store::<RoomLight>::new(RoomState { is_lit: initial });
            for n in 0..32usize {
                let expected = if n % 2 == 0 { initial } else { !initial };
                assert_eq!(store.state().is_lit, expected, "initial={initial} after {n}");
                store.dispatch(RoomEvent::ToggleLight);
            }
        }
    }

    #[test]
    fn room_renders_from_context_only() {
        let (markup, hits, _) = paint_markup(&RoomStore(false, Room));
        insta::assert_snapshot!(markup, @r#"<div class="room dark">The room is dark.<br/><button>Flip</button></div>"#);
        assert_eq!(hits[0].label, "Flip");
    }

    #[test]
    #[should_panic(expected = "no enclosing provider")]
    fn room_outside_store_fails_loudly() {
        let _ = Room();
    }
}
