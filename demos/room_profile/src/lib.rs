#![allow(non_snake_case)]
//! One small screen written four ways.
//!
//! The profile screen (avatar in the nav bar, stats in the sidebar) is built
//! with plain prop drilling, with slots, and with a context provider. The
//! room screen keeps a light switch in a store component and reads it back
//! through context.

pub mod context;
pub mod prop_drilling;
pub mod room;
pub mod slots;
pub mod user;

use lumen_core::{Scheduler, View};

pub use user::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Demo {
    PropDrilling,
    Slots,
    Context,
    Room,
}

/// Startup settings for a demo run.
#[derive(Clone, Debug, Default)]
pub struct DemoConfig {
    pub user: User,
    pub initial_lit: bool,
}

pub type Root = Box<dyn FnMut(&mut Scheduler) -> View>;

pub fn root(demo: Demo, config: &DemoConfig) -> Root {
    log::info!("mounting {demo:?}");
    match demo {
        Demo::PropDrilling => Box::new(prop_drilling::app(config.user.clone())),
        Demo::Slots => Box::new(slots::app(config.user.clone())),
        Demo::Context => Box::new(context::app(config.user.clone())),
        Demo::Room => Box::new(room::app(config.initial_lit)),
    }
}
