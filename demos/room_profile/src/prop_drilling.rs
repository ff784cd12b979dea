//! The user record is passed by hand through every layer, including the
//! ones (`Body`, `Sidebar`) that only forward it.

use lumen_core::prelude::*;
use lumen_ui::*;

use crate::user::User;

pub fn UserAvatar(user: &User, size: Option<&str>) -> View {
    Image(&user.avatar, "user avatar")
        .modifier(Modifier::new().class("user-avatar").class(size.unwrap_or("")))
}

pub fn UserStats(user: &User) -> View {
    Box(Modifier::new().class("user-stats")).child((
        Box(Modifier::new()).child((UserAvatar(user, None), Text(&user.name))),
        Box(Modifier::new().class("stats")).child((
            Box(Modifier::new()).child(Text(format!("{} Followers", user.followers))),
            Box(Modifier::new()).child(Text(format!("Following {}", user.following))),
        )),
    ))
}

pub fn Nav(user: &User) -> View {
    Box(Modifier::new().class("nav")).child(UserAvatar(user, Some("small")))
}

pub fn Content() -> View {
    Box(Modifier::new().class("content")).child(Text("main content here"))
}

pub fn Sidebar(user: &User) -> View {
    Box(Modifier::new().class("sidebar")).child(UserStats(user))
}

pub fn Body(user: &User) -> View {
    Box(Modifier::new().class("body")).child((Sidebar(user), Content()))
}

pub fn App(user: &User) -> View {
    Box(Modifier::new().class("app")).child((Nav(user), Body(user)))
}

/// Root function; the user lives in a remembered slot like component state.
pub fn app(user: User) -> impl FnMut(&mut Scheduler) -> View + 'static {
    move |_: &mut Scheduler| {
        let user = remember_with_key("prop_drilling:user", || user.clone());
        App(&user)
    }
}
