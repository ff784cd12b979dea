//! The user record is published once with a `Provider`; the leaves pull it
//! back out with a render-prop `Consumer`, so nothing in between mentions it.

use std::rc::Rc;

use lumen_core::prelude::*;
use lumen_ui::*;

use crate::prop_drilling::Content;
use crate::user::User;

/// What the profile provider publishes. Shared, never copied per consumer.
pub type UserContext = Rc<User>;

pub fn UserAvatar(size: Option<&str>) -> View {
    Consumer(|user: UserContext| crate::prop_drilling::UserAvatar(&user, size))
}

pub fn UserStats() -> View {
    Consumer(|user: UserContext| {
        Box(Modifier::new().class("user-stats")).child((
            Box(Modifier::new()).child((UserAvatar(None), Text(&user.name))),
            Box(Modifier::new().class("stats")).child((
                Box(Modifier::new()).child(Text(format!("{} Followers", user.followers))),
                Box(Modifier::new()).child(Text(format!("Following {}", user.following))),
            )),
        ))
    })
}

pub fn Nav() -> View {
    Box(Modifier::new().class("nav")).child(UserAvatar(Some("small")))
}

pub fn Sidebar() -> View {
    Box(Modifier::new().class("sidebar")).child(UserStats())
}

pub fn Body() -> View {
    Box(Modifier::new().class("body")).child((Sidebar(), Content()))
}

pub fn App(user: UserContext) -> View {
    Box(Modifier::new().class("app")).child(Provider(user, || (Nav(), Body())))
}

pub fn app(user: User) -> impl FnMut(&mut Scheduler) -> View + 'static {
    move |_: &mut Scheduler| {
        let user = remember_with_key("context:user", || Rc::new(user.clone()));
        App((*user).clone())
    }
}
