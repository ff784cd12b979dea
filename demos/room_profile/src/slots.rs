//! Layout components take finished children instead of data, so only `App`
//! touches the user record. `Body` accepts any sidebar and any content.

use lumen_core::prelude::*;
use lumen_ui::*;

use crate::prop_drilling::{Content, UserAvatar, UserStats};
use crate::user::User;

pub fn Nav(children: impl IntoChildren) -> View {
    Box(Modifier::new().class("nav")).child(children)
}

pub fn Sidebar(children: impl IntoChildren) -> View {
    Box(Modifier::new().class("sidebar")).child(children)
}

pub fn Body(sidebar: View, content: View) -> View {
    Box(Modifier::new().class("body")).child((Sidebar(sidebar), content))
}

pub fn App(user: &User) -> View {
    Box(Modifier::new().class("app")).child((
        Nav(UserAvatar(user, Some("small"))),
        Body(UserStats(user), Content()),
    ))
}

pub fn app(user: User) -> impl FnMut(&mut Scheduler) -> View + 'static {
    move |_: &mut Scheduler| {
        let user = remember_with_key("slots:user", || user.clone());
        App(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_places_arbitrary_slots() {
        let v = Body(Text("left"), Text("right"));
        let (markup, _, _) = paint_markup(&v);
        assert_eq!(
            markup,
            r#"<div class="body"><div class="sidebar">left</div>right</div>"#
        );
    }
}
