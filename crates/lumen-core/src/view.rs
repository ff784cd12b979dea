use std::rc::Rc;

use crate::Modifier;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    /// Generic container (`<div>`).
    Box,
    Text {
        text: String,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    Image {
        src: String,
        alt: String,
    },
    LineBreak,
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ViewKind::Button { text, on_click } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
            ViewKind::Image { src, alt } => f
                .debug_struct("Image")
                .field("src", src)
                .field("alt", alt)
                .finish(),
            ViewKind::LineBreak => write!(f, "LineBreak"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Concatenated text of this view and its descendants, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        fn walk(v: &View, out: &mut String) {
            match &v.kind {
                ViewKind::Text { text } | ViewKind::Button { text, .. } => out.push_str(text),
                _ => {}
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(self, &mut out);
        out
    }
}
