use crate::ViewId;

/// Which control an event is aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Id(ViewId),
    /// The `index`-th control with this label, in tree order.
    Label { label: String, index: usize },
}

impl Target {
    pub fn label(label: impl Into<String>) -> Self {
        Target::Label {
            label: label.into(),
            index: 0,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Id(id) => write!(f, "#{id}"),
            Target::Label { label, index: 0 } => write!(f, "'{label}'"),
            Target::Label { label, index } => write!(f, "'{label}'[{index}]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary activation of a control (click, tap, Enter).
    Activate(Target),
}
