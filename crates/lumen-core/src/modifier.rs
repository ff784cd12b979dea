use smallvec::SmallVec;

/// Presentation attributes attached to a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    /// Class names, in insertion order, without duplicates.
    pub classes: SmallVec<[String; 2]>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds whitespace-separated class names. Blank input is ignored.
    pub fn class(mut self, names: impl AsRef<str>) -> Self {
        for name in names.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Class attribute value, or `None` when there are no classes.
    pub fn class_attr(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }
}
