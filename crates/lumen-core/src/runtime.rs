use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::reactive::{self, ObserverId};
use crate::scope::Scope;
use crate::semantics::Role;
use crate::{Callback, View, ViewId};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Keyed slot storage that outlives a single composition.
#[derive(Default)]
pub struct Composer {
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    touched: HashSet<String>,
    occurrences: HashMap<String, usize>,
    composing: bool,
}

impl Composer {
    /// Drops every slot that the finished composition did not visit.
    ///
    /// Values are returned rather than dropped in place so their destructors
    /// can touch the composer again.
    fn sweep(&mut self) -> Vec<Box<dyn Any>> {
        let touched = std::mem::take(&mut self.touched);
        let stale: Vec<String> = self
            .keyed_slots
            .keys()
            .filter(|k| !touched.contains(*k))
            .cloned()
            .collect();
        let mut gone = Vec::with_capacity(stale.len());
        for key in stale {
            log::debug!("unmounting keyed slot '{key}'");
            if let Some(v) = self.keyed_slots.remove(&key) {
                gone.push(v);
            }
        }
        gone
    }

    fn clear(&mut self) -> Vec<Box<dyn Any>> {
        self.touched.clear();
        self.occurrences.clear();
        self.keyed_slots.drain().map(|(_, v)| v).collect()
    }
}

/// Marks one composition pass. Unvisited slots are swept when it finishes.
pub struct ComposeGuard {
    finished: bool,
}

impl ComposeGuard {
    pub fn begin() -> Self {
        COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.touched.clear();
            c.occurrences.clear();
            c.composing = true;
        });
        ComposeGuard { finished: false }
    }

    pub fn finish(mut self) {
        self.finished = true;
        let gone = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            c.composing = false;
            c.sweep()
        });
        drop(gone);
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        // An unwinding composition keeps its slots; the next pass decides.
        if !self.finished {
            COMPOSER.with(|c| c.borrow_mut().composing = false);
        }
    }
}

/// How many times `key` was claimed earlier in the current composition.
///
/// Lets one call site that runs several times per pass (a loop, a recursive
/// component) derive a distinct slot key for each run. Counts restart with
/// every composition, so the n-th run maps to the same slot frame after frame.
pub fn next_occurrence(key: &str) -> usize {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let n = c.occurrences.entry(key.to_string()).or_insert(0);
        let current = *n;
        *n += 1;
        current
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        if c.composing {
            c.touched.insert(key.clone());
        }
        match c.keyed_slots.get(&key) {
            Some(existing) => match existing.downcast_ref::<Rc<T>>() {
                Some(rc) => Some(rc.clone()),
                None => {
                    log::warn!(
                        "remember_with_key: key '{}' reused with a different type; replacing.",
                        key
                    );
                    None
                }
            },
            None => None,
        }
    });
    if let Some(rc) = existing {
        return rc;
    }

    // `init` may itself remember things, so the composer is not borrowed here.
    let rc: Rc<T> = Rc::new(init());
    let replaced = COMPOSER.with(|c| c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone())));
    drop(replaced);
    rc
}

/// Frame — output of one composition: markup + input/semantics.
pub struct Frame {
    pub markup: String,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    pub generation: u64,
}

impl Frame {
    /// The `index`-th clickable region labelled `label`, in tree order.
    pub fn hit_by_label(&self, label: &str, index: usize) -> Option<&HitRegion> {
        self.hit_regions
            .iter()
            .filter(|h| h.label == label)
            .nth(index)
    }

    pub fn hit_by_id(&self, id: ViewId) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.id == id)
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub label: String,
    pub on_click: Option<Callback>,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// Flattened semantics node produced by the painter.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    pub id: ViewId,
    pub role: Role,
    pub label: Option<String>,
}

/// Drives compositions and remembers whether state they read has changed.
pub struct Scheduler {
    observer: ObserverId,
    invalidated: Rc<Cell<bool>>,
    generation: u64,
    root_scope: Scope,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        let invalidated = Rc::new(Cell::new(true));
        let observer = reactive::new_observer({
            let invalidated = invalidated.clone();
            move || invalidated.set(true)
        });
        Self {
            observer,
            invalidated,
            generation: 0,
            root_scope: Scope::new(),
        }
    }

    /// `true` until the first composition, and after any signal read by the
    /// last composition is written.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of signals the last composition read.
    pub fn dependency_count(&self) -> usize {
        reactive::dependency_count(self.observer)
    }

    pub fn compose<F>(
        &mut self,
        mut build_root: F,
        paint: impl Fn(&View) -> (String, Vec<HitRegion>, Vec<SemNode>),
    ) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        self.invalidated.set(false);
        self.generation += 1;
        log::debug!("composition #{}", self.generation);

        let guard = ComposeGuard::begin();
        let observer = self.observer;
        let scope = self.root_scope.clone();
        let root = reactive::track(observer, || scope.run(|| build_root(self)));
        guard.finish();

        let (markup, hit_regions, semantics_nodes) = paint(&root);
        Frame {
            markup,
            hit_regions,
            semantics_nodes,
            generation: self.generation,
        }
    }

    /// Tears down everything composed so far: remembered slots are dropped
    /// and the root scope's cleanups run.
    pub fn dispose(&mut self) {
        let gone = COMPOSER.with(|c| c.borrow_mut().clear());
        drop(gone);
        self.root_scope.dispose();
        self.root_scope = Scope::new();
        self.invalidated.set(true);
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        reactive::remove_observer(self.observer);
    }
}
