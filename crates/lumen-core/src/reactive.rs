use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

pub type SignalId = usize;
pub type ObserverId = usize;

thread_local! {
    static CURRENT_OBSERVER: RefCell<Option<ObserverId>> = const { RefCell::new(None) };
    static GRAPH: RefCell<DepGraph> = RefCell::new(DepGraph::default());
    static NEXT_SIGNAL: Cell<SignalId> = const { Cell::new(0) };
}

#[derive(Default)]
struct DepGraph {
    next_observer: ObserverId,
    // signal_id -> observers that depend on it
    edges: HashMap<SignalId, HashSet<ObserverId>>,
    // observer_id -> signals it depends on
    back: HashMap<ObserverId, HashSet<SignalId>>,
    observers: HashMap<ObserverId, Rc<dyn Fn()>>,
    running: HashSet<ObserverId>,
}

impl DepGraph {
    fn remove_all_edges_for(&mut self, obs: ObserverId) {
        if let Some(signals) = self.back.remove(&obs) {
            for s in signals {
                if let Some(set) = self.edges.get_mut(&s) {
                    set.remove(&obs);
                }
            }
        }
    }

    fn remove_observer(&mut self, obs: ObserverId) {
        self.observers.remove(&obs);
        self.remove_all_edges_for(obs);
        self.running.remove(&obs);
    }
}

pub(crate) fn next_signal_id() -> SignalId {
    NEXT_SIGNAL.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    })
}

pub fn register_signal_read(sig: SignalId) {
    CURRENT_OBSERVER.with(|co| {
        if let Some(obs) = *co.borrow() {
            GRAPH.with(|g| {
                let mut g = g.borrow_mut();
                g.edges.entry(sig).or_default().insert(obs);
                g.back.entry(obs).or_default().insert(sig);
            });
        }
    });
}

/// Wakes every observer that read `sig` since it last ran.
///
/// Each observer loses its edges before being woken; it has to read again
/// (usually during the next tracked run) to stay subscribed.
pub fn signal_changed(sig: SignalId) {
    let mut queue: VecDeque<ObserverId> = GRAPH.with(|g| {
        g.borrow()
            .edges
            .get(&sig)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    });
    while let Some(obs) = queue.pop_front() {
        let f = GRAPH.with(|g| {
            let mut g = g.borrow_mut();
            if !g.running.insert(obs) {
                return None;
            }
            g.remove_all_edges_for(obs);
            g.observers.get(&obs).cloned()
        });
        let Some(f) = f else { continue };
        with_observer(obs, || f());
        GRAPH.with(|g| {
            g.borrow_mut().running.remove(&obs);
        });
    }
}

pub fn new_observer(f: impl Fn() + 'static) -> ObserverId {
    GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        let id = g.next_observer;
        g.next_observer += 1;
        g.observers.insert(id, Rc::new(f));
        id
    })
}

/// Remove an observer and all of its dependency edges.
pub fn remove_observer(id: ObserverId) {
    GRAPH.with(|g| {
        g.borrow_mut().remove_observer(id);
    });
}

/// Runs `f` with `id` as the current observer, replacing its previous
/// dependencies with whatever `f` reads.
pub fn track<R>(id: ObserverId, f: impl FnOnce() -> R) -> R {
    GRAPH.with(|g| g.borrow_mut().remove_all_edges_for(id));
    with_observer(id, f)
}

pub fn dependency_count(id: ObserverId) -> usize {
    GRAPH.with(|g| g.borrow().back.get(&id).map_or(0, HashSet::len))
}

fn with_observer<R>(id: ObserverId, f: impl FnOnce() -> R) -> R {
    // Restores the previous observer on unwind as well.
    struct Restore(Option<ObserverId>);
    impl Drop for Restore {
        fn drop(&mut self) {
            let prev = self.0.take();
            CURRENT_OBSERVER.with(|co| *co.borrow_mut() = prev);
        }
    }
    let prev = CURRENT_OBSERVER.with(|co| co.borrow_mut().replace(id));
    let _restore = Restore(prev);
    f()
}
