#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::*;

    fn no_paint(_: &View) -> (String, Vec<HitRegion>, Vec<SemNode>) {
        (String::new(), Vec::new(), Vec::new())
    }

    struct Light;
    impl StateHolder for Light {
        type State = bool;
        type Event = ();
        fn initial_state() -> bool {
            false
        }
        fn reduce(lit: &bool, _: ()) -> bool {
            !lit
        }
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        sig.set(42);
        sig.update(|v| *v += 1);
        assert_eq!(*seen.borrow(), vec![42, 43]);

        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(7);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_subscriber_may_read_back() {
        let sig = signal(1);
        let echoed = Rc::new(Cell::new(0));
        sig.subscribe({
            let sig = sig.clone();
            let echoed = echoed.clone();
            move |_| echoed.set(sig.get())
        });
        sig.set(5);
        assert_eq!(echoed.get(), 5);
    }

    #[test]
    fn test_weak_signal_does_not_keep_alive() {
        let sig = signal(String::from("x"));
        let weak = sig.downgrade();
        assert!(weak.upgrade().is_some());
        drop(sig);
        assert!(!weak.is_alive());
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(Cell::new(0));

        let scope = Scope::new();
        let child = scope.child();
        child.add_disposer({
            let c = cleaned_up.clone();
            move || c.set(c.get() + 1)
        });

        assert_eq!(cleaned_up.get(), 0);
        scope.dispose();
        assert_eq!(cleaned_up.get(), 1);
        assert!(child.is_disposed());

        // idempotent
        scope.dispose();
        assert_eq!(cleaned_up.get(), 1);
    }

    #[test]
    fn test_key_based_remember() {
        COMPOSER.with(|c| c.borrow_mut().keyed_slots.clear());

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Should return the same instance
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // Not 100, because key exists
    }

    #[test]
    fn test_remember_init_may_remember() {
        let outer = remember_with_key("outer", || *remember_with_key("inner", || 5) + 1);
        assert_eq!(*outer, 6);
        assert_eq!(*remember_with_key("inner", || 0), 5);
    }

    #[test]
    fn test_context_nearest_wins() {
        #[derive(Clone, Debug, PartialEq)]
        struct Tag(u8);

        assert_eq!(context_depth(), 0);
        provide_context(Tag(1), || {
            assert_eq!(use_context::<Tag>(), Tag(1));
            provide_context(Tag(2), || {
                assert_eq!(use_context::<Tag>(), Tag(2));
                // unrelated types still resolve through inner frames
                provide_context(7u32, || assert_eq!(use_context::<Tag>(), Tag(2)));
            });
            assert_eq!(use_context::<Tag>(), Tag(1));
        });
        assert_eq!(context_depth(), 0);
    }

    #[test]
    fn test_unresolved_context_is_an_error() {
        #[derive(Clone)]
        struct Missing;

        let err = try_use_context::<Missing>().err().unwrap();
        assert!(matches!(err, ContextError::Unresolved { type_name } if type_name.ends_with("Missing")));
    }

    #[test]
    #[should_panic(expected = "no enclosing provider")]
    fn test_use_context_panics_when_unresolved() {
        let _ = use_context::<u64>();
    }

    #[test]
    fn test_frames_pop_on_unwind() {
        let r = std::panic::catch_unwind(|| {
            provide_context(1u8, || panic!("boom"));
        });
        assert!(r.is_err());
        assert_eq!(context_depth(), 0);
    }

    #[test]
    fn test_error_boundary_renders_fallback() {
        let v = ErrorBoundary(
            |info| View::new(0, ViewKind::Text { text: info.message }),
            || View::new(0, ViewKind::Text { text: use_context::<Signal<u8>>().get().to_string() }),
        );
        assert!(v.text_content().starts_with("no enclosing provider for"));
    }

    #[test]
    fn test_store_toggle_parity() {
        let store = Store::<Light>::new(Light::initial_state());
        for n in 1..=9 {
            store.dispatch(());
            assert_eq!(store.state(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_handle_detaches_with_store() {
        let store = Store::<Light>::with_key("porch", false);
        let handle = store.handle();
        assert_eq!(handle.dispatch(()), Ok(()));
        assert_eq!(handle.state(), Ok(true));
        drop(store);
        assert!(!handle.is_mounted());
        assert_eq!(
            handle.state(),
            Err(ContextError::Detached {
                key: "porch".into()
            })
        );
    }

    #[test]
    fn test_scheduler_invalidates_on_tracked_write() {
        let mut sched = Scheduler::new();
        let read = signal(0);
        let unread = signal(0);

        assert!(sched.is_invalidated());
        let frame = sched.compose(
            |_| {
                let _ = read.get();
                View::new(0, ViewKind::Box)
            },
            no_paint,
        );
        assert_eq!(frame.generation, 1);
        assert!(!sched.is_invalidated());
        assert_eq!(sched.dependency_count(), 1);

        unread.set(1);
        assert!(!sched.is_invalidated());

        read.set(1);
        assert!(sched.is_invalidated());
    }

    #[test]
    fn test_unvisited_store_is_unmounted() {
        let mut sched = Scheduler::new();
        let show = Rc::new(Cell::new(true));
        let handle: Rc<RefCell<Option<StoreHandle<Light>>>> = Rc::default();

        let mut root = {
            let show = show.clone();
            let handle = handle.clone();
            move |_: &mut Scheduler| {
                if show.get() {
                    provide_store::<Light, _>("kitchen", || false, || {
                        *handle.borrow_mut() = Some(use_store::<Light>());
                    });
                }
                View::new(0, ViewKind::Box)
            }
        };

        sched.compose(&mut root, no_paint);
        let h = handle.borrow().clone().unwrap();
        h.dispatch(()).unwrap();
        sched.compose(&mut root, no_paint);
        assert_eq!(h.state(), Ok(true), "store survives recomposition");

        show.set(false);
        sched.compose(&mut root, no_paint);
        assert!(!h.is_mounted());

        show.set(true);
        sched.compose(&mut root, no_paint);
        let remounted = handle.borrow().clone().unwrap();
        assert_eq!(remounted.state(), Ok(false), "remount starts from initial state");
    }

    #[test]
    fn test_repeated_call_site_mounts_separate_stores() {
        let mut sched = Scheduler::new();
        let handles: Rc<RefCell<Vec<StoreHandle<Light>>>> = Rc::default();

        let mut root = {
            let handles = handles.clone();
            move |_: &mut Scheduler| {
                handles.borrow_mut().clear();
                for _ in 0..2 {
                    provide_store::<Light, _>("lamp", || false, || {
                        handles.borrow_mut().push(use_store::<Light>());
                        // same key again, one level down
                        provide_store::<Light, _>("lamp", || false, || {
                            handles.borrow_mut().push(use_store::<Light>());
                        });
                    });
                }
                View::new(0, ViewKind::Box)
            }
        };

        sched.compose(&mut root, no_paint);
        let first: Vec<String> = handles.borrow().iter().map(|h| h.key().to_string()).collect();
        assert_eq!(first, vec!["lamp#0", "lamp#0/lamp#0", "lamp#1", "lamp#1/lamp#0"]);

        handles.borrow()[0].dispatch(()).unwrap();
        let states: Vec<bool> = handles.borrow().iter().map(|h| h.state().unwrap()).collect();
        assert_eq!(states, vec![true, false, false, false]);

        // the same runs land on the same stores next frame
        sched.compose(&mut root, no_paint);
        let second: Vec<String> = handles.borrow().iter().map(|h| h.key().to_string()).collect();
        assert_eq!(second, first);
        assert_eq!(handles.borrow()[0].state(), Ok(true));
    }

    #[test]
    fn test_scoped_effect_cleans_up_with_scope() {
        let log = Rc::new(RefCell::new(Vec::<&'static str>::new()));

        let scope = Scope::new();
        scope.run(|| {
            let log = log.clone();
            scoped_effect(move || {
                log.borrow_mut().push("start");
                move || log.borrow_mut().push("stop")
            });
        });
        assert_eq!(*log.borrow(), vec!["start"]);

        scope.dispose();
        assert_eq!(*log.borrow(), vec!["start", "stop"]);

        // no scope: nothing owns the cleanup, so it runs at once
        log.borrow_mut().clear();
        scoped_effect({
            let log = log.clone();
            move || {
                log.borrow_mut().push("start");
                move || log.borrow_mut().push("stop")
            }
        });
        assert_eq!(*log.borrow(), vec!["start", "stop"]);
    }

    #[test]
    fn test_mount_effect_cleanup_on_skip() {
        let mut sched = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::<&'static str>::new()));
        let mounted = Rc::new(Cell::new(true));

        let mut root = {
            let log = log.clone();
            let mounted = mounted.clone();
            move |_: &mut Scheduler| {
                if mounted.get() {
                    let log = log.clone();
                    mount_effect("probe", move || {
                        log.borrow_mut().push("mount");
                        on_unmount(move || log.borrow_mut().push("unmount"))
                    });
                }
                View::new(0, ViewKind::Box)
            }
        };

        sched.compose(&mut root, no_paint);
        sched.compose(&mut root, no_paint);
        assert_eq!(*log.borrow(), vec!["mount"]);

        mounted.set(false);
        sched.compose(&mut root, no_paint);
        assert_eq!(*log.borrow(), vec!["mount", "unmount"]);

        mounted.set(true);
        sched.compose(&mut root, no_paint);
        sched.dispose();
        assert_eq!(*log.borrow(), vec!["mount", "unmount", "mount", "unmount"]);
    }
}
