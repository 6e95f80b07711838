use super::*;

fn counter() -> (Rc<Cell<u32>>, LayoutListener) {
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    (hits, Rc::new(move || h.set(h.get() + 1)))
}

#[test]
fn dispatch_targets_only_matching_observers() {
    let reg = ListenerRegistry::new();
    let (a_hits, a) = counter();
    let (b_hits, b) = counter();
    let (v_hits, v) = counter();
    reg.add_observer(AnchorKey(1), a);
    reg.add_observer(AnchorKey(2), b);
    reg.add_viewport(v);

    assert_eq!(reg.dispatch_resize(AnchorKey(1)), 1);
    assert_eq!(reg.dispatch_viewport(), 1);
    assert_eq!((a_hits.get(), b_hits.get(), v_hits.get()), (1, 0, 1));
}

#[test]
fn listener_removed_during_dispatch_is_skipped() {
    let reg = Rc::new(ListenerRegistry::new());
    let (late_hits, late) = counter();

    let victim = Rc::new(Cell::new(None));
    let reg_for_first = reg.clone();
    let victim_for_first = victim.clone();
    reg.add_viewport(Rc::new(move || {
        if let Some(id) = victim_for_first.get() {
            reg_for_first.remove(id);
        }
    }));
    victim.set(Some(reg.add_viewport(late)));

    assert_eq!(reg.dispatch_viewport(), 1);
    assert_eq!(late_hits.get(), 0);
    assert_eq!(reg.len(), 1);
}

struct Recording {
    reg: ListenerRegistry,
}

impl LayoutEventSource for Recording {
    fn add_viewport_listener(&self, listener: LayoutListener) -> ListenerId {
        self.reg.add_viewport(listener)
    }

    fn observe_size(&self, target: AnchorKey, listener: LayoutListener) -> ListenerId {
        self.reg.add_observer(target, listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.reg.remove(id);
    }
}

#[test]
fn subscription_drop_releases_every_registration() {
    let source = Rc::new(Recording {
        reg: ListenerRegistry::new(),
    });
    let dyn_source: Rc<dyn LayoutEventSource> = source.clone();

    let mut sub = Subscription::new(dyn_source.clone());
    let (_, l) = counter();
    sub.push(dyn_source.add_viewport_listener(l.clone()));
    sub.push(dyn_source.observe_size(AnchorKey(9), l));
    assert_eq!(sub.len(), 2);
    assert_eq!(source.reg.len(), 2);

    drop(sub);
    assert!(source.reg.is_empty());
}
