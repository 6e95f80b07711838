use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::geometry::anchor::AnchorKey;

/// Callback run when the layout may have changed.
pub type LayoutListener = Rc<dyn Fn()>;

/// Handle of one registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Source of layout-change notifications, injected into the geometry engine.
///
/// A browser host maps this to `window.onresize` and a `ResizeObserver`; tests use a
/// [`crate::Stage`].
pub trait LayoutEventSource {
    /// Run `listener` whenever the viewport is resized.
    fn add_viewport_listener(&self, listener: LayoutListener) -> ListenerId;

    /// Run `listener` whenever the size of the region `target` changes.
    fn observe_size(&self, target: AnchorKey, listener: LayoutListener) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: ListenerId);
}

/// Scoped set of listener registrations; dropping it unregisters all of them.
#[must_use = "listeners are removed as soon as the subscription is dropped"]
pub struct Subscription {
    source: Rc<dyn LayoutEventSource>,
    ids: Vec<ListenerId>,
}

impl Subscription {
    /// An empty subscription against `source`.
    pub fn new(source: Rc<dyn LayoutEventSource>) -> Self {
        Self {
            source,
            ids: Vec::new(),
        }
    }

    /// Take ownership of a registration made on the same source.
    pub fn push(&mut self, id: ListenerId) {
        self.ids.push(id);
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.source.remove_listener(id);
        }
    }
}

/// Listener bookkeeping shared by [`LayoutEventSource`] implementations.
///
/// Dispatch never holds a borrow while a callback runs, so callbacks may register or
/// remove listeners; a listener removed mid-dispatch is not called afterwards.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: Cell<u64>,
    viewport: RefCell<BTreeMap<ListenerId, LayoutListener>>,
    observers: RefCell<BTreeMap<ListenerId, (AnchorKey, LayoutListener)>>,
}

impl ListenerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&self) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        ListenerId(id)
    }

    /// Register a viewport listener.
    pub fn add_viewport(&self, listener: LayoutListener) -> ListenerId {
        let id = self.issue();
        self.viewport.borrow_mut().insert(id, listener);
        id
    }

    /// Register a size observer for `target`.
    pub fn add_observer(&self, target: AnchorKey, listener: LayoutListener) -> ListenerId {
        let id = self.issue();
        self.observers.borrow_mut().insert(id, (target, listener));
        id
    }

    /// Remove a registration of either kind.
    pub fn remove(&self, id: ListenerId) {
        if self.viewport.borrow_mut().remove(&id).is_none() {
            self.observers.borrow_mut().remove(&id);
        }
    }

    /// Total live registrations.
    pub fn len(&self) -> usize {
        self.viewport.borrow().len() + self.observers.borrow().len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every viewport listener; returns how many ran.
    pub fn dispatch_viewport(&self) -> usize {
        let ids: Vec<ListenerId> = self.viewport.borrow().keys().copied().collect();
        let mut ran = 0;
        for id in ids {
            let listener = self.viewport.borrow().get(&id).cloned();
            if let Some(listener) = listener {
                listener();
                ran += 1;
            }
        }
        ran
    }

    /// Run every observer of `target`; returns how many ran.
    pub fn dispatch_resize(&self, target: AnchorKey) -> usize {
        let ids: Vec<ListenerId> = self
            .observers
            .borrow()
            .iter()
            .filter(|(_, (key, _))| *key == target)
            .map(|(id, _)| *id)
            .collect();
        let mut ran = 0;
        for id in ids {
            let listener = self.observers.borrow().get(&id).map(|(_, l)| l.clone());
            if let Some(listener) = listener {
                listener();
                ran += 1;
            }
        }
        ran
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/events.rs"]
mod tests;
