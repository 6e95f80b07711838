use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::{
    foundation::core::{Rect, Size},
    geometry::anchor::{AnchorKey, AnchorRef},
    host::events::{LayoutEventSource, LayoutListener, ListenerId, ListenerRegistry},
};

/// In-memory layout host: a viewport plus a set of positioned regions.
///
/// Implements [`LayoutEventSource`] with browser-like delivery: viewport listeners run on
/// [`Stage::resize_viewport`], size observers run after a batch of rect updates for every
/// observed region whose size changed. Moving a region without resizing it notifies nobody.
pub struct Stage {
    viewport: Cell<Size>,
    regions: RefCell<BTreeMap<AnchorKey, Rc<Cell<Option<Rect>>>>>,
    next_key: Cell<u64>,
    listeners: ListenerRegistry,
}

impl Stage {
    /// An empty stage with the given viewport size.
    pub fn new(viewport: Size) -> Rc<Self> {
        Rc::new(Self {
            viewport: Cell::new(viewport),
            regions: RefCell::new(BTreeMap::new()),
            next_key: Cell::new(1),
            listeners: ListenerRegistry::new(),
        })
    }

    /// Add a region; `None` leaves it unmounted until [`Stage::set_rect`] gives it a rect.
    pub fn insert(&self, rect: Option<Rect>) -> AnchorRef {
        let key = AnchorKey(self.next_key.get());
        self.next_key.set(key.0 + 1);
        let cell = Rc::new(Cell::new(rect));
        self.regions.borrow_mut().insert(key, cell.clone());
        AnchorRef::new(key, cell)
    }

    /// Handle to an existing region.
    pub fn anchor(&self, key: AnchorKey) -> Option<AnchorRef> {
        let cell = self.regions.borrow().get(&key).cloned()?;
        Some(AnchorRef::new(key, cell))
    }

    /// Current rect of a region.
    pub fn rect_of(&self, key: AnchorKey) -> Option<Rect> {
        self.regions.borrow().get(&key).and_then(|c| c.get())
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport.get()
    }

    /// Move, resize, mount (`Some`) or unmount (`None`) one region.
    pub fn set_rect(&self, key: AnchorKey, rect: Option<Rect>) {
        self.set_rects(&[(key, rect)]);
    }

    /// Apply several rect updates as one layout pass, then notify size observers.
    ///
    /// Observers see the whole batch applied, never an intermediate layout.
    #[tracing::instrument(level = "trace", skip(self, updates), fields(updates = updates.len()))]
    pub fn set_rects(&self, updates: &[(AnchorKey, Option<Rect>)]) {
        let mut resized = Vec::new();
        {
            let regions = self.regions.borrow();
            for &(key, rect) in updates {
                let Some(cell) = regions.get(&key) else {
                    tracing::warn!(key = key.0, "rect update for unknown region ignored");
                    continue;
                };
                let before = cell.get().map(|r| r.size());
                cell.set(rect);
                if before != rect.map(|r| r.size()) && !resized.contains(&key) {
                    resized.push(key);
                }
            }
        }
        for key in resized {
            self.listeners.dispatch_resize(key);
        }
    }

    /// Resize the viewport and run viewport listeners.
    pub fn resize_viewport(&self, size: Size) -> usize {
        self.viewport.set(size);
        self.listeners.dispatch_viewport()
    }

    /// Number of live listener registrations.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl LayoutEventSource for Stage {
    fn add_viewport_listener(&self, listener: LayoutListener) -> ListenerId {
        self.listeners.add_viewport(listener)
    }

    fn observe_size(&self, target: AnchorKey, listener: LayoutListener) -> ListenerId {
        self.listeners.add_observer(target, listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/stage.rs"]
mod tests;
