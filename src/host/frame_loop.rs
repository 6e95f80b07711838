use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::{Rc, Weak},
};

/// Per-frame callback; receives the seconds elapsed since the previous tick.
pub type FrameCallback = Rc<dyn Fn(f64)>;

/// Host-side continuous animation scheduler (the `requestAnimationFrame` role).
///
/// The host calls [`FrameLoop::tick`] at its display cadence; tests call it with synthetic
/// time steps. Callbacks run in registration order.
#[derive(Default)]
pub struct FrameLoop {
    next_id: Cell<u64>,
    callbacks: RefCell<BTreeMap<u64, FrameCallback>>,
    elapsed_s: Cell<f64>,
    ticks: Cell<u64>,
}

impl FrameLoop {
    /// An idle loop.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register `callback` until the returned guard is dropped.
    pub fn request(self: &Rc<Self>, callback: FrameCallback) -> FrameCallbackGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().insert(id, callback);
        FrameCallbackGuard {
            host: Rc::downgrade(self),
            id,
        }
    }

    /// Advance by `dt_s` seconds and run every live callback; returns how many ran.
    ///
    /// Negative or non-finite steps count as zero.
    pub fn tick(&self, dt_s: f64) -> usize {
        let dt_s = if dt_s.is_finite() { dt_s.max(0.0) } else { 0.0 };
        self.elapsed_s.set(self.elapsed_s.get() + dt_s);
        self.ticks.set(self.ticks.get() + 1);

        let ids: Vec<u64> = self.callbacks.borrow().keys().copied().collect();
        let mut ran = 0;
        for id in ids {
            let callback = self.callbacks.borrow().get(&id).cloned();
            if let Some(callback) = callback {
                callback(dt_s);
                ran += 1;
            }
        }
        tracing::trace!(dt_s, ran, "frame tick");
        ran
    }

    /// Number of live callbacks.
    pub fn active(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Total simulated time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_s.get()
    }

    /// Total ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }

    fn cancel(&self, id: u64) {
        self.callbacks.borrow_mut().remove(&id);
    }
}

/// Registration of one frame callback; dropping it cancels the callback.
#[must_use = "the frame callback is cancelled as soon as the guard is dropped"]
pub struct FrameCallbackGuard {
    host: Weak<FrameLoop>,
    id: u64,
}

impl Drop for FrameCallbackGuard {
    fn drop(&mut self) {
        if let Some(host) = self.host.upgrade() {
            host.cancel(self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/frame_loop.rs"]
mod tests;
