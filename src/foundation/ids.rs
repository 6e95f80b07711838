use std::{
    cell::Cell,
    sync::atomic::{AtomicU64, Ordering},
};

/// Identity of one beam instance.
///
/// Scopes the beam's gradient definition so several beams can share one surface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Element id of this instance's gradient definition.
    pub fn gradient_id(self) -> String {
        format!("beam-gradient-{}", self.0)
    }
}

/// Issues instance ids. Injected so tests and reproducible renders can pin them.
pub trait IdSource {
    /// Return an id not previously returned by this source.
    fn next_id(&self) -> InstanceId;
}

static NEXT_PROCESS_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide counter; the default id source.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessIds;

impl IdSource for ProcessIds {
    fn next_id(&self) -> InstanceId {
        InstanceId(NEXT_PROCESS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Deterministic per-owner counter.
#[derive(Debug)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    /// Start issuing ids at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> InstanceId {
        let id = self.next.get();
        self.next.set(id.wrapping_add(1));
        InstanceId(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
