use std::{cell::Cell, fmt, rc::Rc};

use crate::foundation::core::Rect;

/// Capability for measuring a rectangular region on screen.
///
/// Implemented by whatever toolkit hosts the beams. Rects are in viewport coordinates
/// (origin top-left, x right, y down).
pub trait RectProvider {
    /// Current bounding rect, or `None` while the region is not mounted.
    fn rect(&self) -> Option<Rect>;
}

impl RectProvider for Cell<Option<Rect>> {
    fn rect(&self) -> Option<Rect> {
        self.get()
    }
}

/// A region whose rect never changes.
#[derive(Clone, Copy, Debug)]
struct FixedRect(Option<Rect>);

impl RectProvider for FixedRect {
    fn rect(&self) -> Option<Rect> {
        self.0
    }
}

/// Stable identity of an anchored region, used by event sources to address observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorKey(pub u64);

/// Lazily resolved handle to a rectangular region.
#[derive(Clone)]
pub struct AnchorRef {
    key: AnchorKey,
    provider: Rc<dyn RectProvider>,
}

impl AnchorRef {
    /// Wrap a provider under `key`.
    pub fn new(key: AnchorKey, provider: Rc<dyn RectProvider>) -> Self {
        Self { key, provider }
    }

    /// An anchor that always resolves to `rect`.
    pub fn fixed(key: AnchorKey, rect: Rect) -> Self {
        Self::new(key, Rc::new(FixedRect(Some(rect))))
    }

    /// An anchor that never resolves.
    pub fn unresolved(key: AnchorKey) -> Self {
        Self::new(key, Rc::new(FixedRect(None)))
    }

    /// Identity of the anchored region.
    pub fn key(&self) -> AnchorKey {
        self.key
    }

    /// Measure the region now.
    pub fn resolve(&self) -> Option<Rect> {
        self.provider.rect()
    }

    /// True when the region is currently mounted.
    pub fn is_resolved(&self) -> bool {
        self.resolve().is_some()
    }
}

impl fmt::Debug for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnchorRef")
            .field("key", &self.key)
            .field("rect", &self.resolve())
            .finish()
    }
}
