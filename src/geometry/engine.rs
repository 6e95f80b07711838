use std::{cell::Cell, rc::Rc};

use crate::{
    geometry::anchor::AnchorRef,
    geometry::path::{BeamPath, compute_beam_path},
    host::events::{LayoutEventSource, LayoutListener, Subscription},
};

/// Last published beam path: one writer (layout events), one reader (the renderer).
///
/// Holds only the most recent value; the revision counts publishes.
#[derive(Debug, Default)]
pub struct PathCell {
    value: Cell<Option<BeamPath>>,
    revision: Cell<u64>,
}

impl PathCell {
    /// An empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published path, if any.
    pub fn latest(&self) -> Option<BeamPath> {
        self.value.get()
    }

    /// Number of publishes so far.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    fn publish(&self, path: BeamPath) {
        self.value.set(Some(path));
        self.revision.set(self.revision.get() + 1);
    }
}

/// Keeps a [`BeamPath`] current for three anchors.
///
/// Every trigger (mount, viewport resize, container resize) runs the same
/// [`BeamGeometryEngine::recompute`]. Only the container's size is observed: an endpoint
/// that moves inside a stable container is picked up on the next trigger.
pub struct BeamGeometryEngine {
    container: AnchorRef,
    from: AnchorRef,
    to: AnchorRef,
    curvature: f64,
    output: Rc<PathCell>,
}

impl BeamGeometryEngine {
    /// An engine with an empty output; nothing is computed until the first trigger.
    pub fn new(container: AnchorRef, from: AnchorRef, to: AnchorRef, curvature: f64) -> Self {
        Self {
            container,
            from,
            to,
            curvature,
            output: Rc::new(PathCell::new()),
        }
    }

    /// Shared handle to the published path.
    pub fn output(&self) -> Rc<PathCell> {
        self.output.clone()
    }

    /// Most recently published path.
    pub fn latest(&self) -> Option<BeamPath> {
        self.output.latest()
    }

    /// The container anchor.
    pub fn container(&self) -> &AnchorRef {
        &self.container
    }

    /// Vertical bow of the control point.
    pub fn curvature(&self) -> f64 {
        self.curvature
    }

    /// Measure all three anchors and publish a fresh path.
    ///
    /// A no-op when any anchor is unresolved (the last path is kept). Returns whether a
    /// path was published.
    pub fn recompute(&self) -> bool {
        let path = compute_beam_path(
            self.container.resolve(),
            self.from.resolve(),
            self.to.resolve(),
            self.curvature,
        );
        match path {
            Some(path) => {
                tracing::debug!(
                    container = self.container.key().0,
                    d = %path.to_svg_d(),
                    "beam path recomputed"
                );
                self.output.publish(path);
                true
            }
            None => {
                tracing::trace!(
                    container = self.container.key().0,
                    "anchors unresolved, keeping last path"
                );
                false
            }
        }
    }

    /// Compute once, then recompute on viewport resize and on container resize.
    ///
    /// The listeners hold only a weak reference to the engine; they are released when the
    /// returned [`Subscription`] is dropped.
    pub fn attach(self: &Rc<Self>, events: Rc<dyn LayoutEventSource>) -> Subscription {
        self.recompute();

        let weak = Rc::downgrade(self);
        let on_layout: LayoutListener = Rc::new(move || {
            if let Some(engine) = weak.upgrade() {
                engine.recompute();
            }
        });

        let mut sub = Subscription::new(events.clone());
        sub.push(events.add_viewport_listener(on_layout.clone()));
        sub.push(events.observe_size(self.container.key(), on_layout));
        sub
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/engine.rs"]
mod tests;
