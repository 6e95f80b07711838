use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    animation::ease::Ease,
    foundation::color::Color,
    foundation::ids::{IdSource, InstanceId, ProcessIds},
    geometry::anchor::AnchorRef,
    geometry::engine::{BeamGeometryEngine, PathCell},
    geometry::path::BeamPath,
    host::events::{LayoutEventSource, Subscription},
    host::frame_loop::{FrameCallbackGuard, FrameLoop},
    render::beam::{BeamDrawing, BeamRenderer},
    render::style::BeamStyle,
};

/// Everything a presentation layer passes when it places a beam.
#[derive(Clone, Debug)]
pub struct BeamProps {
    /// Region all coordinates are made relative to.
    pub container: AnchorRef,
    /// Region the beam starts at.
    pub from: AnchorRef,
    /// Region the beam ends at.
    pub to: AnchorRef,
    /// Curvature, timing and colors.
    pub style: BeamStyle,
}

impl BeamProps {
    /// Props with the default style.
    pub fn new(container: AnchorRef, from: AnchorRef, to: AnchorRef) -> Self {
        Self {
            container,
            from,
            to,
            style: BeamStyle::default(),
        }
    }

    /// Set the vertical bow of the control point.
    pub fn curvature(mut self, curvature: f64) -> Self {
        self.style.curvature = curvature;
        self
    }

    /// Set the half-cycle length in seconds.
    pub fn duration(mut self, seconds: f64) -> Self {
        self.style.duration_s = seconds;
        self
    }

    /// Set the delay before the first cycle, in seconds.
    pub fn delay(mut self, seconds: f64) -> Self {
        self.style.delay_s = seconds;
        self
    }

    /// Set both gradient colors.
    pub fn gradient(mut self, start: Color, stop: Color) -> Self {
        self.style.gradient_start_color = start;
        self.style.gradient_stop_color = stop;
        self
    }

    /// Swap the gradient stop order.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.style.reverse = reverse;
        self
    }

    /// Set the half-cycle easing.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.style.ease = ease;
        self
    }
}

/// Host capabilities a beam mounts onto.
#[derive(Clone)]
pub struct BeamHost {
    /// Layout-change notifications.
    pub events: Rc<dyn LayoutEventSource>,
    /// Continuous animation scheduler.
    pub frames: Rc<FrameLoop>,
    /// Issuer of instance ids.
    pub ids: Rc<dyn IdSource>,
}

impl BeamHost {
    /// A host using the process-wide id counter.
    pub fn new(events: Rc<dyn LayoutEventSource>, frames: Rc<FrameLoop>) -> Self {
        Self {
            events,
            frames,
            ids: Rc::new(ProcessIds),
        }
    }

    /// Replace the id source.
    pub fn with_ids(mut self, ids: Rc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }
}

/// One mounted beam: a geometry engine and a renderer wired to a host.
///
/// Frames only advance the animation clock; [`AnimatedBeam::drawing`] combines that clock
/// with whatever path the engine holds at the time of the call, so a layout change is
/// visible before the next frame.
///
/// Dropping the beam (or calling [`AnimatedBeam::unmount`]) cancels its frame callback and
/// releases its layout listeners before returning; nothing it registered runs afterwards.
pub struct AnimatedBeam {
    id: InstanceId,
    engine: Rc<BeamGeometryEngine>,
    renderer: Rc<RefCell<BeamRenderer>>,
    ticks: Rc<Cell<u64>>,
    _layout: Subscription,
    _frame: FrameCallbackGuard,
}

impl AnimatedBeam {
    /// Mount `props` on `host`: compute the path now, then follow layout events and frames.
    #[tracing::instrument(level = "debug", skip_all, fields(curvature = props.style.curvature))]
    pub fn mount(props: BeamProps, host: &BeamHost) -> Self {
        let id = host.ids.next_id();
        let engine = Rc::new(BeamGeometryEngine::new(
            props.container,
            props.from,
            props.to,
            props.style.curvature,
        ));
        let renderer = Rc::new(RefCell::new(BeamRenderer::new(
            id,
            props.style,
            engine.output(),
        )));
        let ticks = Rc::new(Cell::new(0u64));

        let layout = engine.attach(host.events.clone());

        let weak_renderer = Rc::downgrade(&renderer);
        let weak_ticks = Rc::downgrade(&ticks);
        let frame = host.frames.request(Rc::new(move |dt_s| {
            let (Some(renderer), Some(ticks)) = (weak_renderer.upgrade(), weak_ticks.upgrade())
            else {
                return;
            };
            renderer.borrow_mut().advance(dt_s);
            ticks.set(ticks.get() + 1);
        }));

        tracing::debug!(id = id.0, "beam mounted");
        Self {
            id,
            engine,
            renderer,
            ticks,
            _layout: layout,
            _frame: frame,
        }
    }

    /// Instance identity.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Beam configuration.
    pub fn style(&self) -> BeamStyle {
        *self.renderer.borrow().style()
    }

    /// Latest computed path.
    pub fn path(&self) -> Option<BeamPath> {
        self.engine.latest()
    }

    /// Shared handle to the published path (its revision counts recomputations).
    pub fn path_cell(&self) -> Rc<PathCell> {
        self.engine.output()
    }

    /// Current drawing: the latest path under the animation state of the last frame.
    ///
    /// `None` until the first frame has run or while no path has been computed.
    pub fn drawing(&self) -> Option<BeamDrawing> {
        if self.ticks.get() == 0 {
            return None;
        }
        self.renderer.borrow().draw()
    }

    /// Shared counter of frame callbacks served; stops advancing once unmounted.
    pub fn tick_counter(&self) -> Rc<Cell<u64>> {
        self.ticks.clone()
    }

    /// Recompute geometry outside of the layout triggers.
    pub fn recompute(&self) -> bool {
        self.engine.recompute()
    }

    /// Tear the beam down.
    pub fn unmount(self) {
        tracing::debug!(id = self.id.0, "beam unmounted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/beam.rs"]
mod tests;
