use std::rc::Rc;

use crate::{
    animation::cycle::{BeamAnimation, RenderState},
    foundation::core::QuadBez,
    foundation::ids::InstanceId,
    geometry::engine::PathCell,
    geometry::path::BeamPath,
    render::style::{BeamStyle, GradientStop},
};

/// Everything needed to draw one beam for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamDrawing {
    /// Owning beam instance.
    pub id: InstanceId,
    /// Full curve; drawn as the static background.
    pub path: BeamPath,
    /// Visible part of the animated foreground, if any.
    pub foreground: Option<QuadBez>,
    /// Animation state the foreground was cut from.
    pub state: RenderState,
    /// Gradient stops in draw order.
    pub stops: [GradientStop; 2],
}

impl BeamDrawing {
    /// Id of this beam's gradient definition.
    pub fn gradient_id(&self) -> String {
        self.id.gradient_id()
    }
}

/// Plays a beam's animation over whatever path the geometry engine last published.
///
/// Geometry and animation are independent: a recompute never resets the clock, and a tick
/// never triggers a recompute.
pub struct BeamRenderer {
    id: InstanceId,
    style: BeamStyle,
    animation: BeamAnimation,
    source: Rc<PathCell>,
}

impl BeamRenderer {
    /// A renderer at time zero reading from `source`.
    pub fn new(id: InstanceId, style: BeamStyle, source: Rc<PathCell>) -> Self {
        Self {
            id,
            animation: BeamAnimation::new(style.timing()),
            style,
            source,
        }
    }

    /// Instance identity.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Beam configuration.
    pub fn style(&self) -> &BeamStyle {
        &self.style
    }

    /// Current animation state.
    pub fn state(&self) -> RenderState {
        self.animation.current()
    }

    /// Seconds played so far.
    pub fn elapsed(&self) -> f64 {
        self.animation.elapsed()
    }

    /// Advance the animation clock.
    pub fn advance(&mut self, dt_s: f64) -> RenderState {
        self.animation.advance(dt_s)
    }

    /// Drawing for the current state and latest path; `None` until a path exists.
    pub fn draw(&self) -> Option<BeamDrawing> {
        let path = self.source.latest()?;
        let state = self.animation.current();
        let foreground = state.is_visible().then(|| {
            let (from, to) = state.visible_span();
            path.segment(from, to)
        });
        Some(BeamDrawing {
            id: self.id,
            path,
            foreground,
            state,
            stops: self.style.gradient_stops(),
        })
    }

    /// Advance, then draw.
    pub fn tick(&mut self, dt_s: f64) -> Option<BeamDrawing> {
        self.advance(dt_s);
        self.draw()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/beam.rs"]
mod tests;
