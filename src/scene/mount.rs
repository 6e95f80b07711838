use std::{collections::BTreeMap, rc::Rc};

use crate::{
    component::beam::BeamHost,
    component::frame::ContainerFrame,
    encode::sink::{FrameSink, SinkConfig},
    foundation::core::{FrameSize, Rect},
    foundation::error::{BeamError, BeamResult},
    foundation::ids::{InstanceId, SequentialIds},
    geometry::anchor::AnchorRef,
    geometry::path::BeamPath,
    host::frame_loop::FrameLoop,
    host::stage::Stage,
    render::raster::FrameRGBA,
    scene::model::SceneDef,
};

/// A validated scene mounted on its own stage and frame loop.
///
/// Instance ids start at 1 per scene so that output is reproducible across runs.
pub struct MountedScene {
    stage: Rc<Stage>,
    frames: Rc<FrameLoop>,
    anchors: BTreeMap<String, AnchorRef>,
    frame: ContainerFrame,
}

impl MountedScene {
    /// Validate `def` and mount every beam.
    #[tracing::instrument(level = "debug", skip_all, fields(anchors = def.anchors.len(), beams = def.beams.len()))]
    pub fn mount(def: &SceneDef) -> BeamResult<Self> {
        def.validate()?;

        let stage = Stage::new(def.viewport_size());
        let frames = FrameLoop::new();
        let container = stage.insert(Some(def.container.to_rect()));
        let anchors: BTreeMap<String, AnchorRef> = def
            .anchors
            .iter()
            .map(|(name, rect)| (name.clone(), stage.insert(rect.map(|r| r.to_rect()))))
            .collect();

        let host = BeamHost::new(stage.clone(), frames.clone())
            .with_ids(Rc::new(SequentialIds::default()));
        let mut frame = ContainerFrame::new(container, host);
        for beam in &def.beams {
            let (Some(from), Some(to)) = (anchors.get(&beam.from), anchors.get(&beam.to)) else {
                return Err(BeamError::validation(format!(
                    "beam {} -> {} references an unknown anchor",
                    beam.from, beam.to
                )));
            };
            frame.add_beam(from.clone(), to.clone(), def.style_for(beam));
        }

        Ok(Self {
            stage,
            frames,
            anchors,
            frame,
        })
    }

    /// The layout host.
    pub fn stage(&self) -> &Rc<Stage> {
        &self.stage
    }

    /// The frame loop driving every beam.
    pub fn frame_loop(&self) -> &Rc<FrameLoop> {
        &self.frames
    }

    /// The container surface.
    pub fn frame(&self) -> &ContainerFrame {
        &self.frame
    }

    /// Handle to a named anchor.
    pub fn anchor(&self, name: &str) -> Option<&AnchorRef> {
        self.anchors.get(name)
    }

    /// Update the container and any named anchors as one layout pass.
    pub fn relayout(
        &self,
        container: Option<Rect>,
        anchors: &[(&str, Option<Rect>)],
    ) -> BeamResult<()> {
        let mut updates = Vec::with_capacity(anchors.len() + 1);
        for &(name, rect) in anchors {
            let anchor = self
                .anchor(name)
                .ok_or_else(|| BeamError::validation(format!("unknown anchor '{name}'")))?;
            updates.push((anchor.key(), rect));
        }
        if let Some(rect) = container {
            updates.push((self.frame.container().key(), Some(rect)));
        }
        self.stage.set_rects(&updates);
        Ok(())
    }

    /// Seconds played so far.
    pub fn elapsed(&self) -> f64 {
        self.frames.elapsed()
    }

    /// Run one frame `dt_s` seconds after the previous one.
    pub fn tick(&self, dt_s: f64) {
        self.frames.tick(dt_s);
    }

    /// Run one frame at absolute time `t_s`; earlier times than now replay the current time.
    pub fn advance_to(&self, t_s: f64) {
        self.tick(t_s - self.elapsed());
    }

    /// Latest path of every beam, in scene order.
    pub fn paths(&self) -> Vec<(InstanceId, Option<BeamPath>)> {
        self.frame
            .beams()
            .iter()
            .map(|b| (b.id(), b.path()))
            .collect()
    }

    /// Surface size.
    pub fn size(&self) -> FrameSize {
        self.frame.size()
    }

    /// Current surface as SVG.
    pub fn to_svg(&self) -> String {
        self.frame.to_svg()
    }

    /// Current surface as pixels.
    pub fn rasterize(&self) -> BeamResult<FrameRGBA> {
        self.frame.rasterize()
    }

    /// Render `count` frames at `fps`, frame `i` at `i / fps` seconds, into `sink`.
    #[tracing::instrument(level = "debug", skip(self, sink))]
    pub fn render_frames(&self, fps: u32, count: u64, sink: &mut dyn FrameSink) -> BeamResult<()> {
        if fps == 0 {
            return Err(BeamError::validation("fps must be > 0"));
        }
        let (width, height) = self.size().to_pixels()?;
        sink.begin(SinkConfig { width, height, fps })?;
        let start = self.elapsed();
        for i in 0..count {
            self.advance_to(start + (i as f64) / f64::from(fps));
            let frame = self.rasterize()?;
            sink.push_frame(i, &frame)?;
        }
        sink.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mount.rs"]
mod tests;
