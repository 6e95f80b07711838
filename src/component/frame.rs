use crate::{
    component::beam::{AnimatedBeam, BeamHost, BeamProps},
    foundation::core::FrameSize,
    foundation::error::BeamResult,
    foundation::ids::InstanceId,
    geometry::anchor::AnchorRef,
    render::beam::BeamDrawing,
    render::raster::{FrameRGBA, rasterize_surface},
    render::style::BeamStyle,
    render::svg::write_surface,
};

/// A container and the beams drawn inside it, sharing one drawing surface.
pub struct ContainerFrame {
    container: AnchorRef,
    host: BeamHost,
    beams: Vec<AnimatedBeam>,
}

impl ContainerFrame {
    /// An empty frame over `container`.
    pub fn new(container: AnchorRef, host: BeamHost) -> Self {
        Self {
            container,
            host,
            beams: Vec::new(),
        }
    }

    /// The container anchor.
    pub fn container(&self) -> &AnchorRef {
        &self.container
    }

    /// The host beams are mounted on.
    pub fn host(&self) -> &BeamHost {
        &self.host
    }

    /// Mount a beam from `from` to `to`.
    pub fn add_beam(&mut self, from: AnchorRef, to: AnchorRef, style: BeamStyle) -> InstanceId {
        let props = BeamProps {
            container: self.container.clone(),
            from,
            to,
            style,
        };
        let beam = AnimatedBeam::mount(props, &self.host);
        let id = beam.id();
        self.beams.push(beam);
        id
    }

    /// Unmount one beam; returns whether it existed.
    pub fn remove_beam(&mut self, id: InstanceId) -> bool {
        let Some(pos) = self.beams.iter().position(|b| b.id() == id) else {
            return false;
        };
        self.beams.remove(pos).unmount();
        true
    }

    /// Mounted beams in insertion order.
    pub fn beams(&self) -> &[AnimatedBeam] {
        &self.beams
    }

    /// Look up a mounted beam.
    pub fn beam(&self, id: InstanceId) -> Option<&AnimatedBeam> {
        self.beams.iter().find(|b| b.id() == id)
    }

    /// Surface size: the container's current size, zero while it is not mounted.
    ///
    /// Beams holding a stale path (an endpoint went away) never size the surface.
    pub fn size(&self) -> FrameSize {
        self.container
            .resolve()
            .map(FrameSize::of_rect)
            .unwrap_or(FrameSize::ZERO)
    }

    /// Current drawings, in insertion order.
    pub fn drawings(&self) -> Vec<BeamDrawing> {
        self.beams.iter().filter_map(|b| b.drawing()).collect()
    }

    /// The surface as an SVG document.
    pub fn to_svg(&self) -> String {
        write_surface(self.size(), &self.drawings())
    }

    /// The surface as premultiplied RGBA8 pixels.
    pub fn rasterize(&self) -> BeamResult<FrameRGBA> {
        rasterize_surface(self.size(), &self.drawings())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/frame.rs"]
mod tests;
