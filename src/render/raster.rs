use anyhow::Context as _;

use crate::{
    foundation::core::FrameSize,
    foundation::error::{BeamError, BeamResult},
    render::beam::BeamDrawing,
    render::svg::write_surface,
};

/// A rendered surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A transparent frame; zero-sized edges give an empty buffer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
            premultiplied: true,
        }
    }

    /// RGBA8 pixel at `(x, y)`, as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data (what PNG encoders expect).
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Rasterize an SVG document of the given pixel size to premultiplied RGBA8.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> BeamResult<FrameRGBA> {
    if width == 0 || height == 0 {
        return Ok(FrameRGBA::transparent(width, height));
    }

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .context("parse beam surface svg")?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BeamError::render("failed to allocate surface pixmap"))?;

    let size = tree.size();
    let xform = resvg::tiny_skia::Transform::from_scale(
        (width as f32) / size.width(),
        (height as f32) / size.height(),
    );
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// Rasterize a surface of `size` holding `drawings`.
///
/// A zero-size surface yields an empty frame rather than an error.
#[tracing::instrument(level = "debug", skip(drawings), fields(beams = drawings.len()))]
pub fn rasterize_surface(size: FrameSize, drawings: &[BeamDrawing]) -> BeamResult<FrameRGBA> {
    let (width, height) = size.to_pixels()?;
    rasterize_svg(&write_surface(size, drawings), width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
