use crate::foundation::error::{BeamError, BeamResult};

pub use kurbo::{Point, QuadBez, Rect, Size, Vec2};

/// Largest surface edge (in pixels) the rasterizer will allocate.
pub const MAX_SURFACE_DIM: u32 = 16_384;

/// Dimensions of a drawing surface, in the container's coordinate units.
///
/// Negative or non-finite inputs collapse to zero so a malformed container produces a
/// zero-size surface instead of an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl FrameSize {
    /// The empty surface.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Build a size, clamping negative and non-finite values to zero.
    pub fn new(width: f64, height: f64) -> Self {
        fn sanitize(v: f64) -> f64 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }

        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Size of a container rectangle.
    pub fn of_rect(rect: Rect) -> Self {
        Self::new(rect.width(), rect.height())
    }

    /// True when either edge is zero.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whole-pixel surface dimensions (rounded up).
    pub fn to_pixels(self) -> BeamResult<(u32, u32)> {
        let w = self.width.ceil();
        let h = self.height.ceil();
        let max = f64::from(MAX_SURFACE_DIM);
        if w > max || h > max {
            return Err(BeamError::render(format!(
                "surface size too large: {w}x{h} (max {MAX_SURFACE_DIM}x{MAX_SURFACE_DIM})"
            )));
        }
        Ok((w as u32, h as u32))
    }
}

impl From<Size> for FrameSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
