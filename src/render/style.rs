use crate::{
    animation::cycle::BeamTiming,
    animation::ease::Ease,
    foundation::color::Color,
    foundation::error::{BeamError, BeamResult},
};

/// Stroke color of the static background curve.
pub const BACKGROUND_STROKE: Color = Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff);
/// Stroke width shared by the background and foreground curves.
pub const STROKE_WIDTH: f64 = 2.0;
/// Default gradient start color.
pub const DEFAULT_START_COLOR: Color = Color::from_rgba8(0x9c, 0x40, 0xff, 0xff);
/// Default gradient stop color.
pub const DEFAULT_STOP_COLOR: Color = Color::from_rgba8(0xff, 0xaa, 0x40, 0xff);

/// Configuration of one beam.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeamStyle {
    /// Vertical bow of the control point, in container units (positive bows up).
    pub curvature: f64,
    /// Half-cycle length in seconds.
    pub duration_s: f64,
    /// Seconds before the first cycle.
    pub delay_s: f64,
    /// Color at the gradient's start stop.
    pub gradient_start_color: Color,
    /// Color at the gradient's end stop.
    pub gradient_stop_color: Color,
    /// Swap the gradient stop colors (the path keeps its direction).
    pub reverse: bool,
    /// Easing inside each half cycle.
    pub ease: Ease,
}

impl Default for BeamStyle {
    fn default() -> Self {
        Self {
            curvature: 0.0,
            duration_s: 2.0,
            delay_s: 0.0,
            gradient_start_color: DEFAULT_START_COLOR,
            gradient_stop_color: DEFAULT_STOP_COLOR,
            reverse: false,
            ease: Ease::Linear,
        }
    }
}

/// One color stop of the travel gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

impl BeamStyle {
    /// Loop timing derived from this style.
    pub fn timing(&self) -> BeamTiming {
        BeamTiming {
            duration_s: self.duration_s,
            delay_s: self.delay_s,
            ease: self.ease,
        }
    }

    /// Gradient stops in draw order, honoring `reverse`.
    pub fn gradient_stops(&self) -> [GradientStop; 2] {
        let (first, last) = if self.reverse {
            (self.gradient_stop_color, self.gradient_start_color)
        } else {
            (self.gradient_start_color, self.gradient_stop_color)
        };
        [
            GradientStop {
                offset: 0.0,
                color: first,
            },
            GradientStop {
                offset: 1.0,
                color: last,
            },
        ]
    }

    /// Reject values that cannot come from a sensible configuration.
    ///
    /// The renderer tolerates all of these; validation exists for scene files.
    pub fn validate(&self) -> BeamResult<()> {
        if !self.curvature.is_finite() {
            return Err(BeamError::validation("curvature must be finite"));
        }
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(BeamError::validation("duration must be finite and > 0"));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(BeamError::validation("delay must be finite and >= 0"));
        }
        for (name, c) in [
            ("gradient_start_color", self.gradient_start_color),
            ("gradient_stop_color", self.gradient_stop_color),
        ] {
            if [c.r, c.g, c.b, c.a]
                .iter()
                .any(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
            {
                return Err(BeamError::validation(format!(
                    "{name} channels must be within 0..=1"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/style.rs"]
mod tests;
