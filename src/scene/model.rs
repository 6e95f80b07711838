use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    foundation::color::Color,
    foundation::core::{Rect, Size},
    foundation::error::{BeamError, BeamResult},
    render::style::{BeamStyle, DEFAULT_START_COLOR, DEFAULT_STOP_COLOR},
};

/// An axis-aligned region in viewport coordinates.
///
/// Accepts `{"x":..,"y":..,"width":..,"height":..}` or `[x, y, width, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RectDef {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl<'de> Deserialize<'de> for RectDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 4]),
            Obj {
                x: f64,
                y: f64,
                width: f64,
                height: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y, width, height]) => Ok(Self {
                x,
                y,
                width,
                height,
            }),
            Repr::Obj {
                x,
                y,
                width,
                height,
            } => Ok(Self {
                x,
                y,
                width,
                height,
            }),
        }
    }
}

impl RectDef {
    /// As a kurbo rect.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn validate(&self, what: &str) -> BeamResult<()> {
        if [self.x, self.y, self.width, self.height]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(BeamError::validation(format!("{what}: rect must be finite")));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(BeamError::validation(format!(
                "{what}: width/height must be >= 0"
            )));
        }
        Ok(())
    }
}

impl From<Rect> for RectDef {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x0,
            y: r.y0,
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Viewport dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportDef {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// One beam in a scene file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeamDef {
    /// Anchor name the beam starts at.
    pub from: String,
    /// Anchor name the beam ends at.
    pub to: String,
    /// Vertical bow of the control point.
    #[serde(default)]
    pub curvature: f64,
    /// Half-cycle length in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Seconds before the first cycle.
    #[serde(default)]
    pub delay: f64,
    /// Gradient start color.
    #[serde(default = "default_start_color", alias = "gradientStartColor")]
    pub gradient_start_color: Color,
    /// Gradient stop color.
    #[serde(default = "default_stop_color", alias = "gradientStopColor")]
    pub gradient_stop_color: Color,
    /// Swap the gradient stop order.
    #[serde(default)]
    pub reverse: bool,
    /// Easing; falls back to the scene-wide ease.
    #[serde(default)]
    pub ease: Option<Ease>,
}

fn default_duration() -> f64 {
    2.0
}

fn default_start_color() -> Color {
    DEFAULT_START_COLOR
}

fn default_stop_color() -> Color {
    DEFAULT_STOP_COLOR
}

/// JSON description of a container, named anchors and the beams between them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDef {
    /// Viewport size; defaults to the bounds of every rect in the scene.
    #[serde(default)]
    pub viewport: Option<ViewportDef>,
    /// Region beam coordinates are relative to.
    pub container: RectDef,
    /// Named regions; `null` leaves an anchor unresolved.
    #[serde(default)]
    pub anchors: BTreeMap<String, Option<RectDef>>,
    /// Beams, drawn in list order.
    #[serde(default)]
    pub beams: Vec<BeamDef>,
    /// Default easing for beams that do not set one.
    #[serde(default)]
    pub ease: Ease,
}

impl SceneDef {
    /// Parse a scene from a JSON string.
    pub fn from_json_str(s: &str) -> BeamResult<Self> {
        serde_json::from_str(s).map_err(|e| BeamError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BeamResult<Self> {
        serde_json::from_reader(r).map_err(|e| BeamError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BeamResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BeamError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check rects, anchor references and beam styles.
    pub fn validate(&self) -> BeamResult<()> {
        if let Some(v) = self.viewport
            && !(v.width.is_finite() && v.height.is_finite() && v.width >= 0.0 && v.height >= 0.0)
        {
            return Err(BeamError::validation(
                "viewport width/height must be finite and >= 0",
            ));
        }
        self.container.validate("container")?;
        for (name, rect) in &self.anchors {
            if name.is_empty() {
                return Err(BeamError::validation("anchor names must be non-empty"));
            }
            if let Some(r) = rect {
                r.validate(&format!("anchor '{name}'"))?;
            }
        }
        for (i, beam) in self.beams.iter().enumerate() {
            for name in [&beam.from, &beam.to] {
                if !self.anchors.contains_key(name) {
                    return Err(BeamError::validation(format!(
                        "beam {i} references unknown anchor '{name}'"
                    )));
                }
            }
            self.style_for(beam)
                .validate()
                .map_err(|e| BeamError::validation(format!("beam {i}: {e}")))?;
        }
        Ok(())
    }

    /// Style a beam definition resolves to.
    pub fn style_for(&self, beam: &BeamDef) -> BeamStyle {
        BeamStyle {
            curvature: beam.curvature,
            duration_s: beam.duration,
            delay_s: beam.delay,
            gradient_start_color: beam.gradient_start_color,
            gradient_stop_color: beam.gradient_stop_color,
            reverse: beam.reverse,
            ease: beam.ease.unwrap_or(self.ease),
        }
    }

    /// Declared viewport, or the union of every rect in the scene.
    pub fn viewport_size(&self) -> Size {
        if let Some(v) = self.viewport {
            return Size::new(v.width, v.height);
        }
        let bounds = self
            .anchors
            .values()
            .flatten()
            .fold(self.container.to_rect(), |acc, r| acc.union(r.to_rect()));
        Size::new(bounds.x1.max(0.0), bounds.y1.max(0.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
