use std::fmt;

use crate::{
    foundation::color::Color,
    foundation::core::FrameSize,
    geometry::path::quad_svg_d,
    render::beam::BeamDrawing,
    render::style::{BACKGROUND_STROKE, STROKE_WIDTH},
};

/// Serialize one drawing surface as a standalone SVG document.
///
/// Layout: one `<linearGradient>` per beam in `<defs>`, then every beam's background
/// curve, then every visible foreground segment. Output is a pure function of its inputs.
pub fn write_surface(size: FrameSize, drawings: &[BeamDrawing]) -> String {
    SurfaceSvg { size, drawings }.to_string()
}

struct SurfaceSvg<'a> {
    size: FrameSize,
    drawings: &'a [BeamDrawing],
}

impl fmt::Display for SurfaceSvg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FrameSize { width, height } = self.size;
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}""#
        )?;
        if !self.size.is_empty() {
            write!(f, r#" viewBox="0 0 {width} {height}""#)?;
        }
        f.write_str(" overflow=\"visible\">\n")?;

        if !self.drawings.is_empty() {
            f.write_str("  <defs>\n")?;
            for d in self.drawings {
                write_gradient(f, d)?;
            }
            f.write_str("  </defs>\n")?;
        }

        for d in self.drawings {
            writeln!(
                f,
                r#"  <path d="{path}" stroke="{stroke}" stroke-width="{STROKE_WIDTH}" fill="none" stroke-linecap="round"/>"#,
                path = d.path.to_svg_d(),
                stroke = BACKGROUND_STROKE.to_hex_rgb(),
            )?;
        }

        for d in self.drawings {
            let Some(fg) = d.foreground.as_ref() else {
                continue;
            };
            writeln!(
                f,
                r#"  <path d="{path}" stroke="url(#{id})" stroke-width="{STROKE_WIDTH}" fill="none" stroke-linecap="round" opacity="{opacity}"/>"#,
                path = quad_svg_d(fg),
                id = d.gradient_id(),
                opacity = d.state.opacity,
            )?;
        }

        f.write_str("</svg>\n")
    }
}

fn write_gradient(f: &mut fmt::Formatter<'_>, d: &BeamDrawing) -> fmt::Result {
    writeln!(
        f,
        r#"    <linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="0%" gradientUnits="userSpaceOnUse">"#,
        id = d.gradient_id()
    )?;
    for stop in &d.stops {
        writeln!(
            f,
            r#"      <stop offset="{offset}%"{color}/>"#,
            offset = stop.offset * 100.0,
            color = stop_color_attrs(stop.color),
        )?;
    }
    f.write_str("    </linearGradient>\n")
}

// Alpha goes to `stop-opacity` so renderers without CSS color-function support agree.
fn stop_color_attrs(c: Color) -> String {
    let alpha = c.alpha();
    if alpha >= 1.0 {
        format!(r#" stop-color="{}""#, c.to_hex_rgb())
    } else {
        format!(
            r#" stop-color="{}" stop-opacity="{alpha}""#,
            c.to_hex_rgb()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
