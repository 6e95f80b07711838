use super::*;
use crate::{
    animation::cycle::RenderState,
    foundation::core::{Point, QuadBez},
    foundation::ids::InstanceId,
    geometry::path::BeamPath,
    render::style::BeamStyle,
};

fn drawing(id: u64, foreground: bool) -> BeamDrawing {
    let path = BeamPath {
        start: Point::new(50.0, 50.0),
        control: Point::new(200.0, 150.0),
        end: Point::new(350.0, 350.0),
        frame: FrameSize::new(400.0, 400.0),
    };
    let state = RenderState {
        opacity: 0.5,
        path_length: 0.5,
        ..RenderState::HIDDEN
    };
    BeamDrawing {
        id: InstanceId(id),
        path,
        foreground: foreground.then(|| QuadBez::new((50.0, 50.0), (90.0, 70.0), (120.0, 100.0))),
        state,
        stops: BeamStyle::default().gradient_stops(),
    }
}

#[test]
fn surface_contains_background_gradient_and_foreground() {
    let svg = write_surface(FrameSize::new(400.0, 400.0), &[drawing(7, true)]);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400""#));
    assert!(svg.contains(r#"<linearGradient id="beam-gradient-7" x1="0%" y1="0%" x2="100%" y2="0%" gradientUnits="userSpaceOnUse">"#));
    assert!(svg.contains(r##"<stop offset="0%" stop-color="#9c40ff"/>"##));
    assert!(svg.contains(r##"<stop offset="100%" stop-color="#ffaa40"/>"##));
    assert!(svg.contains(r##"<path d="M 50,50 Q 200,150 350,350" stroke="#e5e7eb" stroke-width="2" fill="none" stroke-linecap="round"/>"##));
    assert!(svg.contains(r#"<path d="M 50,50 Q 90,70 120,100" stroke="url(#beam-gradient-7)" stroke-width="2" fill="none" stroke-linecap="round" opacity="0.5"/>"#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn hidden_foreground_is_omitted() {
    let svg = write_surface(FrameSize::new(400.0, 400.0), &[drawing(1, false)]);
    assert!(svg.contains("stroke=\"#e5e7eb\""));
    assert!(!svg.contains("url(#beam-gradient-1)"));
}

#[test]
fn translucent_stops_use_stop_opacity() {
    let mut d = drawing(2, true);
    d.stops[0].color = crate::foundation::color::Color::parse("rgba(59, 130, 246, 0.5)").unwrap();
    let svg = write_surface(FrameSize::new(10.0, 10.0), &[d]);
    assert!(svg.contains(r##"stop-color="#3b82f6" stop-opacity="0.5""##));
}

#[test]
fn empty_surface_has_no_viewbox_or_defs() {
    let svg = write_surface(FrameSize::ZERO, &[]);
    assert!(svg.contains(r#"width="0" height="0""#));
    assert!(!svg.contains("viewBox"));
    assert!(!svg.contains("<defs>"));
}

#[test]
fn output_is_deterministic() {
    let ds = [drawing(1, true), drawing(2, false)];
    assert_eq!(
        write_surface(FrameSize::new(400.0, 400.0), &ds),
        write_surface(FrameSize::new(400.0, 400.0), &ds)
    );
}

#[test]
fn document_layout_is_exact() {
    let svg = write_surface(FrameSize::new(400.0, 400.0), &[drawing(3, false)]);
    let expected = concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400" overflow="visible">"#,
        "\n",
        "  <defs>\n",
        r#"    <linearGradient id="beam-gradient-3" x1="0%" y1="0%" x2="100%" y2="0%" gradientUnits="userSpaceOnUse">"#,
        "\n",
        r##"      <stop offset="0%" stop-color="#9c40ff"/>"##,
        "\n",
        r##"      <stop offset="100%" stop-color="#ffaa40"/>"##,
        "\n",
        "    </linearGradient>\n",
        "  </defs>\n",
        r##"  <path d="M 50,50 Q 200,150 350,350" stroke="#e5e7eb" stroke-width="2" fill="none" stroke-linecap="round"/>"##,
        "\n",
        "</svg>\n",
    );
    assert_eq!(svg, expected);
}
