use super::*;
use crate::{
    animation::cycle::BeamPhase,
    foundation::core::{Point, Rect},
    geometry::anchor::{AnchorKey, AnchorRef},
    geometry::engine::BeamGeometryEngine,
};

fn engine(curvature: f64) -> BeamGeometryEngine {
    BeamGeometryEngine::new(
        AnchorRef::fixed(AnchorKey(1), Rect::new(0.0, 0.0, 400.0, 100.0)),
        AnchorRef::fixed(AnchorKey(2), Rect::new(0.0, 40.0, 20.0, 60.0)),
        AnchorRef::fixed(AnchorKey(3), Rect::new(380.0, 40.0, 400.0, 60.0)),
        curvature,
    )
}

#[test]
fn nothing_is_drawn_without_geometry() {
    let e = BeamGeometryEngine::new(
        AnchorRef::unresolved(AnchorKey(1)),
        AnchorRef::unresolved(AnchorKey(2)),
        AnchorRef::unresolved(AnchorKey(3)),
        0.0,
    );
    let mut r = BeamRenderer::new(InstanceId(1), BeamStyle::default(), e.output());
    assert!(r.tick(1.0).is_none());
    assert_eq!(r.elapsed(), 1.0);
}

#[test]
fn foreground_follows_animation_state() {
    let e = engine(0.0);
    e.recompute();
    let mut r = BeamRenderer::new(InstanceId(4), BeamStyle::default(), e.output());

    let d = r.tick(0.0).unwrap();
    assert_eq!(d.state.phase, BeamPhase::Drawing);
    assert!(d.foreground.is_none());
    assert_eq!(d.gradient_id(), "beam-gradient-4");

    let d = r.tick(2.0).unwrap();
    let fg = d.foreground.unwrap();
    assert_eq!(fg.p0, d.path.start);
    assert_eq!(fg.p2, d.path.end);

    let d = r.tick(1.0).unwrap();
    assert_eq!(d.state.phase, BeamPhase::Erasing);
    let fg = d.foreground.unwrap();
    assert_eq!(fg.p2, d.path.end, "end stays fixed while erasing");
    assert!((fg.p0.x - 200.0).abs() < 1e-3);
}

#[test]
fn renderer_reads_latest_published_path() {
    let e = engine(10.0);
    let mut r = BeamRenderer::new(InstanceId(1), BeamStyle::default(), e.output());
    assert!(r.tick(0.5).is_none());

    e.recompute();
    let d = r.tick(0.5).unwrap();
    assert_eq!(d.path.start, Point::new(10.0, 50.0));
    assert_eq!(d.path.control, Point::new(200.0, 40.0));
    assert_eq!(r.elapsed(), 1.0, "a recompute does not reset the clock");
}

#[test]
fn reverse_changes_colors_not_geometry() {
    let e = engine(30.0);
    e.recompute();
    let plain = BeamRenderer::new(InstanceId(1), BeamStyle::default(), e.output());
    let reversed = BeamRenderer::new(
        InstanceId(2),
        BeamStyle {
            reverse: true,
            ..BeamStyle::default()
        },
        e.output(),
    );

    let a = plain.draw().unwrap();
    let b = reversed.draw().unwrap();
    assert_eq!(a.path.start, b.path.start);
    assert_eq!(a.path.end, b.path.end);
    assert_eq!(a.stops[0].color, b.stops[1].color);
    assert_eq!(a.stops[1].color, b.stops[0].color);
}
