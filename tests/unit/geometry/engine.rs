use super::*;
use crate::{
    foundation::core::{Point, Rect, Size},
    geometry::anchor::AnchorKey,
    host::stage::Stage,
};

fn square(cx: f64, cy: f64, half: f64) -> Rect {
    Rect::new(cx - half, cy - half, cx + half, cy + half)
}

#[test]
fn recompute_is_idempotent_for_identical_rects() {
    let engine = BeamGeometryEngine::new(
        AnchorRef::fixed(AnchorKey(1), Rect::new(0.0, 0.0, 400.0, 400.0)),
        AnchorRef::fixed(AnchorKey(2), square(50.0, 50.0, 10.0)),
        AnchorRef::fixed(AnchorKey(3), square(350.0, 350.0, 10.0)),
        50.0,
    );
    assert!(engine.recompute());
    let first = engine.latest().unwrap();
    assert!(engine.recompute());
    assert_eq!(engine.latest().unwrap(), first);
    assert_eq!(engine.output().revision(), 2);
}

#[test]
fn unresolved_anchor_keeps_path_empty() {
    let engine = BeamGeometryEngine::new(
        AnchorRef::fixed(AnchorKey(1), Rect::new(0.0, 0.0, 400.0, 400.0)),
        AnchorRef::unresolved(AnchorKey(2)),
        AnchorRef::fixed(AnchorKey(3), square(350.0, 350.0, 10.0)),
        0.0,
    );
    assert!(!engine.recompute());
    assert!(engine.latest().is_none());
    assert_eq!(engine.output().revision(), 0);
}

#[test]
fn unmounting_an_anchor_retains_last_path() {
    let stage = Stage::new(Size::new(800.0, 600.0));
    let container = stage.insert(Some(Rect::new(0.0, 0.0, 400.0, 400.0)));
    let from = stage.insert(Some(square(50.0, 50.0, 10.0)));
    let to = stage.insert(Some(square(350.0, 350.0, 10.0)));
    let engine = BeamGeometryEngine::new(container, from.clone(), to, 0.0);

    assert!(engine.recompute());
    let before = engine.latest();
    stage.set_rect(from.key(), None);
    assert!(!engine.recompute());
    assert_eq!(engine.latest(), before);
}

#[test]
fn attach_recomputes_on_mount_and_layout_events() {
    let stage = Stage::new(Size::new(800.0, 600.0));
    let container = stage.insert(Some(Rect::new(0.0, 0.0, 400.0, 400.0)));
    let from = stage.insert(Some(square(50.0, 50.0, 10.0)));
    let to = stage.insert(Some(square(350.0, 350.0, 10.0)));
    let engine = Rc::new(BeamGeometryEngine::new(
        container.clone(),
        from.clone(),
        to,
        50.0,
    ));

    let sub = engine.attach(stage.clone());
    assert_eq!(sub.len(), 2);
    assert_eq!(engine.latest().unwrap().control, Point::new(200.0, 150.0));

    // Endpoint-only moves are not observed.
    stage.set_rect(from.key(), Some(square(150.0, 50.0, 10.0)));
    assert_eq!(engine.latest().unwrap().start, Point::new(50.0, 50.0));

    // The next trigger picks the move up.
    stage.resize_viewport(Size::new(1024.0, 768.0));
    assert_eq!(engine.latest().unwrap().start, Point::new(150.0, 50.0));

    stage.set_rect(container.key(), Some(Rect::new(0.0, 0.0, 500.0, 400.0)));
    assert_eq!(engine.latest().unwrap().frame.width, 500.0);
    assert_eq!(engine.output().revision(), 3);

    drop(sub);
    assert_eq!(stage.listener_count(), 0);
}

#[test]
fn container_widening_with_fixed_elements_recomputes() {
    let stage = Stage::new(Size::new(1024.0, 768.0));
    let container = stage.insert(Some(Rect::new(0.0, 0.0, 400.0, 400.0)));
    let engine = Rc::new(BeamGeometryEngine::new(
        container.clone(),
        stage.insert(Some(square(50.0, 50.0, 10.0))),
        stage.insert(Some(square(350.0, 350.0, 10.0))),
        50.0,
    ));
    let _sub = engine.attach(stage.clone());
    let before = engine.latest().unwrap();

    stage.set_rect(container.key(), Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
    let after = engine.latest().unwrap();
    assert_eq!(engine.output().revision(), 2);
    assert_eq!(after.frame.width, 800.0);
    assert_eq!((after.start, after.control, after.end), (before.start, before.control, before.end));
}

#[test]
fn early_teardown_before_resolution_releases_listeners() {
    let stage = Stage::new(Size::new(800.0, 600.0));
    let container = stage.insert(None);
    let engine = Rc::new(BeamGeometryEngine::new(
        container,
        stage.insert(None),
        stage.insert(None),
        0.0,
    ));
    let sub = engine.attach(stage.clone());
    assert!(engine.latest().is_none());
    assert_eq!(stage.listener_count(), 2);
    drop(sub);
    assert_eq!(stage.listener_count(), 0);
}

#[test]
fn dropped_engine_is_not_revived_by_events() {
    let stage = Stage::new(Size::new(800.0, 600.0));
    let engine = Rc::new(BeamGeometryEngine::new(
        stage.insert(Some(Rect::new(0.0, 0.0, 10.0, 10.0))),
        stage.insert(Some(Rect::new(0.0, 0.0, 1.0, 1.0))),
        stage.insert(Some(Rect::new(5.0, 5.0, 6.0, 6.0))),
        0.0,
    ));
    let output = engine.output();
    let _sub = engine.attach(stage.clone());
    drop(engine);

    stage.resize_viewport(Size::new(1.0, 1.0));
    assert_eq!(output.revision(), 1);
}
