use super::*;

#[test]
fn frame_size_clamps_malformed_edges() {
    assert_eq!(FrameSize::new(-3.0, f64::NAN), FrameSize::ZERO);
    assert_eq!(FrameSize::new(f64::INFINITY, 10.0).width, 0.0);
    assert!(FrameSize::new(0.0, 10.0).is_empty());
    assert!(!FrameSize::new(1.0, 1.0).is_empty());
}

#[test]
fn frame_size_of_rect_uses_edges() {
    let r = Rect::new(10.0, 20.0, 410.0, 220.0);
    assert_eq!(FrameSize::of_rect(r), FrameSize::new(400.0, 200.0));
}

#[test]
fn to_pixels_rounds_up_and_rejects_huge_surfaces() {
    assert_eq!(FrameSize::new(10.2, 3.0).to_pixels().unwrap(), (11, 3));
    assert_eq!(FrameSize::ZERO.to_pixels().unwrap(), (0, 0));
    assert!(FrameSize::new(100_000.0, 1.0).to_pixels().is_err());
}
