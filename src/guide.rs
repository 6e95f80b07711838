//! # Beamline guide
//!
//! A walkthrough of how a beam goes from three rectangles to pixels.
//!
//! If you only want to render a scene file, start with the repository `README.md` and the
//! `beamline` CLI.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`AnchorRef`](crate::AnchorRef): a lazily resolved rectangle. `None` means "not mounted".
//! - [`BeamGeometryEngine`](crate::BeamGeometryEngine): turns container, start and end rects
//!   into a [`BeamPath`](crate::BeamPath) and publishes it into a [`PathCell`](crate::PathCell).
//! - [`BeamRenderer`](crate::BeamRenderer): reads the latest path on every frame and cuts the
//!   visible foreground segment out of it.
//! - [`AnimatedBeam`](crate::AnimatedBeam): the mounted pair, owning every listener and frame
//!   callback it registered.
//! - [`ContainerFrame`](crate::ContainerFrame): the shared drawing surface for many beams.
//!
//! ## Geometry
//!
//! All coordinates are relative to the container's top-left corner. With `c` the container
//! rect, `a` the start rect and `b` the end rect:
//!
//! ```text
//! start   = center(a) - c.origin
//! end     = center(b) - c.origin
//! control = ((start.x + end.x) / 2, (start.y + end.y) / 2 - curvature)
//! ```
//!
//! Positive curvature bows the curve up (y grows downward). The surface is sized to the
//! container. If any of the three anchors is unresolved, recomputation leaves the previous
//! path in place; before the first successful computation nothing is drawn.
//!
//! ```
//! use beamline::{Point, Rect, compute_beam_path};
//!
//! let path = compute_beam_path(
//!     Some(Rect::new(0.0, 0.0, 400.0, 400.0)),
//!     Some(Rect::new(30.0, 30.0, 70.0, 70.0)),
//!     Some(Rect::new(330.0, 330.0, 370.0, 370.0)),
//!     50.0,
//! )
//! .unwrap();
//! assert_eq!(path.control, Point::new(200.0, 150.0));
//! assert_eq!(path.to_svg_d(), "M 50,50 Q 200,150 350,350");
//! ```
//!
//! ## When geometry is recomputed
//!
//! The engine recomputes when it is attached, when the viewport resizes, and when the
//! container's size changes. Moving only an endpoint is not observed; the new position is
//! picked up by the next of those triggers or by an explicit
//! [`AnimatedBeam::recompute`](crate::AnimatedBeam::recompute).
//!
//! ## Animation
//!
//! A cycle lasts `2 * duration` seconds and starts after `delay` (first cycle only):
//!
//! | progress | path length | opacity | path offset |
//! |---|---|---|---|
//! | 0 → 0.5 | 0 → 1 | 0 → 1 | 0 |
//! | 0.5 → 1 | 1 → 0 | 1 → 0 | 0 → 1 |
//!
//! The head grows from the start point, then the tail retreats toward the fixed end point.
//! Geometry changes never reset the clock.
//!
//! ## Mounting on a host
//!
//! ```
//! use std::rc::Rc;
//! use beamline::{AnimatedBeam, BeamHost, BeamProps, FrameLoop, Rect, SequentialIds, Size, Stage};
//!
//! let stage = Stage::new(Size::new(800.0, 600.0));
//! let frames = FrameLoop::new();
//! let host = BeamHost::new(stage.clone(), frames.clone())
//!     .with_ids(Rc::new(SequentialIds::default()));
//!
//! let container = stage.insert(Some(Rect::new(0.0, 0.0, 400.0, 400.0)));
//! let from = stage.insert(Some(Rect::new(30.0, 30.0, 70.0, 70.0)));
//! let to = stage.insert(Some(Rect::new(330.0, 330.0, 370.0, 370.0)));
//!
//! let beam = AnimatedBeam::mount(BeamProps::new(container, from, to).curvature(50.0), &host);
//! frames.tick(1.0);
//! assert!(beam.drawing().is_some());
//!
//! beam.unmount();
//! assert_eq!(frames.active(), 0);
//! assert_eq!(stage.listener_count(), 0);
//! ```
//!
//! ## Output
//!
//! [`write_surface`](crate::write_surface) emits an SVG document: one gradient per beam in
//! `<defs>` (id `beam-gradient-<instance id>`), a static background curve per beam, then the
//! animated foreground segments. [`rasterize_surface`](crate::rasterize_surface) renders that
//! document with `resvg` into premultiplied RGBA8. A zero-size container yields an empty
//! frame.
//!
//! ## Scenes
//!
//! [`SceneDef`](crate::SceneDef) is the JSON form used by the CLI:
//!
//! ```json
//! {
//!   "container": [0, 0, 400, 400],
//!   "anchors": { "a": [30, 30, 40, 40], "b": [330, 330, 40, 40], "later": null },
//!   "beams": [ { "from": "a", "to": "b", "curvature": 50, "reverse": true } ]
//! }
//! ```
//!
//! [`MountedScene`](crate::MountedScene) validates and mounts it on a fresh stage, with
//! instance ids starting at 1 so repeated renders are identical.
