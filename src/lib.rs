//! Beamline draws animated curved connectors ("beams") between rectangular layout anchors.
//!
//! The crate is toolkit-agnostic. A host supplies rects and layout events; beamline supplies:
//!
//! - a [`BeamGeometryEngine`] that keeps a quadratic [`BeamPath`] current as anchors move
//! - a [`BeamRenderer`] that plays a looping draw-in / draw-out animation over that path
//! - an [`AnimatedBeam`] component wiring both to a [`LayoutEventSource`] and a [`FrameLoop`]
//! - SVG and RGBA output for a [`ContainerFrame`] holding any number of beams
//!
//! [`Stage`] is a small in-memory layout host, and [`SceneDef`] / [`MountedScene`] load and drive
//! whole scenes from JSON. See [`guide`] for an end-to-end walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod component;
mod encode;
mod foundation;
mod geometry;
mod host;
mod render;
mod scene;

/// Architecture and usage walkthrough.
pub mod guide;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{FrameSize, MAX_SURFACE_DIM, Point, QuadBez, Rect, Size, Vec2};
pub use crate::foundation::error::{BeamError, BeamResult};
pub use crate::foundation::ids::{IdSource, InstanceId, ProcessIds, SequentialIds};

pub use crate::geometry::anchor::{AnchorKey, AnchorRef, RectProvider};
pub use crate::geometry::engine::{BeamGeometryEngine, PathCell};
pub use crate::geometry::path::{BeamPath, compute_beam_path, quad_svg_d};

pub use crate::host::events::{
    LayoutEventSource, LayoutListener, ListenerId, ListenerRegistry, Subscription,
};
pub use crate::host::frame_loop::{FrameCallback, FrameCallbackGuard, FrameLoop};
pub use crate::host::stage::Stage;

pub use crate::animation::cycle::{BeamAnimation, BeamPhase, BeamTiming, RenderState};
pub use crate::animation::ease::Ease;

pub use crate::render::beam::{BeamDrawing, BeamRenderer};
pub use crate::render::raster::{FrameRGBA, rasterize_surface, rasterize_svg};
pub use crate::render::style::{
    BACKGROUND_STROKE, BeamStyle, DEFAULT_START_COLOR, DEFAULT_STOP_COLOR, GradientStop,
    STROKE_WIDTH,
};
pub use crate::render::svg::write_surface;

pub use crate::component::beam::{AnimatedBeam, BeamHost, BeamProps};
pub use crate::component::frame::ContainerFrame;

pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::scene::model::{BeamDef, RectDef, SceneDef, ViewportDef};
pub use crate::scene::mount::MountedScene;
