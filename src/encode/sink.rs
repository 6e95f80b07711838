use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::error::{BeamError, BeamResult},
    render::raster::FrameRGBA,
};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second the sequence was sampled at.
    pub fps: u32,
}

/// Consumer of rendered frames in sequence order.
///
/// `push_frame` is called with strictly increasing indices between `begin` and `end`.
pub trait FrameSink {
    /// Prepare for a sequence.
    fn begin(&mut self, cfg: SinkConfig) -> BeamResult<()>;
    /// Accept frame `idx`.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> BeamResult<()>;
    /// Flush and finish the sequence.
    fn end(&mut self) -> BeamResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in sequence order.
    pub frames: Vec<(u64, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the last `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Whether `end` ran since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BeamResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> BeamResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> BeamResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes each frame as `frame_NNNNN.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// A sink writing into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: u64) -> String {
        format!("frame_{idx:05}.png")
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> BeamResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> BeamResult<()> {
        let Some(cfg) = self.cfg else {
            return Err(BeamError::render("push_frame called before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(BeamError::render(format!(
                "frame {idx} is {}x{}, sequence is {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.width == 0 || frame.height == 0 {
            return Err(BeamError::render("cannot encode an empty frame as png"));
        }

        let path = self.dir.join(Self::file_name(idx));
        image::save_buffer_with_format(
            &path,
            &frame.to_straight_rgba8(),
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::trace!(path = %path.display(), "frame written");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> BeamResult<()> {
        tracing::debug!(frames = self.written.len(), dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
