use crate::animation::ease::Ease;

/// Where a beam is within its animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamPhase {
    /// Before the first cycle starts (during `delay`), or permanently for a zero duration.
    Waiting,
    /// First half of a cycle: the segment grows from the start point.
    Drawing,
    /// Second half: the segment's leading edge retreats toward the fixed end point.
    Erasing,
}

/// Animated properties of the foreground curve at one instant.
///
/// `path_length` and `path_offset` are fractions of the curve's arc length; the visible
/// span is `[path_offset, path_offset + path_length]` clipped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RenderState {
    /// Current phase.
    pub phase: BeamPhase,
    /// Zero-based cycle counter (0 while waiting).
    pub cycle: u64,
    /// Drawn fraction of the curve.
    pub path_length: f64,
    /// Fraction skipped at the start of the curve.
    pub path_offset: f64,
    /// Foreground opacity.
    pub opacity: f64,
}

impl RenderState {
    /// Nothing drawn.
    pub const HIDDEN: Self = Self {
        phase: BeamPhase::Waiting,
        cycle: 0,
        path_length: 0.0,
        path_offset: 0.0,
        opacity: 0.0,
    };

    /// Visible arc-length span `(from, to)`.
    pub fn visible_span(&self) -> (f64, f64) {
        let from = self.path_offset.clamp(0.0, 1.0);
        let to = (self.path_offset + self.path_length).clamp(from, 1.0);
        (from, to)
    }

    /// True when anything of the foreground would show.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.path_length > 0.0
    }
}

/// Timing of a beam's loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeamTiming {
    /// Half-cycle length in seconds; one cycle lasts twice as long.
    pub duration_s: f64,
    /// Seconds before the first cycle starts. Later cycles follow with no gap.
    pub delay_s: f64,
    /// Easing inside each half cycle.
    pub ease: Ease,
}

impl Default for BeamTiming {
    fn default() -> Self {
        Self {
            duration_s: 2.0,
            delay_s: 0.0,
            ease: Ease::Linear,
        }
    }
}

impl BeamTiming {
    /// Full cycle length in seconds.
    pub fn cycle_s(self) -> f64 {
        2.0 * self.duration_s
    }

    /// Animation state `t` seconds after the beam started.
    ///
    /// Keyframes over one cycle (progress `p`):
    ///
    /// | p | path_length | opacity | path_offset |
    /// |---|---|---|---|
    /// | 0 | 0 | 0 | 0 |
    /// | 0.5 | 1 | 1 | 0 |
    /// | 1 | 0 | 0 | 1 |
    ///
    /// A non-positive or non-finite duration never shows the beam.
    pub fn sample(self, t: f64) -> RenderState {
        if !(self.duration_s.is_finite() && self.duration_s > 0.0) {
            return RenderState::HIDDEN;
        }
        let delay = if self.delay_s.is_finite() {
            self.delay_s.max(0.0)
        } else {
            0.0
        };

        let local = t - delay;
        if !(local >= 0.0) {
            return RenderState::HIDDEN;
        }

        let cycle_len = self.cycle_s();
        let cycle = (local / cycle_len).floor();
        let p = ((local - cycle * cycle_len) / cycle_len).clamp(0.0, 1.0);
        let cycle = cycle as u64;

        if p < 0.5 {
            let u = self.ease.apply(p * 2.0);
            RenderState {
                phase: BeamPhase::Drawing,
                cycle,
                path_length: u,
                path_offset: 0.0,
                opacity: u,
            }
        } else {
            let u = self.ease.apply((p - 0.5) * 2.0);
            RenderState {
                phase: BeamPhase::Erasing,
                cycle,
                path_length: 1.0 - u,
                path_offset: u,
                opacity: 1.0 - u,
            }
        }
    }
}

/// Time-stepped beam animation: accumulates elapsed time and samples [`BeamTiming`].
#[derive(Clone, Debug)]
pub struct BeamAnimation {
    timing: BeamTiming,
    elapsed_s: f64,
}

impl BeamAnimation {
    /// Start at time zero.
    pub fn new(timing: BeamTiming) -> Self {
        Self {
            timing,
            elapsed_s: 0.0,
        }
    }

    /// The timing being played.
    pub fn timing(&self) -> BeamTiming {
        self.timing
    }

    /// Seconds played so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_s
    }

    /// Advance by `dt_s` seconds (negative or non-finite steps are ignored).
    pub fn advance(&mut self, dt_s: f64) -> RenderState {
        if dt_s.is_finite() && dt_s > 0.0 {
            self.elapsed_s += dt_s;
        }
        self.current()
    }

    /// State at the current time.
    pub fn current(&self) -> RenderState {
        self.timing.sample(self.elapsed_s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/cycle.rs"]
mod tests;
