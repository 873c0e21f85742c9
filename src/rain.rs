//! Falling-character backdrop
//!
//! A purely cosmetic animation with its own cadence. It never touches the
//! interpreter; the host only hands it the current size and time, then
//! paints the glyph trail it keeps. Frames closer together than the
//! configured interval are skipped.

use std::collections::VecDeque;
use std::time::Instant;

use crate::config::RainConfig;

/// Characters the drops are drawn from
pub const GLYPHS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '$', '#', '*', '+', '<', '>', '=', '{', '}',
];

/// Opacity kept by a glyph per frame (the backdrop fades 6% per frame)
const FADE_KEEP: f32 = 0.94;
/// Frames after which a glyph is too faint to draw
const MAX_TRAIL_AGE: u32 = 48;
/// Extra random depth a drop may fall below the bottom edge before restarting
const RESTART_JITTER: f32 = 400.0;

/// One character of the trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub x: f32,
    pub y: f32,
    pub ch: char,
    /// Frames since the glyph was drawn
    pub age: u32,
}

impl RainGlyph {
    /// Opacity in `0.0..=1.0`
    pub fn opacity(&self) -> f32 {
        FADE_KEEP.powi(self.age as i32)
    }
}

/// Animation state for the backdrop
#[derive(Debug)]
pub struct MatrixRain {
    config: RainConfig,
    width: f32,
    height: f32,
    /// Current y of each column's drop
    drops: Vec<f32>,
    trail: VecDeque<RainGlyph>,
    last_frame: Option<Instant>,
    rng: fastrand::Rng,
}

impl MatrixRain {
    pub fn new(config: RainConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Deterministic animation, for tests
    pub fn with_seed(config: RainConfig, seed: u64) -> Self {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: RainConfig, rng: fastrand::Rng) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            drops: Vec::new(),
            trail: VecDeque::new(),
            last_frame: None,
            rng,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Recompute the columns for a new surface size; no-op if unchanged
    pub fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let columns = (self.width / self.config.column_width).floor() as usize;
        let max_y = self.height;
        let rng = &mut self.rng;
        self.drops = (0..columns)
            .map(|_| (rng.f32() * max_y).floor())
            .collect();
        self.trail.clear();
        debug!("Backdrop resized to {}x{} ({} columns)", width, height, columns);
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[f32] {
        &self.drops
    }

    /// Glyphs to paint, oldest first
    pub fn trail(&self) -> impl Iterator<Item = &RainGlyph> {
        self.trail.iter()
    }

    /// Advance one frame if the interval has elapsed; returns whether it did
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.config.enabled {
            return false;
        }
        if let Some(last) = self.last_frame {
            if now.saturating_duration_since(last) < self.config.frame_interval() {
                return false;
            }
        }
        self.last_frame = Some(now);

        for glyph in self.trail.iter_mut() {
            glyph.age += 1;
        }
        while self
            .trail
            .front()
            .is_some_and(|glyph| glyph.age >= MAX_TRAIL_AGE)
        {
            self.trail.pop_front();
        }

        let step = self.config.column_width;
        for (i, drop) in self.drops.iter_mut().enumerate() {
            if self.rng.f32() < self.config.skip_probability {
                continue;
            }
            let ch = GLYPHS[self.rng.usize(..GLYPHS.len())];
            let y = *drop;
            self.trail.push_back(RainGlyph {
                x: i as f32 * step,
                y,
                ch,
                age: 0,
            });
            if y > self.height + self.rng.f32() * RESTART_JITTER {
                *drop = 0.0;
            } else {
                *drop = y + step;
            }
        }
        true
    }
}
