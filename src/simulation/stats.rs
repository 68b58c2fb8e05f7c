//! Collision statistics for the tracked particle
//!
//! [`TrackedStats`] accumulates the tracked particle's hit count, a running
//! clock since its last hit, and one free-path sample per hit. At session
//! end [`TrackedStats::report`] turns the raw samples into a
//! [`SessionReport`] for the shell to print.

use std::fmt;

/// Free-path samples below this value are treated as spurious micro-hits
/// produced by the re-scan mechanics and discarded at report time.
pub const MIN_FREE_PATH: f64 = 1.0;

/// Accumulator for the tracked particle's collision log.
///
/// Mutated only by the stepper: `tick` once per frame, `record_hit` whenever
/// a resolved collision involves the tracked particle. The shell reads it
/// once at session end.
#[derive(Debug, Default)]
pub struct TrackedStats {
    hits: u64, // raw hit count, including micro-hits
    frames: u64, // frames observed
    since_last_hit: f64, // running clock, reset on each hit
    free_paths: Vec<f64>, // one distance estimate per hit, chronological
}

impl TrackedStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the between-hit clock by one frame of length `dt`.
    pub fn tick(&mut self, dt: f64) {
        self.frames += 1;
        self.since_last_hit += dt;
    }

    /// Record a hit at the tracked particle's current speed.
    ///
    /// The free-path sample is `elapsed_since_last_hit * speed`: an estimate
    /// that assumes the speed was constant over the interval, not an exact
    /// path length.
    pub fn record_hit(&mut self, speed: f64) {
        self.free_paths.push(self.since_last_hit * speed);
        self.hits += 1;
        self.since_last_hit = 0.0;
    }

    /// Raw hit count, before the micro-hit filter.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Free-path samples recorded so far, in chronological order.
    pub fn free_paths(&self) -> &[f64] {
        &self.free_paths
    }

    /// Summarize the session.
    ///
    /// Samples below [`MIN_FREE_PATH`] are discarded first and the hit count
    /// is recomputed from what remains. Mean free path and collision
    /// frequency are `None` when their denominators are zero (no retained
    /// hits, no frames) rather than dividing by zero.
    pub fn report(&self) -> SessionReport {
        let kept: Vec<f64> = self
            .free_paths
            .iter()
            .copied()
            .filter(|&s| s >= MIN_FREE_PATH)
            .collect();
        let hits = kept.len();

        let mean_free_path = if hits > 0 {
            Some(kept.iter().sum::<f64>() / hits as f64)
        } else {
            None
        };
        let collision_frequency = if self.frames > 0 {
            Some(hits as f64 / self.frames as f64)
        } else {
            None
        };

        SessionReport {
            hits,
            mean_free_path,
            collision_frequency,
        }
    }
}

/// End-of-run summary for the tracked particle.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub hits: usize, // hit count after the micro-hit filter
    pub mean_free_path: Option<f64>, // None: no collisions recorded
    pub collision_frequency: Option<f64>, // hits per frame; None: zero frames
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tracked particle hits: {}", self.hits)?;
        match self.mean_free_path {
            Some(mfp) => writeln!(f, "Mean free path of the tracked particle: {mfp}")?,
            None => writeln!(f, "Tracked particle never collided")?,
        }
        match self.collision_frequency {
            Some(freq) => write!(f, "Collision frequency (hits per frame): {freq}"),
            None => write!(f, "No frames elapsed"),
        }
    }
}
