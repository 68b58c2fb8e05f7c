//! Per-frame orchestrator for the chamber
//!
//! One [`Stepper::step`] call processes a single frame: every particle gets
//! a wall check, then a contact scan against all others that repeats until a
//! full pass finds nothing to resolve, and finally the Euler drift
//! `x += v * dt`. Collisions involving the tracked particle are recorded in
//! [`TrackedStats`] as they are resolved.
//!
//! The contact scan is a fixed-point loop: resolving one pair can create or
//! remove contacts with others, so any firing pair restarts the scan for the
//! current particle. Crowded configurations can in principle keep
//! re-triggering corrections, so the loop carries a pass cap and exposes
//! counters ([`Stepper::scan_passes`], [`Stepper::capped_scans`]) instead of
//! hard-failing.

use log::{debug, warn};

use crate::simulation::boundary::Boundary;
use crate::simulation::collision::{resolve_elastic, separate_overlap};
use crate::simulation::states::{Gas, TRACKED};
use crate::simulation::stats::TrackedStats;

/// Integration is suppressed while less than this much of the observation
/// window remains, so the final configuration stays visible when the run
/// terminates.
pub const FREEZE_WINDOW: f64 = 0.5;

/// Upper bound on re-scan passes per particle per frame.
const MAX_SCAN_PASSES: u32 = 64;

/// Frame driver and fixed-point contact scanner.
///
/// Owns the run clock: the external shell supplies a wall-clock delta once
/// per frame and reads [`Stepper::finished`]; the stepper never reads the
/// clock itself.
#[derive(Debug)]
pub struct Stepper {
    t_end: f64, // observation window length
    elapsed: f64, // time consumed so far
    frames: u64, // frames processed
    scan_passes: u32, // contact-scan passes used by the most recent frame
    capped_scans: u64, // times the pass guard tripped over the whole run
}

impl Stepper {
    pub fn new(t_end: f64) -> Self {
        Self {
            t_end,
            elapsed: 0.0,
            frames: 0,
            scan_passes: 0,
            capped_scans: 0,
        }
    }

    /// True once the elapsed-time budget is exhausted. The run only ends at
    /// frame boundaries; a finished stepper ignores further `step` calls.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.t_end
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames processed so far (the denominator of the collision frequency).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Contact-scan passes consumed by the most recent frame, summed over
    /// all particles. A quiet frame uses exactly one pass per particle.
    pub fn scan_passes(&self) -> u32 {
        self.scan_passes
    }

    /// How often the per-particle pass guard tripped during the run.
    pub fn capped_scans(&self) -> u64 {
        self.capped_scans
    }

    /// Advance the chamber by one frame of length `dt` (seconds, >= 0).
    pub fn step(&mut self, gas: &mut Gas, bounds: &Boundary, stats: &mut TrackedStats, dt: f64) {
        if self.finished() {
            return;
        }
        self.frames += 1;
        self.elapsed += dt;
        stats.tick(dt);
        self.scan_passes = 0;

        // Pairs already resolved this frame. Their positions have not
        // changed, so a second firing would only swap the velocities back.
        let mut resolved: Vec<(usize, usize)> = Vec::new();

        let freeze = self.t_end - self.elapsed < FREEZE_WINDOW;

        for i in 0..gas.len() {
            bounds.reflect(&mut gas.particles[i]);
            self.settle_contacts(gas, bounds, stats, &mut resolved, dt, i);

            // Drift only once the particle's contacts are settled
            if !freeze {
                let p = &mut gas.particles[i];
                p.x += p.v * dt;
            }
        }

        gas.t += dt;
    }

    /// Re-scan particle `i` against all others until a full pass fires no
    /// condition, in the priority order: interpenetration, contact band,
    /// predicted collision next tick.
    fn settle_contacts(
        &mut self,
        gas: &mut Gas,
        bounds: &Boundary,
        stats: &mut TrackedStats,
        resolved: &mut Vec<(usize, usize)>,
        dt: f64,
        i: usize,
    ) {
        let n = gas.len();
        let mut passes: u32 = 0;

        'scan: loop {
            passes += 1;
            if passes > MAX_SCAN_PASSES {
                self.capped_scans += 1;
                warn!("contact scan for particle {i} hit the {MAX_SCAN_PASSES}-pass guard");
                break;
            }

            for j in 0..n {
                if j == i {
                    continue;
                }

                let pi = &gas.particles[i];
                let pj = &gas.particles[j];
                let r = pi.radius;
                let gap = (pj.x - pi.x).norm();

                if gap < 2.0 * r {
                    // Already interpenetrating: positional correction only,
                    // velocities and statistics untouched
                    let (xa, xb) = separate_overlap(pi, pj, bounds);
                    if xa == pi.x && xb == pj.x {
                        // Both pushes wall-blocked, nothing changed: treat
                        // the pair as settled or the scan never goes clean
                        continue;
                    }
                    debug!("overlap {i}-{j}, distance {gap:.3}");
                    gas.particles[i].x = xa;
                    gas.particles[j].x = xb;
                    continue 'scan;
                } else if gap < 2.0 * (r + bounds.tol) {
                    // Contact band: just touching
                    if resolve_pair(gas, stats, resolved, i, j) {
                        debug!("collision {i}-{j}, distance {gap:.3}");
                        continue 'scan;
                    }
                } else {
                    // Neither touching nor overlapping: would the pair pass
                    // through contact within one tick? Anticipates
                    // tunnelling at high relative speed.
                    let ahead_i = pi.x + pi.v * dt;
                    let ahead_j = pj.x + pj.v * dt;
                    if (ahead_j - ahead_i).norm() <= 2.0 * r
                        && resolve_pair(gas, stats, resolved, i, j)
                    {
                        debug!("predicted collision {i}-{j}, distance {gap:.3}");
                        continue 'scan;
                    }
                }
            }

            break; // clean pass, no condition fired
        }

        self.scan_passes += passes;
    }
}

/// Apply the elastic resolution to pair (i, j) unless this frame already
/// resolved it; record a tracked-particle hit when index 0 is involved.
/// Returns whether the pair was actually resolved.
fn resolve_pair(
    gas: &mut Gas,
    stats: &mut TrackedStats,
    resolved: &mut Vec<(usize, usize)>,
    i: usize,
    j: usize,
) -> bool {
    let key = if i < j { (i, j) } else { (j, i) };
    if resolved.contains(&key) {
        return false;
    }
    resolved.push(key);

    let (v1, v2) = resolve_elastic(&gas.particles[i], &gas.particles[j]);
    gas.particles[i].v = v1;
    gas.particles[j].v = v2;

    if i == TRACKED || j == TRACKED {
        // Free-path estimate uses the tracked particle's post-collision speed
        stats.record_hit(gas.particles[TRACKED].v.norm());
    }
    true
}
