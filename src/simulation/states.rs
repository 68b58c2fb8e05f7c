//! Core state types for the gas simulation.
//!
//! Defines the particle and population structs:
//! - `Particle` using `NVec2` (position, velocity, radius)
//! - `Gas` holding the particle list and the current simulation time `t`
//!
//! Index 0 of `Gas::particles` is the tracked particle whose collisions are
//! statistically logged; it is physically identical to the others.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Index of the tracked particle within [`Gas::particles`].
pub const TRACKED: usize = 0;

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub radius: f64, // disc radius (shared constant across the population)
}

#[derive(Debug, Clone)]
pub struct Gas {
    pub particles: Vec<Particle>, // collection of discs, index 0 tracked
    pub t: f64, // time
}

impl Gas {
    /// Number of particles (constant for the whole run).
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total kinetic energy for unit masses: sum of 1/2 |v|^2 (diagnostic).
    ///
    /// Wall reflections and elastic pair resolutions both preserve speed, so
    /// this is an invariant of the run up to floating-point error.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| 0.5 * p.v.dot(&p.v)).sum()
    }
}
