//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - population size and shared disc radius,
//! - initial speed range for the random spawn,
//! - observation window length and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub n: usize, // number of particles
    pub radius: f64, // shared disc radius
    pub speed_min: f64, // minimal initial speed per axis
    pub speed_max: f64, // maximal initial speed per axis
    pub t_end: f64, // observation window length (seconds)
    pub seed: Option<u64>, // deterministic seed; None for nondeterministic runs
}
