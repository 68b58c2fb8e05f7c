//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! chamber run. A scenario consists of:
//!
//! - [`ChamberConfig`]    – the rectangular chamber extents
//! - [`ParametersConfig`] – population size, disc radius, speed range, run length
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! chamber:
//!   left: 290.0             # left wall x
//!   right: 990.0            # right wall x (chamber must be square)
//!   lower: 10.0             # lower wall y
//!   upper: 710.0            # upper wall y
//!
//! parameters:
//!   n: 20                   # number of particles
//!   radius: 35.0            # shared disc radius
//!   speed_min: 20.0         # minimal initial speed per axis
//!   speed_max: 80.0         # maximal initial speed per axis
//!   t_end: 20.0             # observation window (seconds)
//!   seed: 42                # optional; omit for a nondeterministic run
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation (`Scenario`) after validating it.

use serde::Deserialize;

/// Rectangular chamber extents. The simulation requires a square chamber
/// (`right - left == upper - lower`); validation happens at scenario build.
#[derive(Deserialize, Debug, Clone)]
pub struct ChamberConfig {
    pub left: f64,  // left wall x
    pub right: f64, // right wall x
    pub lower: f64, // lower wall y
    pub upper: f64, // upper wall y
}

/// Global numerical and physical parameters for a run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub n: usize,          // number of particles (index 0 is tracked)
    pub radius: f64,       // shared disc radius
    pub speed_min: f64,    // minimal initial speed per axis
    pub speed_max: f64,    // maximal initial speed per axis
    pub t_end: f64,        // observation window length in seconds
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub chamber: ChamberConfig, // chamber walls
    pub parameters: ParametersConfig, // global numerical and physical parameters
}
