//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - numerical parameters (`Parameters`)
//! - the chamber walls (`Boundary`)
//! - the particle population at t = 0 (`Gas`), randomly placed without
//!   overlap, with the tracked particle at the chamber center
//! - the frame driver (`Stepper`) and the tracked-particle log
//!   (`TrackedStats`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and visualization systems (or driven directly in headless mode).

use bevy::prelude::Resource;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::error::{Error, Result};
use crate::simulation::boundary::Boundary;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Gas, NVec2, Particle};
use crate::simulation::stats::TrackedStats;
use crate::simulation::stepper::Stepper;

/// Extra center-to-center clearance required between freshly spawned discs,
/// beyond the contact distance `2 * radius`.
const SPAWN_CLEARANCE: f64 = 5.0;

/// Rejection-sampling attempts per particle before giving up.
const MAX_ATTEMPTS: usize = 100_000;

/// Bevy resource representing a fully-initialized chamber run.
#[derive(Resource, Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub boundary: Boundary,
    pub gas: Gas,
    pub stepper: Stepper,
    pub stats: TrackedStats,
}

impl Scenario {
    /// Validate the configuration and spawn the population.
    ///
    /// Errors with [`Error::InvalidParam`] on a bad configuration and with
    /// [`Error::Placement`] when rejection sampling cannot fit a particle
    /// (chamber too crowded for the requested population and radius).
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters {
            n: cfg.parameters.n,
            radius: cfg.parameters.radius,
            speed_min: cfg.parameters.speed_min,
            speed_max: cfg.parameters.speed_max,
            t_end: cfg.parameters.t_end,
            seed: cfg.parameters.seed,
        };
        validate(&cfg, &parameters)?;

        let c = &cfg.chamber;
        let boundary = Boundary::from_extents(c.left, c.right, c.lower, c.upper, parameters.radius);

        let mut rng: StdRng = match parameters.seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rand::rng().random()),
        };

        // The tracked particle starts at the chamber center
        let mut particles: Vec<Particle> = Vec::with_capacity(parameters.n);
        let center = NVec2::new(
            (boundary.left + boundary.right) / 2.0,
            (boundary.lower + boundary.upper) / 2.0,
        );
        particles.push(Particle {
            x: center,
            v: random_velocity(&mut rng, &parameters),
            radius: parameters.radius,
        });

        // The rest are rejection-sampled to avoid spawn overlap
        for id in 1..parameters.n {
            let x = place_particle(&mut rng, &particles, &boundary, parameters.radius)
                .ok_or_else(|| {
                    Error::Placement(format!(
                        "no room for particle {id} after {MAX_ATTEMPTS} attempts; \
                         try fewer particles or a smaller radius"
                    ))
                })?;
            particles.push(Particle {
                x,
                v: random_velocity(&mut rng, &parameters),
                radius: parameters.radius,
            });
        }

        let stepper = Stepper::new(parameters.t_end);

        Ok(Self {
            parameters,
            boundary,
            gas: Gas { particles, t: 0.0 },
            stepper,
            stats: TrackedStats::new(),
        })
    }
}

fn validate(cfg: &ScenarioConfig, p: &Parameters) -> Result<()> {
    if p.n == 0 {
        return Err(Error::InvalidParam("n must be > 0".into()));
    }
    if !p.radius.is_finite() || p.radius <= 0.0 {
        return Err(Error::InvalidParam("radius must be finite and > 0".into()));
    }
    if !p.speed_min.is_finite() || !p.speed_max.is_finite() || p.speed_min <= 0.0 {
        return Err(Error::InvalidParam("speeds must be finite and > 0".into()));
    }
    if p.speed_min > p.speed_max {
        return Err(Error::InvalidParam("speed_min must not exceed speed_max".into()));
    }
    if !p.t_end.is_finite() || p.t_end <= 0.0 {
        return Err(Error::InvalidParam("t_end must be finite and > 0".into()));
    }

    let c = &cfg.chamber;
    if ![c.left, c.right, c.lower, c.upper].iter().all(|e| e.is_finite()) {
        return Err(Error::InvalidParam("chamber extents must be finite".into()));
    }
    let side_x = c.right - c.left;
    let side_y = c.upper - c.lower;
    if side_x <= 0.0 || side_y <= 0.0 {
        return Err(Error::InvalidParam(
            "chamber requires right > left and upper > lower".into(),
        ));
    }
    if (side_x - side_y).abs() > 1e-9 {
        return Err(Error::InvalidParam("chamber must be square".into()));
    }
    if side_x < 2.0 * p.radius {
        return Err(Error::InvalidParam(
            "chamber side must be at least one particle diameter".into(),
        ));
    }
    Ok(())
}

/// Per-axis speed uniform in [speed_min, speed_max] with a random sign per
/// axis.
fn random_velocity(rng: &mut StdRng, p: &Parameters) -> NVec2 {
    NVec2::new(
        signed_speed(rng, p.speed_min, p.speed_max),
        signed_speed(rng, p.speed_min, p.speed_max),
    )
}

fn signed_speed(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    let speed = rng.random_range(lo..=hi);
    if rng.random_bool(0.5) {
        -speed
    } else {
        speed
    }
}

/// Sample a position with the disc fully inside the walls and clear of all
/// already-placed discs. `None` if `MAX_ATTEMPTS` samples all rejected.
fn place_particle(
    rng: &mut StdRng,
    placed: &[Particle],
    bounds: &Boundary,
    radius: f64,
) -> Option<NVec2> {
    let min_dist = 2.0 * radius + SPAWN_CLEARANCE;
    for _ in 0..MAX_ATTEMPTS {
        let x = NVec2::new(
            rng.random_range(bounds.left + radius..=bounds.right - radius),
            rng.random_range(bounds.lower + radius..=bounds.upper - radius),
        );
        if placed.iter().all(|p| (p.x - x).norm() > min_dist) {
            return Some(x);
        }
    }
    None
}
