pub mod configuration;
pub mod error;
pub mod simulation;
pub mod visualization;

pub use simulation::states::{Gas, NVec2, Particle, TRACKED};
pub use simulation::params::Parameters;
pub use simulation::boundary::Boundary;
pub use simulation::collision::{resolve_elastic, separate_overlap};
pub use simulation::stepper::{Stepper, FREEZE_WINDOW};
pub use simulation::stats::{SessionReport, TrackedStats, MIN_FREE_PATH};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ChamberConfig, ParametersConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use error::{Error, Result};
