pub mod states;
pub mod params;
pub mod boundary;
pub mod collision;
pub mod stepper;
pub mod stats;
pub mod scenario;
