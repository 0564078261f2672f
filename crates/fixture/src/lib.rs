//! Stimulus fixture tooling for the gshare branch-predictor testbench.
//!
//! The testbench drives the predictor one stimulus record per step, in the
//! order the fixture file lists them. This crate owns the fixture format:
//! [`loader::load`] turns a JSON fixture file into an ordered batch of
//! [`StimulusRecord`]s (or a precise error saying which record and field is
//! wrong), and [`generate::generate`] produces the exhaustive sweep the
//! original input scripts emitted. Driving the RTL model, scoreboarding, and
//! coverage live in the testbench proper, not here.

pub mod generate;
pub mod loader;
pub mod stimulus;

pub use generate::{GenerateConfig, GenerateError, generate};
pub use loader::{FixtureError, FixtureErrorKind, load, parse, save};
pub use stimulus::StimulusRecord;
