//! Odometer module split into submodules

mod bounds;
pub mod constants;
mod core;
mod errors;
mod state;

pub use bounds::Bounds;
pub use core::Odometer;
pub use errors::{Exhausted, OdometerError};
