pub mod controller;
pub mod state;

#[cfg(test)]
mod controller_test;

pub use controller::{CaptureController, QueryToken};
pub use state::{CaptureState, CapturedImage};
