//! fixonce-launcher: native entry point for the FixOnce app bundle.
//!
//! Resolves the bundle location, finds the project root by walking up to
//! `scripts/app_launcher.py`, picks a Python interpreter, and execs it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{launch, plan};
pub use domain::{AppError, InterpreterSource, LaunchPlan, LauncherConfig};
