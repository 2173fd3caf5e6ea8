pub mod bundle;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod launch_plan;

pub use bundle::{ProjectRoot, bundle_parent, find_project_root};
pub use config::LauncherConfig;
pub use error::AppError;
pub use interpreter::{Interpreter, InterpreterSource, select_interpreter};
pub use launch_plan::LaunchPlan;
