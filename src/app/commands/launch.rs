//! The launch sequence: resolve self, find the project root, pick an
//! interpreter, then chdir and exec.
//!
//! Each step either advances or fails with an `AppError`; nothing is
//! mutated before `execute`, so there is nothing to roll back.

use std::convert::Infallible;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, LaunchPlan, bundle_parent, find_project_root, select_interpreter};
use crate::ports::{FileProbe, ProcessHost};

/// Resolve every path the launch needs without touching process state.
pub fn plan<P: FileProbe, H: ProcessHost>(
    ctx: &AppContext<P, H>,
) -> Result<LaunchPlan, AppError> {
    let config = ctx.config();
    let host = ctx.host();
    let probe = ctx.probe();

    let reported = host.current_executable().map_err(AppError::ExecutablePath)?;
    let executable = host
        .canonicalize(&reported)
        .map_err(|source| AppError::Canonicalize { path: reported.clone(), source })?;
    ctx.trace(format_args!("executable {}", executable.display()));

    let start = bundle_parent(&executable, config.bundle_depth);
    ctx.trace(format_args!("searching for {} from {}", config.marker.display(), start.display()));

    let root = find_project_root(&start, &config.marker, config.max_ancestor_levels, |path| {
        probe.is_readable_file(path)
    })
    .ok_or_else(|| AppError::MarkerNotFound {
        marker: config.marker.clone(),
        bundle: config.bundle_name(),
        start: start.clone(),
        levels: config.max_ancestor_levels,
    })?;
    ctx.trace(format_args!("project root {}", root.dir.display()));

    let interpreter =
        select_interpreter(&config.interpreter_candidates, config.fallback_interpreter(), |path| {
            probe.is_executable(path)
        });
    ctx.trace(format_args!("interpreter {}", interpreter.program().to_string_lossy()));

    Ok(LaunchPlan {
        executable,
        bundle_parent: start,
        root: root.dir,
        script: root.script,
        interpreter: PathBuf::from(interpreter.program),
        interpreter_source: interpreter.source,
    })
}

/// Change into the project root and replace the process with the interpreter.
///
/// Never returns `Ok`: on success the process image is gone.
pub fn execute<P: FileProbe, H: ProcessHost>(
    ctx: &AppContext<P, H>,
    plan: &LaunchPlan,
) -> Result<Infallible, AppError> {
    let host = ctx.host();

    host.change_dir(&plan.root)
        .map_err(|source| AppError::ChangeDirectory { path: plan.root.clone(), source })?;

    let [interpreter, script] = plan.argv();
    ctx.trace(format_args!(
        "exec {} {}",
        interpreter.to_string_lossy(),
        script.to_string_lossy()
    ));
    let source = host.replace(interpreter, &plan.script);

    Err(AppError::ReplaceProcess {
        interpreter: interpreter.to_string_lossy().into_owned(),
        source,
    })
}

/// Plan and execute in one go.
pub fn run<P: FileProbe, H: ProcessHost>(
    ctx: &AppContext<P, H>,
) -> Result<Infallible, AppError> {
    let plan = plan(ctx)?;
    execute(ctx, &plan)
}
