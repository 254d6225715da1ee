//! Implementation of the `stackseed new` command.
//!
//! Responsibility: load the setup file, assemble a [`SetupRequest`] from the
//! built-in blueprint, run it with real or recording adapters, and display
//! the report. No business logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use stackseed_adapters::{
    LocalFilesystem, MemoryFilesystem, RecordingRunner, ShellRunner,
    blueprint::{self, NEXT_STEPS},
};
use stackseed_core::prelude::{
    ProvisioningPlan, SetupOptions, SetupReport, SetupRequest, SetupService, StepReport,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::LoadedSetup,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackseed new` command.
///
/// Dispatch sequence:
/// 1. Validate the project directory argument
/// 2. Load and validate the setup file (nothing is written before this)
/// 3. Build the provisioning plan and the bootstrap command list
/// 4. Confirm with the user unless `--yes`, `--quiet`, `--dry-run` or JSON output
/// 5. `--dry-run`: run against in-memory adapters and print the plan
/// 6. Otherwise run against the real filesystem and shell
/// 7. Print the report and next steps
#[instrument(skip_all, fields(dir = %args.dir.display()))]
pub fn execute(args: NewArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    validate_project_dir(&args.dir)?;

    let loaded = LoadedSetup::load(global.config.as_deref())?;
    let plan = ProvisioningPlan::from_config(&loaded.setup).map_err(|e| CliError::Core(e.into()))?;

    debug!(
        source = %loaded.source.display(),
        steps = plan.len(),
        "Setup file loaded"
    );

    let request = SetupRequest {
        project: loaded.setup.project.name.clone(),
        layout: blueprint::real_estate_layout(args.dir.clone()),
        plan,
        bootstrap: blueprint::bootstrap_commands(),
        options: SetupOptions {
            skip_provision: args.skip_provision,
            skip_bootstrap: args.skip_bootstrap,
            files_only: args.files_only,
        },
    };

    if !global.quiet && !output.is_json() {
        show_configuration(&request, &loaded.source, output)?;
    }
    let ask = !(args.yes || args.dry_run || global.quiet || output.is_json());
    if ask && !confirm()? {
        return Err(CliError::Cancelled);
    }

    if args.dry_run {
        return dry_run(request, output);
    }

    // Only plain output hands the terminal to child processes.
    let runner = if output.format() == OutputFormat::Plain && !global.quiet {
        ShellRunner::new()
    } else {
        ShellRunner::captured()
    };
    let service = SetupService::new(Arc::new(LocalFilesystem::new()), Arc::new(runner))
        .with_observer(output.observer());

    output.header(&format!("Setting up '{}'...", request.project))?;
    info!(project = %request.project, path = %args.dir.display(), "Setup started");

    let report = service.run(request)?;

    print_report(&report, &args.dir, output)
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_project_dir(dir: &Path) -> CliResult<()> {
    let invalid = |reason: &str| CliError::InvalidProjectDir {
        path: dir.to_path_buf(),
        reason: reason.into(),
    };

    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| invalid("cannot extract a project name from the last component"))?;

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if dir.is_file() {
        return Err(invalid("a file with this name already exists"));
    }
    Ok(())
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_configuration(
    request: &SetupRequest,
    source: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    let steps: Vec<&str> = request.plan.steps().iter().map(|s| s.kind.as_str()).collect();
    let options = &request.options;

    out.header("Configuration")?;
    out.print(&format!("  Project:     {}", request.project))?;
    out.print(&format!("  Location:    {}", request.layout.root().display()))?;
    out.print(&format!("  Setup file:  {}", source.display()))?;
    out.print(&format!(
        "  Layout:      {} directories, {} files",
        request.layout.directories().count(),
        request.layout.files().count()
    ))?;
    out.print(&format!("  Provision:   {}", phase_state(options.skip_provision, &steps.join(", "))))?;
    out.print(&format!(
        "  Bootstrap:   {}",
        phase_state(options.skip_bootstrap, &format!("{} commands", request.bootstrap.len()))
    ))?;
    if options.files_only {
        out.print("  Commands:    disabled (--files-only)")?;
    }
    out.print("")?;
    Ok(())
}

fn phase_state(skipped: bool, detail: &str) -> String {
    if skipped {
        "skipped".to_string()
    } else {
        detail.to_string()
    }
}

#[derive(Serialize)]
struct DryRunPlan<'a> {
    dry_run: bool,
    project: &'a str,
    root: &'a Path,
    directories: Vec<PathBuf>,
    files: Vec<PathBuf>,
    commands: Vec<String>,
    steps: &'a [StepReport],
}

/// Run the whole request against in-memory adapters and show what it did.
fn dry_run(request: SetupRequest, output: &OutputManager) -> CliResult<()> {
    let filesystem = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    let project = request.project.clone();
    let root = request.layout.root().to_path_buf();

    let report = SetupService::new(Arc::new(filesystem.clone()), Arc::new(runner.clone()))
        .run(request)?;

    let plan = DryRunPlan {
        dry_run: true,
        project: &project,
        root: &root,
        directories: filesystem.list_directories(),
        files: filesystem.list_files(),
        commands: runner.command_lines(),
        steps: &report.steps,
    };

    if output.is_json() {
        output.json(&plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {} directories and write {} files under {}",
        plan.directories.len(),
        plan.files.len(),
        root.display()
    ))?;
    for file in &plan.files {
        output.print(&format!("  {}", file.display()))?;
    }

    if plan.commands.is_empty() {
        output.info("No external commands would run")?;
    } else {
        output.info(&format!("Would run {} commands:", plan.commands.len()))?;
        for command in &plan.commands {
            output.print(&format!("  $ {command}"))?;
        }
    }
    Ok(())
}

fn print_report(report: &SetupReport, dir: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    let elapsed = report.elapsed().map(format_elapsed).unwrap_or_default();
    if report.failed() == 0 {
        output.success(&format!(
            "Project '{}' is ready at {} ({elapsed})",
            report.project,
            dir.display()
        ))?;
    } else {
        output.warning(&format!(
            "Setup finished with {} failed step(s) ({elapsed})",
            report.failed()
        ))?;
        for step in report.steps.iter().filter(|s| s.status.is_failure()) {
            output.warning(&format!("  [{}] {}", step.phase, step.name))?;
        }
    }
    output.info(&format!(
        "{} succeeded, {} failed, {} skipped",
        report.succeeded(),
        report.failed(),
        report.skipped()
    ))?;

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", dir.display()))?;
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        output.print(&format!("  {}. {step}", i + 1))?;
    }
    Ok(())
}

fn format_elapsed(elapsed: chrono::Duration) -> String {
    let ms = elapsed.num_milliseconds();
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

// ── Confirmation ──────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return confirm_line();
    }

    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "failed to read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    confirm_line()
}

/// `[Y/n]` prompt on stdin; an empty answer means yes.
fn confirm_line() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let input = input.trim().to_ascii_lowercase();
    input.is_empty() || input == "y" || input == "yes"
}

// ── Tests ─────────────────────────────────────────────────────────────────────
