//! Per-step progress display for setup runs.
//!
//! Human mode shows an indicatif spinner while a step runs and replaces it
//! with a one-line result. Plain mode prints only the result lines.

use std::io;
use std::sync::Mutex;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use stackseed_core::prelude::{Phase, SetupObserver, StepReport, StepStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Spinner,
    Lines,
    Silent,
}

pub struct ProgressObserver {
    mode: ProgressMode,
    color: bool,
    current: Mutex<Option<ProgressBar>>,
    term: Term,
}

impl ProgressObserver {
    pub fn new(mode: ProgressMode, color: bool) -> Self {
        Self {
            mode,
            color,
            current: Mutex::new(None),
            term: Term::stdout(),
        }
    }

    fn spinner(phase: Phase, name: &str) -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.dim} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_prefix(format!("[{phase}]"));
        bar.set_message(name.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }
}

impl SetupObserver for ProgressObserver {
    fn step_started(&self, phase: Phase, name: &str) {
        if self.mode != ProgressMode::Spinner {
            return;
        }
        if let Ok(mut slot) = self.current.lock() {
            if let Some(previous) = slot.replace(Self::spinner(phase, name)) {
                previous.finish_and_clear();
            }
        }
    }

    fn step_finished(&self, report: &StepReport) {
        match self.mode {
            ProgressMode::Silent => return,
            ProgressMode::Spinner => {
                if let Ok(mut slot) = self.current.lock() {
                    if let Some(bar) = slot.take() {
                        bar.finish_and_clear();
                    }
                }
            }
            ProgressMode::Lines => {}
        }
        let written = self.term.write_line(&describe_step(report, self.color));
        check_written(written, &report.name);
    }
}

/// A closed or broken stdout only costs the progress line.
fn check_written(result: io::Result<()>, step: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, step, "Could not write progress line");
            false
        }
    }
}

/// One-line summary of a finished step.
pub fn describe_step(report: &StepReport, color: bool) -> String {
    let label = format!("[{}] {}", report.phase, report.name);
    match (&report.status, color) {
        (StepStatus::Succeeded, false) => format!("\u{2713} {label}"),
        (StepStatus::Succeeded, true) => format!("{} {label}", "\u{2713}".green().bold()),
        (StepStatus::Failed { reason }, false) => format!("\u{2717} {label}: {reason}"),
        (StepStatus::Failed { reason }, true) => {
            format!("{} {label}: {}", "\u{2717}".red().bold(), reason.red())
        }
        (StepStatus::Skipped { reason }, false) => format!("- {label} (skipped: {reason})"),
        (StepStatus::Skipped { reason }, true) => {
            format!("{} {} {}", "-".dimmed(), label.dimmed(), format!("(skipped: {reason})").dimmed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_name_phase_and_step() {
        let ok = StepReport::succeeded("aws-client", Phase::Provision, false);
        assert_eq!(describe_step(&ok, false), "\u{2713} [provision] aws-client");

        let failed = StepReport::failed("git init", Phase::Bootstrap, false, "exit status 128");
        assert_eq!(
            describe_step(&failed, false),
            "\u{2717} [bootstrap] git init: exit status 128"
        );

        let skipped = StepReport::skipped("certificate", Phase::Provision, "--files-only");
        assert!(describe_step(&skipped, false).ends_with("(skipped: --files-only)"));
    }

    #[test]
    fn failed_progress_write_is_reported_not_fatal() {
        assert!(check_written(Ok(()), "layout"));
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        assert!(!check_written(Err(broken), "layout"));
    }

    #[test]
    fn silent_observer_ignores_events() {
        let observer = ProgressObserver::new(ProgressMode::Silent, false);
        observer.step_started(Phase::Scaffold, "layout");
        observer.step_finished(&StepReport::succeeded("layout", Phase::Scaffold, true));
        assert!(observer.current.lock().unwrap().is_none());
    }

    #[test]
    fn spinner_is_cleared_when_step_finishes() {
        let observer = ProgressObserver::new(ProgressMode::Spinner, false);
        observer.step_started(Phase::Scaffold, "layout");
        assert!(observer.current.lock().unwrap().is_some());

        observer.step_finished(&StepReport::succeeded("layout", Phase::Scaffold, true));
        assert!(observer.current.lock().unwrap().is_none());
    }
}
