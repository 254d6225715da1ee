//! Bootstrap Service - runs the package-manager and VCS commands that turn
//! the skeleton into a working project.
//!
//! Every command is best effort: a failure is logged and recorded, and the
//! next command still runs.

use std::path::Path;
use std::sync::Arc;

use tracing::{instrument, warn};

use super::provision_service::run_command;
use crate::{
    application::ports::{CommandRunner, SetupObserver},
    domain::{CommandSpec, Phase, StepReport},
};

pub struct BootstrapService {
    runner: Arc<dyn CommandRunner>,
    run_commands: bool,
}

impl BootstrapService {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            run_commands: true,
        }
    }

    pub fn run_commands(mut self, enabled: bool) -> Self {
        self.run_commands = enabled;
        self
    }

    #[instrument(skip_all, fields(root = %root.display(), commands = commands.len()))]
    pub fn bootstrap(
        &self,
        commands: &[CommandSpec],
        root: &Path,
        observer: &dyn SetupObserver,
    ) -> Vec<StepReport> {
        commands
            .iter()
            .map(|command| {
                let name = command.command_line();
                observer.step_started(Phase::Bootstrap, &name);

                let report = if !self.run_commands {
                    StepReport::skipped(name, Phase::Bootstrap, "external commands disabled")
                } else {
                    match run_command(self.runner.as_ref(), command, root) {
                        Ok(()) => StepReport::succeeded(name, Phase::Bootstrap, false),
                        Err(err) => {
                            warn!(command = %name, error = %err, "Bootstrap command failed");
                            StepReport::failed(name, Phase::Bootstrap, false, err.to_string())
                        }
                    }
                };

                observer.step_finished(&report);
                report
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::services::support::{FakeRunner, RecordingObserver};
    use crate::domain::StepStatus;

    fn commands() -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("npm").args(["init", "-y"]),
            CommandSpec::new("npx")
                .args(["tailwindcss", "init", "-p"])
                .in_dir("client"),
            CommandSpec::new("git").arg("init"),
        ]
    }

    #[test]
    fn failures_do_not_stop_later_commands() {
        let runner = FakeRunner::default().failing("npx");
        let service = BootstrapService::new(Arc::new(runner.clone()));

        let reports = service.bootstrap(&commands(), Path::new("site"), &RecordingObserver::default());

        assert_eq!(reports.len(), 3);
        assert!(reports[0].status.is_success());
        assert!(reports[1].status.is_failure());
        assert!(reports[2].status.is_success());
        assert!(reports.iter().all(|r| !r.critical));
        assert_eq!(
            runner.calls(),
            vec![
                ("npm init -y".to_string(), PathBuf::from("site")),
                ("npx tailwindcss init -p".to_string(), PathBuf::from("site/client")),
                ("git init".to_string(), PathBuf::from("site")),
            ]
        );
    }

    #[test]
    fn missing_program_is_a_recorded_failure() {
        let runner = FakeRunner::default().missing("git");
        let reports = BootstrapService::new(Arc::new(runner)).bootstrap(
            &commands(),
            Path::new("site"),
            &RecordingObserver::default(),
        );

        assert!(matches!(
            &reports[2].status,
            StepStatus::Failed { reason } if reason.contains("git init")
        ));
    }

    #[test]
    fn disabled_commands_are_skipped_and_reported() {
        let runner = FakeRunner::default();
        let observer = RecordingObserver::default();

        let reports = BootstrapService::new(Arc::new(runner.clone()))
            .run_commands(false)
            .bootstrap(&commands(), Path::new("site"), &observer);

        assert!(runner.calls().is_empty());
        assert!(reports
            .iter()
            .all(|r| matches!(r.status, StepStatus::Skipped { .. })));
        assert_eq!(observer.started.lock().unwrap().len(), 3);
        assert_eq!(observer.finished.lock().unwrap()[1].name, "npx tailwindcss init -p");
    }
}
