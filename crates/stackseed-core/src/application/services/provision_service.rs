//! Provision Service - executes a [`ProvisioningPlan`] against a project root.
//!
//! Steps run in plan order. Within a step, actions run in order and the
//! first failing action ends the step. A failed `Required` step aborts the
//! run; a failed `BestEffort` step is logged and recorded.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, SetupObserver},
    },
    domain::{
        CommandSpec, ComposeFragment, Phase, ProvisionStep, ProvisioningPlan, StepAction,
        StepReport,
    },
    error::{StackseedError, StackseedResult},
};

const COMPOSE_FILE: &str = "docker-compose.yml";

pub struct ProvisionService {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
    run_commands: bool,
}

impl ProvisionService {
    pub fn new(filesystem: Arc<dyn Filesystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            filesystem,
            runner,
            run_commands: true,
        }
    }

    /// When disabled, steps that shell out are recorded as skipped.
    pub fn run_commands(mut self, enabled: bool) -> Self {
        self.run_commands = enabled;
        self
    }

    #[instrument(skip_all, fields(root = %root.display(), steps = plan.len()))]
    pub fn provision(
        &self,
        plan: &ProvisioningPlan,
        root: &Path,
        observer: &dyn SetupObserver,
    ) -> StackseedResult<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(plan.len());

        for step in plan.steps() {
            let name = step.kind.as_str();
            observer.step_started(Phase::Provision, name);

            if step.runs_commands() && !self.run_commands {
                let report = StepReport::skipped(name, Phase::Provision, "external commands disabled");
                observer.step_finished(&report);
                reports.push(report);
                continue;
            }

            match self.execute(step, root) {
                Ok(()) => {
                    info!(step = name, "{}", step.kind.description());
                    let report = StepReport::succeeded(name, Phase::Provision, step.is_required());
                    observer.step_finished(&report);
                    reports.push(report);
                }
                Err(err) if step.is_required() => {
                    let report =
                        StepReport::failed(name, Phase::Provision, true, err.to_string());
                    observer.step_finished(&report);
                    return Err(ApplicationError::StepFailed {
                        step: name.to_string(),
                        reason: err.to_string(),
                    }
                    .into());
                }
                Err(err) => {
                    warn!(step = name, error = %err, "Step failed, continuing");
                    let report =
                        StepReport::failed(name, Phase::Provision, false, err.to_string());
                    observer.step_finished(&report);
                    reports.push(report);
                }
            }
        }

        Ok(reports)
    }

    fn execute(&self, step: &ProvisionStep, root: &Path) -> StackseedResult<()> {
        for action in &step.actions {
            debug!(step = %step.kind, "{action}");
            match action {
                StepAction::WriteFile { path, content } => {
                    let path = root.join(path);
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, content)?;
                }
                StepAction::AppendCompose(fragment) => self.append_compose(fragment, root)?,
                StepAction::Run(command) => run_command(self.runner.as_ref(), command, root)?,
            }
        }
        Ok(())
    }

    fn append_compose(&self, fragment: &ComposeFragment, root: &Path) -> StackseedResult<()> {
        let path = root.join(COMPOSE_FILE);
        let existing = if self.filesystem.exists(&path) {
            self.filesystem.read_to_string(&path)?
        } else {
            String::new()
        };

        match fragment.merge_into(&existing) {
            Some(doc) => self.filesystem.write_file(&path, &doc),
            None => {
                debug!(service = %fragment.service, "Compose service already present");
                Ok(())
            }
        }
    }
}

/// Run one command relative to `root`, mapping an unsuccessful exit to an error.
pub(crate) fn run_command(
    runner: &dyn CommandRunner,
    command: &CommandSpec,
    root: &Path,
) -> StackseedResult<()> {
    let cwd = if command.working_dir.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(&command.working_dir)
    };
    let outcome = runner.run(command, &cwd)?;

    if outcome.success {
        if !command.success_message.is_empty() {
            info!("{}", command.success_message);
        }
        return Ok(());
    }

    if !command.failure_message.is_empty() {
        warn!(status = %outcome.describe(), "{}", command.failure_message);
    }
    Err(StackseedError::Application(ApplicationError::CommandFailed {
        command: command.command_line(),
        status: outcome.describe(),
    }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::{
        NoopObserver,
        ports::MockFilesystem,
        services::support::{FakeFilesystem, FakeRunner, RecordingObserver},
    };
    use crate::domain::{
        COMPOSE_HEADER, CommandOutcome, Criticality, SetupConfig, StepKind, StepStatus,
    };

    fn sample_plan() -> ProvisioningPlan {
        ProvisioningPlan::from_config(&SetupConfig::sample()).unwrap()
    }

    fn service(fs: &FakeFilesystem, runner: &FakeRunner) -> ProvisionService {
        ProvisionService::new(Arc::new(fs.clone()), Arc::new(runner.clone()))
    }

    #[test]
    fn full_plan_writes_files_and_runs_commands() {
        let fs = FakeFilesystem::default();
        let runner = FakeRunner::default();

        let reports = service(&fs, &runner)
            .provision(&sample_plan(), Path::new("site"), &NoopObserver)
            .unwrap();

        assert_eq!(reports.len(), 6);
        assert!(reports.iter().all(|r| r.status.is_success()));
        assert!(fs.file("site/.firebaserc").is_some());
        assert!(fs.file("site/server/.env.database").is_some());
        assert!(fs.is_dir("site/.github/workflows"));

        let programs: Vec<_> = runner
            .calls()
            .into_iter()
            .map(|(line, cwd)| (line.split(' ').next().unwrap_or_default().to_string(), cwd))
            .collect();
        assert_eq!(
            programs,
            vec![
                ("aws".to_string(), PathBuf::from("site")),
                ("certbot".to_string(), PathBuf::from("site")),
            ]
        );
    }

    #[test]
    fn compose_fragments_follow_header_in_order() {
        let fs = FakeFilesystem::default();
        fs.put("site/docker-compose.yml", COMPOSE_HEADER);

        service(&fs, &FakeRunner::default())
            .provision(&sample_plan(), Path::new("site"), &NoopObserver)
            .unwrap();

        let doc = fs.file("site/docker-compose.yml").unwrap();
        assert!(doc.starts_with(COMPOSE_HEADER));
        let postgres = doc.find("stackseed:postgres").unwrap();
        let prometheus = doc.find("stackseed:prometheus").unwrap();
        let grafana = doc.find("stackseed:grafana").unwrap();
        assert!(postgres < prometheus && prometheus < grafana);
    }

    #[test]
    fn second_run_does_not_duplicate_services() {
        let fs = FakeFilesystem::default();
        let svc = service(&fs, &FakeRunner::default());

        svc.provision(&sample_plan(), Path::new("site"), &NoopObserver)
            .unwrap();
        let first = fs.file("site/docker-compose.yml").unwrap();
        svc.provision(&sample_plan(), Path::new("site"), &NoopObserver)
            .unwrap();

        assert_eq!(fs.file("site/docker-compose.yml").unwrap(), first);
        assert_eq!(first.matches("container_name:").count(), 3);
    }

    #[test]
    fn best_effort_failures_are_recorded_and_run_continues() {
        let fs = FakeFilesystem::default();
        let runner = FakeRunner::default().failing("aws").missing("certbot");

        let reports = service(&fs, &runner)
            .provision(&sample_plan(), Path::new("site"), &NoopObserver)
            .unwrap();

        let aws = &reports[0];
        assert!(matches!(&aws.status, StepStatus::Failed { reason } if reason.contains("exit status 1")));
        assert!(!aws.critical);

        let cert = reports
            .iter()
            .find(|r| r.name == StepKind::Certificate.as_str())
            .unwrap();
        assert!(matches!(&cert.status, StepStatus::Failed { reason } if reason.contains("Could not run")));

        // steps after the failures still ran
        assert!(fs.file("site/.github/workflows/ci.yml").is_some());
    }

    #[test]
    fn required_failure_aborts_remaining_steps() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        let runner = FakeRunner::default();
        let observer = RecordingObserver::default();

        let err = ProvisionService::new(Arc::new(fs), Arc::new(runner.clone()))
            .provision(&sample_plan(), Path::new("site"), &observer)
            .unwrap_err();

        assert!(matches!(
            err,
            StackseedError::Application(ApplicationError::StepFailed { ref step, .. })
                if step == "firebase-app"
        ));
        // aws ran, certbot never did
        assert_eq!(runner.calls().len(), 1);
        let finished = observer.finished.lock().unwrap();
        assert_eq!(finished.len(), 2);
        assert!(finished[1].critical);
    }

    #[test]
    fn disabled_commands_skip_shelling_steps() {
        let fs = FakeFilesystem::default();
        let runner = FakeRunner::default();

        let reports = service(&fs, &runner)
            .run_commands(false)
            .provision(&sample_plan(), Path::new("site"), &NoopObserver)
            .unwrap();

        assert!(runner.calls().is_empty());
        let skipped: Vec<_> = reports
            .iter()
            .filter(|r| matches!(r.status, StepStatus::Skipped { .. }))
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(skipped, vec!["aws-client", "certificate"]);
        assert!(fs.file_count() > 0);
    }

    #[test]
    fn commands_run_in_their_working_directory() {
        let mut runner = crate::application::ports::MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, cwd| cmd.program == "npm" && cwd == Path::new("site/client"))
            .times(1)
            .returning(|_, _| Ok(CommandOutcome::success()));

        let plan = ProvisioningPlan::new(vec![ProvisionStep {
            kind: StepKind::CiPipeline,
            criticality: Criticality::BestEffort,
            actions: vec![StepAction::Run(
                CommandSpec::new("npm").arg("ci").in_dir("client"),
            )],
        }]);

        let reports = ProvisionService::new(Arc::new(FakeFilesystem::default()), Arc::new(runner))
            .provision(&plan, Path::new("site"), &NoopObserver)
            .unwrap();
        assert!(reports[0].status.is_success());
    }
}
