//! Setup Service - one full run: scaffold, provision, bootstrap.

use std::sync::Arc;

use tracing::{info, info_span};

use super::{BootstrapService, ProvisionService, ScaffoldService};
use crate::{
    application::ports::{CommandRunner, Filesystem, NoopObserver, SetupObserver},
    domain::{CommandSpec, Phase, ProjectLayout, ProvisioningPlan, SetupReport, StepReport},
    error::StackseedResult,
};

/// Phase toggles for a setup run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupOptions {
    pub skip_provision: bool,
    pub skip_bootstrap: bool,
    /// Write files only; every external command is recorded as skipped.
    pub files_only: bool,
}

/// Everything a setup run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct SetupRequest {
    pub project: String,
    pub layout: ProjectLayout,
    pub plan: ProvisioningPlan,
    pub bootstrap: Vec<CommandSpec>,
    pub options: SetupOptions,
}

pub struct SetupService {
    scaffold: ScaffoldService,
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
    observer: Arc<dyn SetupObserver>,
}

impl SetupService {
    pub fn new(filesystem: Arc<dyn Filesystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            scaffold: ScaffoldService::new(Arc::clone(&filesystem)),
            filesystem,
            runner,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SetupObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn run(&self, request: SetupRequest) -> StackseedResult<SetupReport> {
        let mut report = SetupReport::start(&request.project);
        let span = info_span!("setup", run_id = %report.run_id, project = %request.project);
        let _enter = span.enter();

        let SetupRequest {
            layout,
            plan,
            bootstrap,
            options,
            ..
        } = request;
        let root = layout.root().to_path_buf();
        let observer = self.observer.as_ref();

        observer.step_started(Phase::Scaffold, "layout");
        let summary = self.scaffold.scaffold(&layout)?;
        let scaffolded = StepReport::succeeded("layout", Phase::Scaffold, true);
        observer.step_finished(&scaffolded);
        report.record(scaffolded);
        info!(
            files = summary.files_written,
            directories = summary.directories,
            "Project skeleton created"
        );

        if options.skip_provision {
            for step in plan.steps() {
                report.record(self.skip(Phase::Provision, step.kind.as_str(), "--skip-provision"));
            }
        } else {
            let provision =
                ProvisionService::new(Arc::clone(&self.filesystem), Arc::clone(&self.runner))
                    .run_commands(!options.files_only);
            for step in provision.provision(&plan, &root, observer)? {
                report.record(step);
            }
        }

        if options.skip_bootstrap {
            for command in &bootstrap {
                report.record(self.skip(
                    Phase::Bootstrap,
                    &command.command_line(),
                    "--skip-bootstrap",
                ));
            }
        } else {
            let steps = BootstrapService::new(Arc::clone(&self.runner))
                .run_commands(!options.files_only)
                .bootstrap(&bootstrap, &root, observer);
            for step in steps {
                report.record(step);
            }
        }

        let report = report.finish();
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Setup finished"
        );
        Ok(report)
    }

    fn skip(&self, phase: Phase, name: &str, reason: &str) -> StepReport {
        self.observer.step_started(phase, name);
        let report = StepReport::skipped(name, phase, reason);
        self.observer.step_finished(&report);
        report
    }
}
