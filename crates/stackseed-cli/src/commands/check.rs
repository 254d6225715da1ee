//! `stackseed check`: load and validate the setup file, print what a run
//! would use.

use serde::Serialize;
use tracing::instrument;

use stackseed_adapters::ShellRunner;
use stackseed_core::prelude::{ProvisioningPlan, SetupConfig};

use crate::{
    cli::{CheckArgs, GlobalArgs},
    config::LoadedSetup,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Programs the provision and bootstrap phases shell out to.
const TOOLS: &[&str] = &["aws", "certbot", "npm", "npx", "python", "git"];

#[derive(Debug, Serialize)]
struct CheckSummary<'a> {
    valid: bool,
    source: String,
    project: &'a str,
    region: &'a str,
    domains: Vec<&'a str>,
    database: String,
    steps: Vec<StepLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolStatus>>,
}

#[derive(Debug, Serialize)]
struct StepLine {
    name: &'static str,
    required: bool,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct ToolStatus {
    name: &'static str,
    installed: bool,
}

#[instrument(skip_all)]
pub fn execute(args: CheckArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let loaded = LoadedSetup::load(global.config.as_deref())?;
    let plan = ProvisioningPlan::from_config(&loaded.setup).map_err(|e| CliError::Core(e.into()))?;

    let tools = args.tools.then(probe_tools);
    let summary = summarize(&loaded, &plan, tools);

    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    output.success(&format!("Setup file is valid: {}", summary.source))?;
    output.print(&format!("  Project:   {}", summary.project))?;
    output.print(&format!("  Region:    {}", summary.region))?;
    output.print(&format!("  Domains:   {}", summary.domains.join(", ")))?;
    output.print(&format!("  Database:  {}", summary.database))?;
    output.print("")?;
    output.header("Provisioning steps")?;
    for step in &summary.steps {
        let kind = if step.required { "required" } else { "best effort" };
        output.print(&format!("  {:<14} {:<12} {}", step.name, kind, step.description))?;
    }

    if let Some(tools) = &summary.tools {
        output.print("")?;
        output.header("External programs")?;
        for tool in tools {
            if tool.installed {
                output.success(tool.name)?;
            } else {
                output.warning(&format!("{} not found on PATH", tool.name))?;
            }
        }
    }
    Ok(())
}

fn summarize<'a>(
    loaded: &'a LoadedSetup,
    plan: &ProvisioningPlan,
    tools: Option<Vec<ToolStatus>>,
) -> CheckSummary<'a> {
    let setup: &SetupConfig = &loaded.setup;
    CheckSummary {
        valid: true,
        source: loaded.source.display().to_string(),
        project: &setup.project.name,
        region: &setup.cloud.aws.region,
        domains: setup.domains.all().collect(),
        database: redacted_url(setup),
        steps: plan
            .steps()
            .iter()
            .map(|s| StepLine {
                name: s.kind.as_str(),
                required: s.is_required(),
                description: s.kind.description(),
            })
            .collect(),
        tools,
    }
}

fn redacted_url(setup: &SetupConfig) -> String {
    let db = &setup.database;
    format!(
        "postgresql://{}:****@{}:{}/{}",
        db.postgres_user, db.host, db.port, db.postgres_db
    )
}

fn probe_tools() -> Vec<ToolStatus> {
    TOOLS
        .iter()
        .map(|&name| ToolStatus {
            name,
            installed: ShellRunner::is_installed(name),
        })
        .collect()
}
