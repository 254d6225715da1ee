//! `stackseed init`: write a sample setup file.

use std::path::{Path, PathBuf};

use stackseed_core::prelude::SetupConfig;

use crate::{
    cli::InitArgs,
    config::LOCAL_CONFIG_FILE,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "\
# stackseed setup file
#
# Required keys: cloud.aws.access_key, cloud.firebase.project_id,
# database.postgres_user, domains.primary_domain, ssl.email.
# Any value can be overridden with STACKSEED__SECTION__KEY, e.g.
# STACKSEED__SSL__EMAIL=ops@example.com.

";

pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));

    if path.exists() && !args.force {
        output.warning(&format!(
            "Setup file already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    write_sample(&path)?;

    output.success(&format!("Setup file created at {}", path.display()))?;
    output.info("Replace the example values, then run 'stackseed check'")?;
    Ok(())
}

fn write_sample(path: &Path) -> CliResult<()> {
    let body = serde_yaml::to_string(&SetupConfig::sample()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise the sample setup: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    std::fs::write(path, format!("{HEADER}{body}"))
        .with_cli_context(|| format!("Failed to write setup file to '{}'", path.display()))
}
