//! Configuration commands.

use std::io::Write;
use std::path::Path;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Dump the effective configuration as TOML.
pub fn dump<W: Write>(out: &mut W, config: &CliConfig, path: &Path) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
    writeln!(out, "# config.toml ({})", path.display())?;
    write!(out, "{}", toml_str)?;

    Ok(())
}

/// Validate the configuration, printing any warnings.
pub fn validate<W: Write>(out: &mut W, config: &CliConfig) -> CliResult<()> {
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
        writeln!(out, "warning: {}", warning)?;
    }

    writeln!(out, "Configuration is valid.")?;
    Ok(())
}

/// Show the configuration file path.
pub fn path<W: Write>(out: &mut W, path: &Path) -> CliResult<()> {
    writeln!(out, "config: {}", path.display())?;
    Ok(())
}
