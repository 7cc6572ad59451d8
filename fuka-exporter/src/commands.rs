//! Command handlers for the fuka-exporter CLI

use std::path::Path;

use anyhow::Context;
use fuka_level::{read_level_file, write_level_file};
use tracing::info;

/// Print every variable in a level file, in stored order.
pub fn inspect(path: &Path) -> anyhow::Result<()> {
    let level = read_level_file(path)
        .with_context(|| format!("failed to read level file {}", path.display()))?;

    println!("{}: {} variables", path.display(), level.len());
    for variable in &level {
        println!("  {} : length = {}", variable.name, variable.values.len());
    }

    Ok(())
}

/// Read a level file and rewrite it at a new path.
///
/// Rewriting normalizes every variable block to the canonical layout
/// with a newline terminator after each payload.
pub fn copy(input: &Path, output: &Path) -> anyhow::Result<()> {
    let level = read_level_file(input)
        .with_context(|| format!("failed to read level file {}", input.display()))?;

    write_level_file(output, &level)
        .with_context(|| format!("failed to write level file {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        variables = level.len(),
        "copied level file"
    );

    Ok(())
}
