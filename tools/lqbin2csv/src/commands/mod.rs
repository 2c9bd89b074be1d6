pub mod convert;
pub mod list;
pub mod schema;

use std::path::Path;

use anyhow::{Context, Result};
use lqbin::{Container, LqbinReader};

/// Read the container and narrow it to `sheets` when any are given.
fn load_container(reader: &LqbinReader, input: &Path, sheets: &[String]) -> Result<Container> {
    let mut container = reader
        .read_container(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    if !sheets.is_empty() {
        container.retain_sheets(sheets)?;
    }
    Ok(container)
}
