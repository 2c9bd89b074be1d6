use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lqbin::LqbinReader;

use super::load_container;

#[derive(Args)]
pub struct ListArgs {
    /// Path to lqc.lqbin
    input: PathBuf,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let container = load_container(&LqbinReader::new(), &self.input, &[])?;

        println!("version: {}", container.version);
        for sheet in &container.sheets {
            println!("{}/{}\t{}", sheet.table, sheet.name, sheet.row_count());
        }
        Ok(())
    }
}
