use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use lqbin::{LqbinReader, core::format_sheet_schema};

use super::load_container;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to lqc.lqbin
    input: PathBuf,

    /// Only print the named sheet (repeatable)
    #[arg(short, long = "sheet")]
    sheets: Vec<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let container = load_container(&LqbinReader::new(), &self.input, &self.sheets)?;

        let mut text = String::new();
        for sheet in &container.sheets {
            writeln!(text, "{}/{}:", sheet.table, sheet.name)?;
            for line in format_sheet_schema(&sheet.schema)?.lines() {
                writeln!(text, "    {line}")?;
            }
        }

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
