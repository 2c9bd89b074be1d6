use std::{
    fs,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use lqbin::core::SheetOutput;

/// Writes each sheet to `<dir>/<sheet>.csv`.
pub struct SheetWriter {
    dir: PathBuf,
}

impl SheetWriter {
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, sheet: &str) -> PathBuf {
        // keep sheet names from escaping the output directory
        let file_name: String = sheet
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.dir.join(format!("{file_name}.csv"))
    }

    pub fn write(&self, output: &SheetOutput) -> Result<PathBuf> {
        let path = self.path_for(&output.name);
        let file =
            fs::File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        output
            .write_to(BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
