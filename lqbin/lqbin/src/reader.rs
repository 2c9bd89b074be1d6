//! Container reader with parallel sheet decoding.

use std::{fs, path::Path};

use lqbin_core::{QuoteStyle, SheetError, SheetOptions, SheetOutput, TextEncoding, decode_sheet};
use memmap2::Mmap;
use rayon::prelude::*;

use crate::{
    container::{Container, Sheet},
    error::LqbinError,
};

/// Reads `lqc.lqbin` files and decodes their sheets.
///
/// Sheets share nothing mutable, so they are decoded concurrently on a
/// rayon pool. A failing sheet does not affect the others.
#[derive(Debug, Clone, Default)]
pub struct LqbinReader {
    options: SheetOptions,
    threads: Option<usize>,
}

/// Builder for configuring [`LqbinReader`].
#[derive(Debug, Clone, Default)]
pub struct LqbinReaderBuilder {
    options: SheetOptions,
    threads: Option<usize>,
}

impl LqbinReader {
    /// Create a builder for [`LqbinReader`].
    pub fn builder() -> LqbinReaderBuilder {
        LqbinReaderBuilder::default()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    fn mmap_file(&self, path: &Path) -> Result<Mmap, LqbinError> {
        let file = fs::File::open(path)?;
        Ok(unsafe { Mmap::map(&file) }?)
    }

    /// Read and decode the container at `path`.
    pub fn read_container(&self, path: &Path) -> Result<Container, LqbinError> {
        let mmap = self.mmap_file(path)?;
        let container = Container::decode(&mmap)?;
        tracing::debug!(
            path = %path.display(),
            version = %container.version,
            sheets = container.sheets.len(),
            "read container"
        );
        Ok(container)
    }

    /// Decode a single sheet.
    pub fn decode_sheet(&self, sheet: &Sheet) -> Result<SheetOutput, SheetError> {
        let output = decode_sheet(&sheet.name, &sheet.schema, &sheet.rows, &self.options)?;
        tracing::debug!(
            table = %sheet.table,
            sheet = %sheet.name,
            rows = sheet.row_count(),
            "decoded sheet"
        );
        Ok(output)
    }

    /// Decode all sheets in parallel and pass each result to `callback` on
    /// the worker that produced it. Callback results are returned in the
    /// order of `sheets`.
    pub fn decode_sheets_with<F, T>(
        &self,
        sheets: &[Sheet],
        callback: F,
    ) -> Result<Vec<T>, LqbinError>
    where
        F: Fn(&Sheet, Result<SheetOutput, SheetError>) -> T + Sync + Send,
        T: Send,
    {
        let run = || -> Vec<T> {
            sheets
                .par_iter()
                .map(|sheet| callback(sheet, self.decode_sheet(sheet)))
                .collect()
        };

        match self.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }

    /// Decode all sheets in parallel, keeping every per-sheet result.
    pub fn decode_sheets(
        &self,
        sheets: &[Sheet],
    ) -> Result<Vec<Result<SheetOutput, SheetError>>, LqbinError> {
        self.decode_sheets_with(sheets, |_, result| result)
    }

    /// Decode all sheets in parallel, failing with the first sheet error in
    /// container order.
    pub fn decode_all(&self, sheets: &[Sheet]) -> Result<Vec<SheetOutput>, LqbinError> {
        self.decode_sheets(sheets)?
            .into_iter()
            .map(|result| result.map_err(LqbinError::from))
            .collect()
    }
}

impl LqbinReaderBuilder {
    pub fn with_options(mut self, options: SheetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.options = self.options.with_text_encoding(text_encoding);
        self
    }

    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.options = self.options.with_quote_style(quote_style);
        self
    }

    /// Number of decoding threads (default: rayon's global pool).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Build the reader.
    pub fn build(self) -> LqbinReader {
        LqbinReader {
            options: self.options,
            threads: self.threads,
        }
    }
}
