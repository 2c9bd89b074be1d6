use std::{collections::HashSet, path::PathBuf};

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lqbin::LqbinReader;

use super::load_container;
use crate::{
    format::{QuoteStyleArg, TextEncodingArg},
    writer::SheetWriter,
};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to lqc.lqbin
    input: PathBuf,

    /// Output directory, created if missing
    #[arg(short, long, default_value = "csvfiles")]
    output: PathBuf,

    /// Only convert the named sheet (repeatable)
    #[arg(short, long = "sheet")]
    sheets: Vec<String>,

    /// How string values are quoted
    #[arg(long, value_enum, default_value_t = QuoteStyleArg::Verbatim)]
    quote_style: QuoteStyleArg,

    /// Text encoding of string bytes
    #[arg(long, value_enum, default_value_t = TextEncodingArg::Utf8)]
    text_encoding: TextEncodingArg,

    /// Number of decoding threads (all cores if not specified)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Log sheets that fail to decode and continue with the rest
    #[arg(long)]
    keep_going: bool,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let reader = self.reader();
        let container = load_container(&reader, &self.input, &self.sheets)?;
        tracing::info!(
            version = %container.version,
            sheets = container.sheets.len(),
            rows = container.row_count(),
            "loaded container"
        );

        let writer = SheetWriter::create(&self.output)?;
        let pb = ProgressBar::new(container.sheets.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sheets",
            )?
            .progress_chars("=>-"),
        );

        let results = reader.decode_sheets_with(&container.sheets, |_sheet, result| {
            pb.inc(1);
            result
        })?;
        pb.finish_and_clear();

        // Written in container order so that a later sheet with the same
        // name replaces an earlier one deterministically.
        let mut seen = HashSet::new();
        let mut written = 0usize;
        let mut failed = 0usize;
        for (sheet, result) in container.sheets.iter().zip(results) {
            let outcome = result
                .map_err(anyhow::Error::from)
                .and_then(|output| writer.write(&output));
            match outcome {
                Ok(path) => {
                    if !seen.insert(path.clone()) {
                        tracing::warn!(
                            table = %sheet.table,
                            sheet = %sheet.name,
                            path = %path.display(),
                            "sheet name repeats, earlier output overwritten"
                        );
                    }
                    tracing::debug!(sheet = %sheet.name, path = %path.display(), "wrote sheet");
                    written += 1;
                }
                Err(e) if self.keep_going => {
                    tracing::warn!(
                        table = %sheet.table,
                        sheet = %sheet.name,
                        error = %format!("{e:#}"),
                        "skipping sheet"
                    );
                    failed += 1;
                }
                Err(e) => return Err(e.context(format!("sheet '{}' failed", sheet.name))),
            }
        }

        tracing::info!(
            written,
            failed,
            output = %self.output.display(),
            "conversion finished"
        );
        if failed > 0 {
            anyhow::bail!("{failed} sheet(s) failed to decode");
        }
        Ok(())
    }

    fn reader(&self) -> LqbinReader {
        let mut builder = LqbinReader::builder()
            .with_quote_style(self.quote_style.into())
            .with_text_encoding(self.text_encoding.into());
        if let Some(n) = self.threads {
            builder = builder.with_threads(n);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use lqbin::proto::{ConfigTables, Field, SheetData, SheetSchema, TableSchema};
    use prost::Message;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        convert: ConvertArgs,
    }

    fn id_sheet(name: &str) -> SheetSchema {
        SheetSchema {
            name: name.to_string(),
            fields: vec![Field {
                field_name: "id".to_string(),
                array_length: 0,
                pb_type: "uint32".to_string(),
                pb_index: 1,
            }],
        }
    }

    fn sheet_data(table: &str, sheet: &str, rows: Vec<Vec<u8>>) -> SheetData {
        SheetData {
            table: table.to_string(),
            sheet: sheet.to_string(),
            data: rows,
        }
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lqbin2csv-{}-{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_container(dir: &Path, tables: &ConfigTables) -> PathBuf {
        let path = dir.join("lqc.lqbin");
        fs::write(&path, tables.encode_to_vec()).unwrap();
        path
    }

    fn convert_args(input: PathBuf, output: PathBuf, keep_going: bool) -> ConvertArgs {
        ConvertArgs {
            input,
            output,
            sheets: Vec::new(),
            quote_style: QuoteStyleArg::Verbatim,
            text_encoding: TextEncodingArg::Utf8,
            threads: Some(2),
            keep_going,
        }
    }

    /// Table `t` with sheets `a`, `b`, `c`; `b` has a truncated row.
    fn one_broken_sheet() -> ConfigTables {
        ConfigTables {
            version: "1".to_string(),
            schemas: vec![TableSchema {
                name: "t".to_string(),
                sheets: vec![id_sheet("a"), id_sheet("b"), id_sheet("c")],
            }],
            datas: vec![
                sheet_data("t", "a", vec![vec![0x08, 1]]),
                sheet_data("t", "b", vec![vec![0x08, 2], vec![0x08]]),
                sheet_data("t", "c", vec![vec![0x08, 3]]),
            ],
        }
    }

    #[test]
    fn repeated_sheet_name_keeps_last_in_container_order() {
        let dir = scratch_dir("repeated");
        let tables = ConfigTables {
            version: "1".to_string(),
            schemas: vec![
                TableSchema {
                    name: "t1".to_string(),
                    sheets: vec![id_sheet("s")],
                },
                TableSchema {
                    name: "t2".to_string(),
                    sheets: vec![id_sheet("s")],
                },
            ],
            datas: vec![
                sheet_data("t1", "s", vec![vec![0x08, 1]; 20_000]),
                sheet_data("t2", "s", vec![vec![0x08, 2]]),
            ],
        };
        let input = write_container(&dir, &tables);
        let output = dir.join("nested").join("out");

        for _ in 0..5 {
            convert_args(input.clone(), output.clone(), false)
                .run()
                .unwrap();
            let text = fs::read_to_string(output.join("s.csv")).unwrap();
            assert_eq!(text, "id\n2\n");
        }
    }

    #[test]
    fn failing_sheet_aborts_without_keep_going() {
        let dir = scratch_dir("abort");
        let input = write_container(&dir, &one_broken_sheet());
        let output = dir.join("out");

        let err = convert_args(input, output.clone(), false)
            .run()
            .unwrap_err();

        assert!(format!("{err:#}").contains("sheet 'b' failed"));
        assert_eq!(fs::read_to_string(output.join("a.csv")).unwrap(), "id\n1\n");
        assert!(!output.join("b.csv").exists());
        assert!(!output.join("c.csv").exists());
    }

    #[test]
    fn keep_going_writes_the_rest_and_still_fails() {
        let dir = scratch_dir("keep-going");
        let input = write_container(&dir, &one_broken_sheet());
        let output = dir.join("out");

        let err = convert_args(input, output.clone(), true)
            .run()
            .unwrap_err();

        assert!(err.to_string().contains("1 sheet(s) failed"));
        assert_eq!(fs::read_to_string(output.join("a.csv")).unwrap(), "id\n1\n");
        assert!(!output.join("b.csv").exists());
        assert_eq!(fs::read_to_string(output.join("c.csv")).unwrap(), "id\n3\n");
    }

    #[test]
    fn defaults_from_command_line() {
        let cli = TestCli::try_parse_from(["lqbin2csv", "lqc.lqbin"]).unwrap();
        let args = cli.convert;

        assert_eq!(args.input, PathBuf::from("lqc.lqbin"));
        assert_eq!(args.output, PathBuf::from("csvfiles"));
        assert!(args.sheets.is_empty());
        assert!(args.threads.is_none());
        assert!(!args.keep_going);
    }
}
