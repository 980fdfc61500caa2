use anyhow::Result;
use comfy_table::Table;

use sweep_cli::pipeline::run_pipeline;
use sweep_cli::types::RunResult;
use sweep_ingest::SUPPORTED_FORMATS;

use crate::cli::CleanArgs;
use crate::summary::{apply_table_style, header_cell};

/// Prints supported input formats.
pub fn run_formats() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Extension"), header_cell("Reader")]);
    apply_table_style(&mut table);
    for format in SUPPORTED_FORMATS {
        table.add_row(vec![format.extension(), format.description()]);
    }
    println!("{table}");
}

/// Runs the pipeline for the `clean` command.
pub fn run_clean(args: &CleanArgs) -> Result<Option<RunResult>> {
    run_pipeline(&args.input, &args.output_dir)
}
