use anyhow::Result;
use comfy_table::Table;

use lexp_cli::pipeline::{CleanRunResult, run_clean_pipeline};
use lexp_model::Region;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_countries() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code"]);
    apply_table_style(&mut table);
    for region in Region::actual_countries() {
        table.add_row(vec![region.as_str()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanRunResult> {
    run_clean_pipeline(&args.to_options())
}
