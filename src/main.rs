mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::input::Catalog;
use crate::model::records::Locale;
use crate::pipeline::stage1_resolve::resolve_ancestry;
use crate::pipeline::stage2_merge::merge_observations;
use crate::pipeline::stage3_pivot::pivot;
use crate::pipeline::stage4_order::order_matrix;
use crate::report::{ReportInputs, write_reports};

#[derive(Parser, Debug)]
#[command(name = "abgram")]
#[command(about = "Build localized antibiogram reports from relational AMR reference tables")]
#[command(version)]
struct Args {
    /// Directory holding the reference tables and observation files
    #[arg(long, value_name = "DIR")]
    data: PathBuf,

    /// Target data-source identifier (selects the ancestor chain to merge)
    #[arg(long, value_name = "ID")]
    target: String,

    /// Output directory
    #[arg(long, value_name = "DIR", default_value = "out")]
    out: PathBuf,

    /// Base name for generated files
    #[arg(long, default_value = "antibiogram")]
    base_name: String,

    /// Output locale; repeat for several
    #[arg(long = "locale", value_enum, default_values_t = [Locale::De, Locale::En])]
    locales: Vec<Locale>,

    /// Also write a machine-readable run summary
    #[arg(long)]
    summary_json: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let catalog = Catalog::load(&args.data).context("loading reference catalog")?;
    info!(
        "catalog loaded: {} sources, {} antibiotics, {} organisms",
        catalog.sources.len(),
        catalog.antibiotics.len(),
        catalog.organisms.len()
    );

    let chain = resolve_ancestry(&catalog, &args.target)?;
    info!(
        "resolved ancestry for `{}`: {} source(s), root `{}`",
        args.target,
        chain.len(),
        chain[0].id
    );

    let merged = merge_observations(&args.data, &chain)?;
    info!("merged {} unique observation(s)", merged.len());

    let matrix = order_matrix(pivot(&merged), &catalog);
    info!(
        "ordered matrix: {} antibiotic(s) x {} organism(s)",
        matrix.n_rows(),
        matrix.n_cols()
    );

    write_reports(&ReportInputs {
        matrix: &matrix,
        catalog: &catalog,
        target_id: &args.target,
        merged_sources: &merged.merged_sources,
        locales: &args.locales,
        out_dir: &args.out,
        base_name: &args.base_name,
        summary_json: args.summary_json,
    })
    .context("writing reports")?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
