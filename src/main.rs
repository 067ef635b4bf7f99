use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{info, warn};
use risk_reader::utils::logging::console::{print_catalog, print_distribution, print_variation};
use risk_reader::{Dashboard, ReaderConfig, YearRange};

const USAGE: &str =
    "usage: risk-reader <file> [year_min year_max] [risk] [name] [--config config.json]";

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.iter().position(|a| a == "--config") {
        Some(pos) => {
            let path = args
                .get(pos + 1)
                .cloned()
                .with_context(|| format!("--config needs a path\n{USAGE}"))?;
            args.drain(pos..=pos + 1);
            info!("Loading configuration from: {path}");
            ReaderConfig::from_json_file(Path::new(&path))?
        }
        None => ReaderConfig::default(),
    };

    let Some(file) = args.first() else {
        warn!("No input file given");
        println!("{USAGE}");
        return Ok(());
    };

    let path = Path::new(file);
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .map_or_else(|| file.clone(), |n| n.to_string_lossy().into_owned());

    let mut dashboard = Dashboard::new(config);
    let start = Instant::now();
    if dashboard.ingest(&bytes, &filename).is_err() {
        println!("{}", dashboard.status_message());
        return Ok(());
    }
    info!("Ingested {filename} in {:?}", start.elapsed());
    println!("{}", dashboard.status_message());

    let Some(catalog) = dashboard.catalog() else {
        return Ok(());
    };
    print_catalog(catalog);

    let Some(full) = catalog.full_selection() else {
        println!("The file contains no usable rows");
        return Ok(());
    };

    let Some((year_min, year_max)) = year_bounds(args.get(1), args.get(2), full.years)? else {
        warn!("Both year bounds are needed to restrict the range");
        println!("{USAGE}");
        return Ok(());
    };
    let selection = dashboard.selection(
        year_min,
        year_max,
        args.get(3).map(String::as_str),
        args.get(4).map(String::as_str),
    );
    info!("Querying with {selection:?}");

    if let Some(result) = dashboard.distribution(&selection) {
        println!();
        print_distribution(&result);
    }
    if let Some(result) = dashboard.variation(&selection) {
        println!();
        print_variation(&result);
    }

    Ok(())
}

/// Resolve the year bounds from the command line
///
/// Both bounds or neither must be given; with neither, the whole table
/// range is used. `None` means exactly one bound was supplied.
fn year_bounds(
    min: Option<&String>,
    max: Option<&String>,
    full: YearRange,
) -> anyhow::Result<Option<(i32, i32)>> {
    match (min, max) {
        (Some(min), Some(max)) => Ok(Some((
            min.parse::<i32>().context("year_min must be an integer")?,
            max.parse::<i32>().context("year_max must be an integer")?,
        ))),
        (None, None) => Ok(Some((full.min, full.max))),
        _ => Ok(None),
    }
}
