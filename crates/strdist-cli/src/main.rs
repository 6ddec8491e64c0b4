//! CLI for computing weighted Levenshtein distances between two strings.

mod utils;

use std::path::PathBuf;

use clap::Parser;

use strdist::{
    costs::{CostConfig, CostModel},
    strings::{self, Deunicode},
};

/// Weighted Levenshtein distance between two strings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source string.
    x: String,

    /// The target string.
    y: String,

    /// Path to a JSON file of insertion, deletion and substitution costs.
    ///
    /// Every edit costs 1 if this is not given.
    #[arg(short('c'), long)]
    costs: Option<PathBuf>,

    /// Transliterate both strings into ASCII before comparing them.
    ///
    /// Without this, any non-ASCII character is an error.
    #[arg(short('t'), long)]
    transliterate: bool,

    /// Name of the log file.
    #[arg(short('l'), long, default_value = "strdist")]
    log_name: String,

    /// Directory in which to write logs.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Print the result as JSON.
    #[arg(short('j'), long)]
    json: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_dir, &args.log_name)?;
    ftlog::info!("{args:?}");
    ftlog::info!("Log file: {log_path:?}");

    let costs = if let Some(path) = &args.costs {
        ftlog::info!("Reading costs from {path:?}...");
        CostConfig::from_path(path)
            .and_then(CostConfig::into_model)
            .map_err(|e| e.to_string())?
    } else {
        ftlog::info!("No costs specified. Using unit costs.");
        CostModel::unit().clone()
    };

    let (d, lossy_chars) = if args.transliterate {
        let (d, [x, y]) = strings::levenshtein_reported(&args.x, &args.y, &costs, &Deunicode);
        let lossy = x.lossy_chars + y.lossy_chars;
        if lossy > 0 {
            ftlog::warn!("Transliterated {lossy} characters outside the alphabet: {:?} vs {:?}", x.text, y.text);
        }
        (d, lossy)
    } else {
        let d = strings::levenshtein(&args.x, &args.y, &costs).map_err(|e| {
            ftlog::error!("{e}");
            e.to_string()
        })?;
        (d, 0)
    };

    ftlog::info!("Distance: {}, max weighted distance: {}", d.distance, d.max_weighted);

    if args.json {
        let out = serde_json::json!({
            "distance": d.distance,
            "max_weighted": d.max_weighted,
            "normalized": d.normalized(),
            "lossy_chars": lossy_chars,
        });
        println!("{out}");
    } else {
        println!("{}\t{}", d.distance, d.max_weighted);
    }

    Ok(())
}
