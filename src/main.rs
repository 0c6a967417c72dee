use anyhow::Context as _;
use clap::Parser;
use std::{io::Write as _, path::PathBuf};

mod error;
mod render;
mod table;

/// Generate a Rust lookup table from a JSON object of names to ids.
///
/// The generated source is written to stdout; redirect it into your crate.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the JSON file, e.g. `{"natural.water": 5}`.
    json_path: PathBuf,
}

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    let table = table::LookupTable::load(&args.json_path)?;
    log::info!(
        "Generating lookup table with {} entries from: {} ({})",
        table.len(),
        args.json_path.display(),
        get_bytes(&args.json_path)
    );

    let source = render::render(&table);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(source.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write generated source to stdout")?;

    Ok(())
}

fn get_bytes(p: impl AsRef<std::path::Path>) -> String {
    human_bytes::human_bytes(std::fs::metadata(p).map(|m| m.len()).unwrap_or(0) as f64)
}
