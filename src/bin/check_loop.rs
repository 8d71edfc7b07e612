use anyhow::Context;
use clap::Parser;
use loopgen::check;
use loopgen::output::{self, Pattern};
use std::fs;
use std::io::BufReader;

#[derive(Parser)]
struct Cli {
    /// Pattern file to check. Parsed as JSON for a .json extension, as the
    /// classic text dump otherwise.
    path: String,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let pattern: Pattern = if args.path.ends_with(".json") {
        let data =
            fs::read(&args.path).with_context(|| format!("Failed to read {}", args.path))?;
        serde_json::from_slice(&data).context("invalid pattern JSON")?
    } else {
        let file =
            fs::File::open(&args.path).with_context(|| format!("Failed to open {}", args.path))?;
        output::read_text(BufReader::new(file))?
    };
    check::validate(&pattern).with_context(|| format!("{} failed validation", args.path))?;
    eprintln!(
        "{}: {}x{} lattice, {} segments, all loops closed",
        args.path,
        pattern.point_dim,
        pattern.point_dim,
        pattern.indices.len() / 2
    );
    Ok(())
}
