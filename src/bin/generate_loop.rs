use anyhow::bail;
use clap::Parser;
use clap::ValueEnum;
use loopgen::grid::Grid;
use loopgen::output::{self, Pattern};
use loopgen::{populate, presets};
use rand::SeedableRng;
use std::fs;

#[derive(Parser)]
struct Cli {
    /// Grid size in cells per side. Must be at least 3.
    #[clap(long, short = 's', default_value_t = 16)]
    size: usize,
    /// Toggle count for the scatter strategy. Defaults to a quarter of the
    /// interior area.
    #[clap(long, short = 'n')]
    count: Option<usize>,
    /// Named preset supplying size and count; overrides --size.
    #[clap(long, short = 'p', default_value = "")]
    preset: String,
    /// Population strategy.
    #[clap(long, short = 't', default_value = "scatter")]
    strategy: Strategy,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    /// File format: txt or json. If not provided, infers from output file extension.
    #[clap(long, short = 'f', default_value = "unspecified")]
    format: Format,
    #[clap(long, short = 'c', default_value_t = false)]
    compact: bool,
    /// Seed for reproducible patterns.
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    #[default]
    Scatter,
    Fill,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Unspecified,
    Txt,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let (size, count) = if args.preset.is_empty() {
        (args.size, args.count)
    } else {
        match presets::get_preset(&args.preset) {
            Some(p) => (p.size, args.count.or(Some(p.toggles))),
            None => bail!("Unknown preset: {}", args.preset),
        }
    };

    let mut grid = Grid::new(size, size)?;
    let mut rng = match args.seed {
        Some(s) => rand_chacha::ChaCha20Rng::seed_from_u64(s),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    match args.strategy {
        Strategy::Scatter => {
            let count = count.unwrap_or((size - 2) * (size - 2) / 4);
            populate::scatter(&mut grid, count, &mut rng);
        }
        Strategy::Fill => populate::fill(&mut grid, &mut rng),
    }
    let pattern = Pattern::from_grid(&grid);

    // Infer format from output file extension if not specified.
    let format = if args.format == Format::Unspecified {
        if args.output.ends_with(".json") {
            Format::Json
        } else if args.output.ends_with(".txt") || args.output.is_empty() {
            Format::Txt
        } else {
            bail!("Cannot infer format from output file extension. Specify format with -f option.")
        }
    } else {
        args.format.clone()
    };

    use std::io::Write;

    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(fs::File::create(&args.output)?)
    };

    match format {
        Format::Txt => {
            output::write_text(&mut w, &pattern)?;
        }
        Format::Json => {
            output::write_json(&mut w, &pattern, args.compact)?;
        }
        Format::Unspecified => {
            unreachable!()
        }
    }
    Ok(())
}
