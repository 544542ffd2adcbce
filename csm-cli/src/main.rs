use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use csm::driver::{self, EncodedPass};
use csm::error::CsmError;
use csm::ingest;
use csm::orientation::OrientationSet;

/// Character set mode 4/5 encoder: turns a text pixel map of 4-pixel-wide
/// color glyphs into assembler `.by` data and BASIC DATA lines.
///
/// Pixels: `.` or `0` background, `1` COLPF0, `2` COLPF1, `3` COLPF2,
/// `4` COLPF3. Lines starting with `#` are comments.
#[derive(Parser)]
#[command(name = "csm", version)]
struct Args {
    /// Pixel map file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Orientations: n = normal, h = horizontal flip, v = vertical flip
    #[arg(short, long, default_value = "n")]
    directions: String,

    /// Output format: listing or json
    #[arg(short, long, default_value = "listing")]
    format: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct OutputResult {
    rows: usize,
    characters: usize,
    passes: Vec<EncodedPass>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pixel map: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        matches!(args.format.as_str(), "listing" | "json"),
        "unknown format '{}', use 'listing' or 'json'",
        args.format
    );

    let text = read_input(args.input.as_ref())?;

    let mut diag: Box<dyn Write> = if args.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    };

    let set = ingest::parse_str(&text, &mut diag).context("failed to parse pixel map")?;
    let orientations = OrientationSet::from_letters(&args.directions);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = if args.format == "json" {
        driver::encode_passes(&set, orientations, &mut diag).and_then(|passes| {
            let result = OutputResult {
                rows: set.len(),
                characters: set.block_count(),
                passes,
            };
            let json = if args.pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            }
            .map_err(io::Error::from)?;
            writeln!(out, "{json}")?;
            Ok(())
        })
    } else {
        driver::run(&set, orientations, &mut out, &mut diag).map(|_| ())
    };

    match result {
        Ok(()) => {}
        Err(CsmError::EmptyInput) => writeln!(diag, "csm: No Lines Read")?,
        Err(e) => return Err(e).context("failed to encode character set"),
    }

    out.flush().context("failed to write output")?;
    Ok(())
}
