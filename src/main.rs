use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use appiconset::config::{Config, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE};
use appiconset::{iconset, logger};

#[derive(Debug, Parser)]
#[command(name = "appiconset", about = "Generate a macOS AppIcon.appiconset from one image")]
struct Args {
    /// Source image (PNG or JPEG).
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Output icon set directory.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = Config::new(args.source, args.output);
    let assets = iconset::generate(&config)
        .with_context(|| format!("generating icon set from {}", config.source.display()))?;
    tracing::debug!("{} icons written to {}", assets.len(), config.output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["appiconset"]).unwrap();
        assert_eq!(args.source, PathBuf::from("tomato.png"));
        assert_eq!(args.output, PathBuf::from("AppIcon.appiconset"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_explicit() {
        let argv = ["appiconset", "logo.png", "-o", "out/Icon.appiconset", "-v"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.source, PathBuf::from("logo.png"));
        assert_eq!(args.output, PathBuf::from("out/Icon.appiconset"));
        assert!(args.verbose);
    }
}
