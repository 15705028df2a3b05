use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hexwords::{ConvertConfig, Converter, FillByte};

const USAGE: &str = "usage: hexconvert <INPUT> <OUTPUT>\n       (put `--` before paths that start with '-')";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert an @address hex dump into a dense, word-reversed memory image",
    override_usage = "hexconvert [OPTIONS] [--] <INPUT> <OUTPUT>"
)]
struct Opts {
    /// Sparse dump to read (`@addr` lines and hex byte rows)
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Word image to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
    /// Byte used for address gaps and the trailing short word
    #[arg(long, value_name = "HH", default_value = "00")]
    fill: FillByte,
    /// Write a JSON summary of the conversion to FILE
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{}", e.render());
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let conv = Converter::new(ConvertConfig::with_fill(opts.fill));
    let summary = conv.convert_file(&opts.input, &opts.output)?;

    if let Some(path) = opts.summary {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(&path, json + "\n")
            .with_context(|| format!("failed to write summary {}", path.display()))?;
    }

    Ok(())
}
