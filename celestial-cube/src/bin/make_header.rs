#[cfg(feature = "cli")]
use anyhow::Context;
#[cfg(feature = "cli")]
use celestial_cube::{build, ObservationalParameters};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use log::warn;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Cards,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "make-header")]
#[command(about = "Build WCS keywords for a spectral-line cube")]
#[command(version)]
struct Cli {
    /// JSON file with the observational parameters
    params: PathBuf,

    /// Override the projection code from the parameter file (TAN or SFL)
    #[arg(long)]
    projection: Option<String>,

    /// Reject degenerate inputs instead of writing NaN/inf keywords
    #[arg(long)]
    strict: bool,

    /// Print only these keywords, in the order given (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Output format. NaN or infinite reals from degenerate inputs print as an
    /// empty (undefined) value in cards and as null in JSON.
    #[arg(long, value_enum, default_value = "cards")]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.params)
        .with_context(|| format!("Failed to read {}", cli.params.display()))?;
    let mut params: ObservationalParameters = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", cli.params.display()))?;

    if let Some(projection) = cli.projection {
        params.projection = projection;
    }
    if cli.strict {
        params.validate()?;
    }

    let mut header = build(&params)?;
    if !cli.keywords.is_empty() {
        header = header.select(cli.keywords.iter().map(String::as_str))?;
    }
    for key in header.undefined_keywords() {
        warn!("{} has no finite value; written as undefined", key);
    }

    match cli.format {
        OutputFormat::Cards => print!("{}", header),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&header)?),
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("make-header requires the 'cli' feature.");
    eprintln!("Run with: cargo run --features cli --bin make-header -- <params.json>");
    std::process::exit(1);
}
