use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grants990::core::{ExtractorConfig, GrantError};
use grants990::export::write_csv_path;
use grants990::extract::GrantExtractor;
use grants990::xml::{Document, read_xml};

/// Extract grant recipients and amounts from a Form 990 XML e-file into CSV.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the Form 990 XML file
    #[arg(short = 'x', long)]
    xml: PathBuf,

    /// Output CSV path
    #[arg(short, long)]
    out: PathBuf,

    /// Print diagnostics for every skipped grant group
    #[arg(long)]
    debug: bool,

    /// JSON file overriding the group tag and candidate tag lists
    #[arg(long)]
    config: Option<PathBuf>,

    /// Local name of the grant group element
    #[arg(long)]
    group_tag: Option<String>,
}

/// `RUST_LOG` (default `warn`), with crate-level debug added by `--debug`.
fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        filter = filter.add_directive("grants990=debug".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<ExtractorConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractorConfig::from_json_path(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(tag) = &args.group_tag {
        config = config.with_group_tag(tag.as_str());
        config.validate()?;
    }
    Ok(config.with_fallback(args.debug))
}

fn run(args: &Args) -> anyhow::Result<usize> {
    let config = load_config(args)?;
    let xml = read_xml(&args.xml)
        .with_context(|| format!("failed to load {}", args.xml.display()))?;
    let document = Document::parse(&xml)
        .with_context(|| format!("failed to load {}", args.xml.display()))?;

    let extraction = GrantExtractor::new(config).extract(&document);
    let rows = extraction.into_rows()?;

    write_csv_path(&rows, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    Ok(rows.len())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_tracing(args.debug) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(count) => {
            println!("Saved {count} rows to {}", args.out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let empty = err
                .downcast_ref::<GrantError>()
                .is_some_and(GrantError::is_empty_result);
            if empty {
                eprintln!("No grants extracted (0 rows). Use --debug to see diagnostics.");
                if args.debug {
                    eprintln!(
                        "Try printing a small XML snippet around a grant group element and adjust the candidate tags with --config."
                    );
                }
            } else {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
