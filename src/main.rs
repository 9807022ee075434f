//! json2rdf - convert a JSON document into RDF triples.
//!
//! Usage:
//!   cat data.json | json2rdf https://example.org/ > data.nt
//!   json2rdf https://example.org/ --input data.json --format turtle --output data.ttl
//!   json2rdf https://example.org/ --input data.json --stats
//!   json2rdf --config json2rdf.json --input data.json

use clap::Parser;
use json2rdf::{ConverterConfig, JsonStreamRdfConverter, JsonTokenizer, OutputFormat, WriterSink};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "json2rdf")]
#[command(about = "Convert JSON into RDF triples, streaming")]
#[command(version)]
struct Args {
    /// Base IRI that JSON keys are resolved against (as `base#key`).
    /// Overrides the config file; defaults to http://localhost/
    base: Option<String>,

    /// JSON config file with `base_iri` and `format`
    #[arg(short, long)]
    config: Option<String>,

    /// Input JSON file (defaults to stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format: ntriples, turtle or nquads (default ntriples)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Print conversion statistics as JSON to stderr
    #[arg(long)]
    stats: bool,

    /// Show debug logs (honours RUST_LOG)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logs
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(args: &Args) {
    let filter = if args.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Config file values, then command-line overrides.
fn load_config(args: &Args) -> Result<ConverterConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ConverterConfig::default(),
    };
    if let Some(base) = &args.base {
        config.base_iri = base.clone();
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    let mut converter = JsonStreamRdfConverter::new(&config.base_iri)?;

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    tracing::info!(base = %config.base_iri, format = ?config.format, "converting");
    let stats = converter.convert(JsonTokenizer::from_reader(reader), WriterSink::new(writer, config.format))?;

    if args.stats {
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
