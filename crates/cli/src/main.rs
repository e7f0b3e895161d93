//! `unnest` binary.
//!
//! Reads one JSON document from a file or stdin, converts it into the
//! [`unnest_data::Value`] model and prints its flattened, key-sorted form as a
//! JSON object.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use indexmap::IndexMap;
use tracing::debug;
use unnest::{DuplicateKeys, UnnestOptions};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "unnest")]
#[command(about = "Flatten nested JSON objects into dot-keyed objects sorted by key")]
struct Args {
	/// JSON file to read; stdin when omitted
	#[arg(value_name = "PATH")]
	input: Option<PathBuf>,

	/// Fail when two leaves flatten to the same key
	#[arg(long)]
	reject_duplicates: bool,

	/// Print the result on a single line
	#[arg(short, long)]
	compact: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

impl Args {
	fn options(&self) -> UnnestOptions {
		let duplicates = if self.reject_duplicates {
			DuplicateKeys::Reject
		} else {
			DuplicateKeys::LastWriteWins
		};
		UnnestOptions::new().duplicates(duplicates)
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let input: Box<dyn Read> = match &args.input {
		Some(path) => {
			debug!(path = %path.display(), "reading input file");
			Box::new(BufReader::new(File::open(path)?))
		}
		None => Box::new(io::stdin().lock()),
	};
	run(&args, input, BufWriter::new(io::stdout().lock()))
}

fn run(args: &Args, input: impl Read, mut output: impl Write) -> Result<(), Box<dyn std::error::Error>> {
	let document: serde_json::Value = serde_json::from_reader(input)?;
	let document = unnest_data::Value::from(document);
	let flat = unnest::unnest_with(&document, args.options())?;
	debug!(entries = flat.len(), "unnested document");

	let flat: IndexMap<String, serde_json::Value> = unnest::into_owned(flat)
		.into_iter()
		.map(|(key, value)| (key, value.into()))
		.collect();

	if args.compact {
		serde_json::to_writer(&mut output, &flat)?;
	} else {
		serde_json::to_writer_pretty(&mut output, &flat)?;
	}
	output.write_all(b"\n")?;
	output.flush()?;
	Ok(())
}
