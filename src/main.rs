//! # chatturns CLI
//!
//! Command-line interface for the chatturns library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatturns::cli::Args;
use chatturns::format::write_to_format;
use chatturns::{ChatLogParser, ChatturnsError};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<(), ChatturnsError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let output_config = args.output_config();

    println!("chatturns v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:   {}", args.input);
    println!("Output:  {}", output_path);
    println!("Format:  {}", args.format);
    println!();

    let parser = ChatLogParser::with_config(args.parser_config())?;

    println!("Parsing chat log...");
    let parse_start = Instant::now();
    let log = parser.parse_path(&args.input)?;
    println!(
        "   Found {} records, {} non-standard ({:.2}s)",
        log.len(),
        log.non_standard_rows().len(),
        parse_start.elapsed().as_secs_f64()
    );

    let written = if args.no_merge {
        println!("Skipping merge (--no-merge)");
        write_to_format(log.messages(), &output_path, args.format, &output_config)?;
        log.len()
    } else {
        println!("Merging consecutive messages...");
        let turns = log.merge();
        let stats = log.stats(&turns);
        println!(
            "   Compressed to {} turns ({:.1}% reduction)",
            stats.merged_count,
            stats.compression_ratio()
        );
        write_to_format(&turns, &output_path, args.format, &output_config)?;
        turns.len()
    };

    println!();
    println!("Done! Output saved to {}", output_path);
    println!();
    println!("Summary:");
    println!("   Records:   {}", log.len());
    println!("   Written:   {} entries", written);
    println!(
        "   Time:      {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
