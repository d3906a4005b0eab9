//! # bprom2gff
//!
//! BPROM promoter predictions to GFF3, fast.
//!
//! ## Features
//!
//! - Converts concatenated BPROM output into GFF3
//! - Projects region-relative box positions onto genome coordinates,
//!   strand-aware
//! - Handles gzipped input files
//! - Multi-threaded block rendering with stable output order
//! - Optional per-block error isolation instead of aborting the run
//!
//! ## Usage
//!
//! ```bash
//! bprom2gff -i <BPROM> -o <GFF3> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input <BPROM>        Path to BPROM output file
//!   -o, --output <GFF3>        Path to output GFF3 file
//!
//! Optional arguments:
//!   -t, --threads <THREADS>    Number of threads (default: CPU count)
//!   -c, --chunks <CHUNKS>      Chunk size for parallel processing [default: 512]
//!   -s, --skip-invalid         Skip blocks that fail extraction
//!   -h, --help                 Print help
//!   -V, --version              Print version
//! ```
//!
//! ## Examples
//!
//! ### Basic conversion
//!
//! ```bash
//! bprom2gff -i galaxy_bprom_output.txt -o promoters.gff3
//! ```
//!
//! ### Convert a gzipped dump with custom threads
//!
//! ```bash
//! bprom2gff -i bprom_output.txt.gz -o promoters.gff3 -t 8
//! ```
//!
//! ### Keep going past malformed blocks
//!
//! ```bash
//! bprom2gff -i bprom_output.txt -o promoters.gff3 --skip-invalid
//! ```
use bprom2gff::{run, Args, Config};
use clap::Parser;
use colored::Colorize;

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    let args = Args::parse();
    if let Err(err) = args.check() {
        eprintln!("{} {}", "error:".bright_red().bold(), err);
        std::process::exit(1);
    }
    log::info!("{:?}", args);

    let config = Config::from_args(&args);
    log::info!("Using {} threads", config.threads);

    match run(&config) {
        Ok(stats) => {
            log::info!(
                "{} blocks, {} without promoters, {} skipped",
                stats.blocks,
                stats.unpredicted,
                stats.failed
            );
            log::info!("{} records written", stats.records);
            log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
            log::info!("Memory: {:.2} MB", stats.mem_delta_mb);
        }
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            std::process::exit(1);
        }
    }
}
