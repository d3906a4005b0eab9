//! # bprom2gff
//!
//! BPROM promoter predictions to GFF3, fast.
//!
//! BPROM reports each analyzed region as a `>`-headed text block whose
//! predicted promoter boxes are positioned relative to the analyzed
//! window. This library tokenizes those blocks, pulls the fields out
//! with anchored extractors, projects the `-35` box back onto absolute
//! genome coordinates strand-aware, and serializes one GFF3 record per
//! promoter.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use bprom2gff::{Config, run};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("bprom_output.txt"),
//!     output: PathBuf::from("promoters.gff3"),
//!     threads: 4,
//!     chunks: 512,
//!     skip_invalid: false,
//! };
//!
//! let stats = run(&config)?;
//! println!("Conversion completed in {:?}", stats.elapsed);
//! println!("{} records written", stats.records);
//! ```
//!
//! ## Working on text directly
//!
//! The conversion core is exposed for callers that already hold the
//! decoded text:
//!
//! ```rust, ignore
//! use bprom2gff::bprom::{discard_unpredicted, tokenize, ExtractedFields};
//! use bprom2gff::gff::PromoterRecord;
//!
//! let blocks = discard_unpredicted(tokenize(&text)?);
//! for block in &blocks {
//!     let fields = ExtractedFields::parse(block)?;
//!     println!("{}", PromoterRecord::from_fields(&fields));
//! }
//! ```

pub mod bprom;
pub mod cli;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod gff;
pub mod memory;

pub use cli::Args;
pub use config::Config;
pub use convert::{run, RunStats};
pub use error::{Bprom2GffError, Result};
pub use memory::max_mem_usage_mb;
