use crate::cli::Args;
use std::path::PathBuf;

/// Normalized configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input BPROM output path.
    pub input: PathBuf,
    /// Output GFF3 path.
    pub output: PathBuf,
    /// Number of threads to use.
    pub threads: usize,
    /// Chunk size for parallel block rendering.
    pub chunks: usize,
    /// Skip blocks that fail extraction instead of aborting the run.
    pub skip_invalid: bool,
}

impl Config {
    /// Builds a conversion config from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            threads: args.threads,
            chunks: args.chunks,
            skip_invalid: args.skip_invalid,
        }
    }
}
