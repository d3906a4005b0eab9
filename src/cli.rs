use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "bprom2gff",
    version = env!("CARGO_PKG_VERSION"),
    about = "BPROM promoter predictions to GFF3, fast"
)]
pub struct Args {
    /// Concatenated BPROM output to convert.
    ///
    /// One or more per-gene prediction blocks, each starting with a `>`
    /// header line. A trailing `.gz` extension is inflated on the fly.
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to BPROM output file",
        value_name = "BPROM",
        required = true
    )]
    pub input: PathBuf,

    /// Output filepath; must end in .gff or .gff3.
    #[clap(
        short = 'o',
        long = "output",
        help = "Path to output GFF3 file",
        value_name = "GFF3",
        required = true
    )]
    pub output: PathBuf,

    /// Number of threads to use; default is the number of logical CPUs.
    #[clap(
        short = 't',
        long,
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get()
    )]
    pub threads: usize,

    /// Chunk size for parallel block rendering.
    #[clap(
        short = 'c',
        long,
        help = "Chunk size for parallel processing",
        value_name = "CHUNKS",
        default_value_t = 512
    )]
    pub chunks: usize,

    /// Skip blocks that fail extraction instead of aborting the run;
    /// every skipped block is reported through the log.
    #[clap(short = 's', long = "skip-invalid", help = "Skip blocks that fail extraction")]
    pub skip_invalid: bool,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Checks the input file for validity. The file must exist and be
    /// non-empty; its extension is not constrained since BPROM dumps
    /// carry whatever name the pipeline gave them.
    fn check_input(&self) -> Result<(), ArgError> {
        if !self.input.exists() {
            let err = format!("file {:?} does not exist", self.input);
            Err(ArgError::InvalidInput(err))
        } else if std::fs::metadata(&self.input).map(|m| m.len()).unwrap_or(0) == 0 {
            let err = format!("file {:?} is empty", self.input);
            return Err(ArgError::InvalidInput(err));
        } else {
            Ok(())
        }
    }

    /// Checks the output file for validity. If the file is not a GFF3
    /// file, an error is returned.
    fn check_output(&self) -> Result<(), ArgError> {
        match self.output.extension().and_then(|ext| ext.to_str()) {
            Some("gff") | Some("gff3") => Ok(()),
            _ => {
                let err = format!("file {:?} is not a GFF3 file", self.output);
                Err(ArgError::InvalidOutput(err))
            }
        }
    }

    /// Checks the number of threads for validity. The number of threads
    /// must be greater than 0 and less than or equal to the number of
    /// logical CPUs.
    fn check_threads(&self) -> Result<(), ArgError> {
        if self.threads == 0 {
            let err = "number of threads must be greater than 0".to_string();
            Err(ArgError::InvalidThreads(err))
        } else if self.threads > num_cpus::get() {
            let err = "number of threads must be less than or equal to the number of logical CPUs"
                .to_string();
            return Err(ArgError::InvalidThreads(err));
        } else {
            Ok(())
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_output()?;
        self.check_threads()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The input file does not exist or is empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The output file is not a GFF3 file.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    /// The number of threads is invalid.
    #[error("Invalid number of threads: {0}")]
    InvalidThreads(String),
}
