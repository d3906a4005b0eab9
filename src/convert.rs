use crate::bprom::{discard_unpredicted, tokenize, Block, ExtractedFields};
use crate::config::Config;
use crate::detect::{detect_compression, Compression};
use crate::error::Result;
use crate::gff::PromoterRecord;
use crate::memory::max_mem_usage_mb;

use flate2::read::MultiGzDecoder;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Summary statistics for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the conversion.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Blocks found in the input.
    pub blocks: usize,
    /// Blocks BPROM reported zero promoters for.
    pub unpredicted: usize,
    /// Blocks dropped under `--skip-invalid`.
    pub failed: usize,
    /// Records written.
    pub records: usize,
}

/// Runs a conversion with the provided configuration.
///
/// Reads the whole BPROM dump, tokenizes it into per-gene blocks,
/// drops the promoter-less ones, extracts and projects the surviving
/// blocks into GFF3 records in parallel chunks, and writes them back
/// in input order.
///
/// # Errors
///
/// Returns an error if the input cannot be read, contains no blocks,
/// or (without `skip_invalid`) any block fails extraction.
///
/// # Example
///
/// ```rust, ignore
/// use bprom2gff::{Config, run};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("bprom_output.txt"),
///     output: PathBuf::from("promoters.gff3"),
///     threads: 4,
///     chunks: 512,
///     skip_invalid: false,
/// };
/// let stats = run(&config)?;
/// println!("{} records in {:?}", stats.records, stats.elapsed);
/// ```
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    let text = read_input(&config.input)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let blocks = tokenize(&text)?;
    let total = blocks.len();
    let kept = discard_unpredicted(blocks);
    let unpredicted = total - kept.len();

    let chunks = pool.install(|| render_blocks(&kept, config))?;

    let (records, failed) = chunks
        .iter()
        .fold((0, 0), |(r, f), c| (r + c.records, f + c.failed));

    write_output(&config.output, &chunks)?;

    let elapsed = start.elapsed();
    let mem_delta = (max_mem_usage_mb() - start_mem).max(0.0);

    Ok(RunStats {
        elapsed,
        mem_delta_mb: mem_delta,
        blocks: total,
        unpredicted,
        failed,
        records,
    })
}

/// Reads the whole input into memory, inflating gzip transparently.
///
/// The core works on decoded text only; obtaining it is the one I/O
/// step on the input side.
fn read_input(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut contents = String::new();

    match detect_compression(path) {
        Compression::Gzip => {
            MultiGzDecoder::new(file).read_to_string(&mut contents)?;
        }
        Compression::None => {
            let mut file = file;
            file.read_to_string(&mut contents)?;
        }
    }

    Ok(contents)
}

/// Rendered GFF3 bytes for one chunk of blocks, tagged for reordering.
struct ChunkOutput {
    idx: usize,
    buffer: Vec<u8>,
    records: usize,
    failed: usize,
}

/// Renders blocks into GFF3 bytes in indexed parallel chunks, then
/// merges them back into input order. Blocks share no mutable state,
/// so chunking is purely a throughput measure; ordering is restored by
/// the chunk index.
fn render_blocks(blocks: &[Block<'_>], config: &Config) -> Result<Vec<ChunkOutput>> {
    let mut outputs = blocks
        .par_chunks(config.chunks.max(1))
        .enumerate()
        .map(|(idx, chunk)| render_chunk(idx, chunk, config.skip_invalid))
        .collect::<Vec<_>>();

    let mut merged = Vec::with_capacity(outputs.len());
    for output in outputs.drain(..) {
        merged.push(output?);
    }

    merged.sort_by_key(|output| output.idx);
    Ok(merged)
}

/// Renders one chunk of blocks into GFF3 lines.
///
/// With `skip_invalid`, a block that fails extraction is reported and
/// counted instead of aborting the run; the error still names the
/// offending block's ordinal.
fn render_chunk(idx: usize, chunk: &[Block<'_>], skip_invalid: bool) -> Result<ChunkOutput> {
    let mut buffer = Vec::with_capacity(chunk.len().saturating_mul(128));
    let mut records = 0;
    let mut failed = 0;

    {
        let mut writer = BufWriter::with_capacity(128 * 1024, &mut buffer);
        for block in chunk {
            match ExtractedFields::parse(block) {
                Ok(fields) => {
                    writeln!(writer, "{}", PromoterRecord::from_fields(&fields))?;
                    records += 1;
                }
                Err(err) if skip_invalid => {
                    log::warn!("skipping block: {}", err);
                    failed += 1;
                }
                Err(err) => return Err(err),
            }
        }
        writer.flush()?;
    }

    Ok(ChunkOutput {
        idx,
        buffer,
        records,
        failed,
    })
}

/// Writes ordered chunks to the output path.
fn write_output(path: &Path, chunks: &[ChunkOutput]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(256 * 1024, file);

    for chunk in chunks {
        writer.write_all(&chunk.buffer)?;
    }
    writer.flush()?;
    Ok(())
}
