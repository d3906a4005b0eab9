//! The BPROM text dialect: `>`-delimited per-gene prediction blocks.
//!
//! BPROM writes one block per analyzed region. A block starts with a
//! `>` header naming the region and its genomic window, followed by a
//! promoter count line and, when promoters were predicted, the
//! `Promoter Pos` / `-10 box` / `-35 box` lines this crate feeds on.

mod extract;
pub use extract::*;

use crate::error::{Bprom2GffError, Result};
use crate::gff::Strand;

/// Line BPROM prints for a region it predicted nothing in. The width
/// of the whitespace run is fixed by the tool, so this is matched as a
/// plain substring.
pub const NO_PROMOTERS_MARKER: &str = "Number of predicted promoters -      0";

/// One `>`-delimited span of BPROM output, tagged with its ordinal
/// position in the input so failures can point back at the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// Splits raw BPROM output into per-gene blocks.
///
/// The `>` marker only ever occurs at the start of a header line, so a
/// plain split is enough. The span before the first marker is always
/// empty and is dropped.
///
/// # Errors
///
/// Returns `MalformedInput` when the text contains no marker at all.
pub fn tokenize(text: &str) -> Result<Vec<Block<'_>>> {
    if !text.contains('>') {
        return Err(Bprom2GffError::MalformedInput);
    }

    Ok(text
        .split('>')
        .skip(1)
        .enumerate()
        .map(|(index, text)| Block { index, text })
        .collect())
}

/// Drops blocks in which BPROM predicted no promoters.
///
/// A pure filter: survivors keep their relative order and their
/// original indices. An all-filtered result is valid and simply yields
/// an empty record sequence downstream.
pub fn discard_unpredicted(blocks: Vec<Block<'_>>) -> Vec<Block<'_>> {
    blocks
        .into_iter()
        .filter(|block| !block.text.contains(NO_PROMOTERS_MARKER))
        .collect()
}

/// Every field pulled out of a single block.
#[derive(Debug, PartialEq, Eq)]
pub struct ExtractedFields<'a> {
    /// Genome accession from the block header.
    pub accession: &'a str,
    /// Absolute lower bound of the analyzed window, always <= `region_end`.
    pub region_start: u64,
    /// Absolute upper bound of the analyzed window.
    pub region_end: u64,
    pub strand: Strand,
    /// LDF confidence score, kept verbatim as text.
    pub ldf_score: &'a str,
    /// BPROM's own "Promoter Pos" value, relative to the window start.
    pub promoter_offset: u64,
    pub box10: MotifBox<'a>,
    pub box35: MotifBox<'a>,
}

/// Window-relative position, nucleotide sequence and score of one
/// conserved promoter box.
#[derive(Debug, PartialEq, Eq)]
pub struct MotifBox<'a> {
    pub offset: u64,
    pub sequence: &'a str,
    pub score: &'a str,
}

impl<'a> ExtractedFields<'a> {
    /// Runs every field extractor over one block.
    ///
    /// # Errors
    ///
    /// Fails with a block-indexed error on the first missing anchor,
    /// unparseable integer or invalid strand character.
    pub fn parse(block: &Block<'a>) -> Result<Self> {
        let accession = accession(block)?;
        let (region_start, region_end) = region_bounds(block)?;
        Ok(Self {
            accession,
            region_start,
            region_end,
            strand: strand(block)?,
            ldf_score: ldf_score(block)?,
            promoter_offset: promoter_offset(block)?,
            box10: box10(block)?,
            box35: box35(block)?,
        })
    }
}
