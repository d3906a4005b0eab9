//! Anchored field extractors for the BPROM dialect.
//!
//! BPROM output is semi-structured text, not a grammar: every field
//! sits behind a fixed literal anchor. Each extractor pulls exactly one
//! field out of one block and fails with a block-indexed error when its
//! anchor is absent; nothing is silently defaulted. Only the first
//! `-10`/`-35` pair of a block is captured, so a multi-promoter block
//! yields a single record.

use crate::error::{Bprom2GffError, Result};
use crate::gff::Strand;

use super::{Block, MotifBox};

const LOCATION_ANCHOR: &str = "Location=[";
const STRAND_ANCHOR: &str = "](";
const LDF_ANCHOR: &str = "LDF-";
const PROMOTER_POS_ANCHOR: &str = "Promoter Pos:";
const BOX10_ANCHOR: &str = "-10 box at pos.";
const BOX35_ANCHOR: &str = "-35 box at pos.";

/// Genome accession: the leading word-character run of the header,
/// which must be terminated by an underscore.
pub fn accession<'a>(block: &Block<'a>) -> Result<&'a str> {
    let header = block.text.lines().next().unwrap_or("").trim_start();
    header
        .find(|c: char| !c.is_ascii_alphanumeric())
        .filter(|&at| at > 0 && header[at..].starts_with('_'))
        .map(|at| &header[..at])
        .ok_or(Bprom2GffError::Extraction {
            field: "accession",
            block_index: block.index,
        })
}

/// Absolute bounds of the analyzed window, from `Location=[start:end]`.
/// BPROM reports the bounds in ascending order regardless of strand.
pub fn region_bounds(block: &Block<'_>) -> Result<(u64, u64)> {
    let missing = || Bprom2GffError::Extraction {
        field: "region bounds",
        block_index: block.index,
    };
    let inner = between(block.text, LOCATION_ANCHOR, "]").ok_or_else(missing)?;
    let (start, end) = inner.split_once(':').ok_or_else(missing)?;

    Ok((
        parse_int(start, "region start", block)?,
        parse_int(end, "region end", block)?,
    ))
}

/// Strand character, parenthesized right behind the region bounds.
pub fn strand(block: &Block<'_>) -> Result<Strand> {
    let inner = between(block.text, STRAND_ANCHOR, ")").ok_or(Bprom2GffError::Extraction {
        field: "strand",
        block_index: block.index,
    })?;

    match inner {
        "+" => Ok(Strand::Forward),
        "-" => Ok(Strand::Reverse),
        other => Err(Bprom2GffError::InvalidStrand {
            found: other.to_string(),
            block_index: block.index,
        }),
    }
}

/// LDF confidence score, kept verbatim: the tool's precision is not
/// guaranteed to survive a round-trip through a float.
pub fn ldf_score<'a>(block: &Block<'a>) -> Result<&'a str> {
    let missing = || Bprom2GffError::Extraction {
        field: "LDF score",
        block_index: block.index,
    };
    let rest = after(block.text, LDF_ANCHOR).ok_or_else(missing)?;
    let score = rest.lines().next().unwrap_or("").trim();

    if score.is_empty() {
        return Err(missing());
    }
    Ok(score)
}

/// BPROM's "Promoter Pos" value: the text after the anchor, up to the
/// `LDF` marker on the same line.
pub fn promoter_offset(block: &Block<'_>) -> Result<u64> {
    let rest = after(block.text, PROMOTER_POS_ANCHOR).ok_or(Bprom2GffError::Extraction {
        field: "promoter position",
        block_index: block.index,
    })?;
    let line = rest.lines().next().unwrap_or("");
    let token = match line.find("LDF") {
        Some(at) => &line[..at],
        None => line,
    };

    parse_int(token, "promoter position", block)
}

/// The `-10` box of the first predicted promoter in the block.
pub fn box10<'a>(block: &Block<'a>) -> Result<MotifBox<'a>> {
    motif_box(block, BOX10_ANCHOR, "-10 box")
}

/// The `-35` box of the first predicted promoter in the block.
pub fn box35<'a>(block: &Block<'a>) -> Result<MotifBox<'a>> {
    motif_box(block, BOX35_ANCHOR, "-35 box")
}

/// Pulls one box line apart. The padding after the anchor widens with
/// the digit count of the offset and the score field is padded too, so
/// splitting on single spaces produces empty tokens that must be
/// dropped before indexing. First surviving token is the offset, the
/// second the sequence, the last the score; taking the last rather
/// than the fourth keeps the parse independent of the padding width.
fn motif_box<'a>(block: &Block<'a>, anchor: &str, field: &'static str) -> Result<MotifBox<'a>> {
    let missing = || Bprom2GffError::Extraction {
        field,
        block_index: block.index,
    };
    let rest = after(block.text, anchor).ok_or_else(missing)?;
    let line = rest.lines().next().unwrap_or("").trim_end();
    let tokens = line.split(' ').filter(|t| !t.is_empty()).collect::<Vec<_>>();

    if tokens.len() < 4 {
        return Err(missing());
    }

    Ok(MotifBox {
        offset: parse_int(tokens[0], field, block)?,
        sequence: tokens[1],
        score: tokens[tokens.len() - 1],
    })
}

/// Returns the text between the first occurrence of `open` and the
/// next `close` after it.
fn between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let rest = after(text, open)?;
    rest.find(close).map(|end| &rest[..end])
}

/// Returns the text after the first occurrence of `anchor`.
fn after<'a>(text: &'a str, anchor: &str) -> Option<&'a str> {
    text.find(anchor).map(|at| &text[at + anchor.len()..])
}

fn parse_int(token: &str, field: &'static str, block: &Block<'_>) -> Result<u64> {
    token
        .trim()
        .parse()
        .map_err(|source| Bprom2GffError::InvalidInteger {
            field,
            block_index: block.index,
            source,
        })
}
