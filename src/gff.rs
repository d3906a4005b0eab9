//! GFF3-side model: strand, coordinate projection and record rendering.

use std::fmt;

use crate::bprom::ExtractedFields;

/// GFF3 Source column, fixed for every record this tool emits.
pub const SOURCE: &str = "bprom";
/// GFF3 Type column, fixed.
pub const FEATURE_TYPE: &str = "promoter";
/// Conventional span of a bacterial promoter measured from the `-35`
/// hexamer. A domain constant: never derived from the motif strings,
/// whose lengths vary independently.
pub const PROMOTER_SPAN: u64 = 35;

/// Strand of a predicted promoter. BPROM only ever reports `+` or `-`,
/// so there is no unknown variant and every match is exhaustive.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// Projects a `-35` box offset inside the analyzed window back onto
/// absolute genome coordinates.
///
/// The window was cut out of the genome strand-aware by the upstream
/// step: on `+` it lies below the gene start and the feature grows
/// toward higher coordinates, on `-` it lies above and the feature
/// grows downward. The returned pair keeps that pull direction, so
/// `end < start` on the reverse strand; GFF3 emission normalizes to
/// `(min, max)` and leaves orientation to the strand column.
///
/// Box offsets always fall inside the analyzed window, so the reverse
/// arm cannot underflow on well-formed BPROM output.
pub fn project(region_start: u64, region_end: u64, strand: Strand, box_offset: u64) -> (u64, u64) {
    match strand {
        Strand::Forward => {
            let start = region_start + box_offset;
            (start, start + PROMOTER_SPAN)
        }
        Strand::Reverse => {
            let start = region_end - box_offset;
            (start, start - PROMOTER_SPAN)
        }
    }
}

/// One GFF3 promoter feature, built once per surviving block and
/// immutable afterwards.
#[derive(Debug, PartialEq, Eq)]
pub struct PromoterRecord {
    pub seqid: String,
    /// Absolute coordinate of the `-35` box, 1-based.
    pub start: u64,
    /// `start` pushed one promoter span along the pull direction.
    pub end: u64,
    /// LDF score text for the Score column.
    pub score: String,
    pub strand: Strand,
    pub box10_seq: String,
    pub box35_seq: String,
    pub box10_pos: u64,
    pub box35_pos: u64,
}

impl PromoterRecord {
    /// Assembles the record for one block from its extracted fields.
    pub fn from_fields(fields: &ExtractedFields<'_>) -> Self {
        let (start, end) = project(
            fields.region_start,
            fields.region_end,
            fields.strand,
            fields.box35.offset,
        );

        Self {
            seqid: fields.accession.to_string(),
            start,
            end,
            score: fields.ldf_score.to_string(),
            strand: fields.strand,
            box10_seq: fields.box10.sequence.to_string(),
            box35_seq: fields.box35.sequence.to_string(),
            box10_pos: fields.box10.offset,
            box35_pos: fields.box35.offset,
        }
    }

    /// Attributes column: the motif sequences and their window-relative
    /// offsets. Per-box scores stay out, the Score column already
    /// carries the LDF score.
    fn attributes(&self) -> String {
        format!(
            "Note=box10_seq={};box35_seq={};box10_pos={};box35_pos={}",
            self.box10_seq, self.box35_seq, self.box10_pos, self.box35_pos
        )
    }
}

/// Renders the nine GFF3 columns. Start/End are normalized to
/// ascending order as GFF3 requires; Phase is `.` for anything that is
/// not a CDS.
impl fmt::Display for PromoterRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t.\t{}",
            self.seqid,
            SOURCE,
            FEATURE_TYPE,
            self.start.min(self.end),
            self.start.max(self.end),
            self.score,
            self.strand,
            self.attributes()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bprom::MotifBox;

    #[test]
    fn project_forward() {
        assert_eq!(project(100, 200, Strand::Forward, 20), (120, 155));
    }

    #[test]
    fn project_reverse() {
        assert_eq!(project(100, 200, Strand::Reverse, 20), (180, 145));
    }

    #[test]
    fn strand_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    fn fields(strand: Strand) -> ExtractedFields<'static> {
        ExtractedFields {
            accession: "Gm01",
            region_start: 100,
            region_end: 200,
            strand,
            ldf_score: "4.01",
            promoter_offset: 45,
            box10: MotifBox {
                offset: 30,
                sequence: "ctgttataat",
                score: "53",
            },
            box35: MotifBox {
                offset: 20,
                sequence: "gtgact",
                score: "35",
            },
        }
    }

    #[test]
    fn record_renders_nine_columns_forward() {
        let record = PromoterRecord::from_fields(&fields(Strand::Forward));
        assert_eq!(
            record.to_string(),
            "Gm01\tbprom\tpromoter\t120\t155\t4.01\t+\t.\t\
             Note=box10_seq=ctgttataat;box35_seq=gtgact;box10_pos=30;box35_pos=20"
        );
    }

    #[test]
    fn record_normalizes_reverse_coordinates() {
        let record = PromoterRecord::from_fields(&fields(Strand::Reverse));
        // the raw pair keeps the pull direction
        assert_eq!((record.start, record.end), (180, 145));

        let line = record.to_string();
        let columns = line.split('\t').collect::<Vec<_>>();
        assert_eq!(columns.len(), 9);
        assert_eq!(columns[3], "145");
        assert_eq!(columns[4], "180");
        assert_eq!(columns[6], "-");
        assert_eq!(columns[7], ".");
    }
}
