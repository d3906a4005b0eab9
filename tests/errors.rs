use bprom2gff::{run, Bprom2GffError, Config};
use indoc::indoc;
use std::path::{Path, PathBuf};

fn write_temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn config(input: PathBuf, output: PathBuf) -> Config {
    Config {
        input,
        output,
        threads: 2,
        chunks: 512,
        skip_invalid: false,
    }
}

/// Input without a single `>` marker has nothing to extract.
#[test]
fn input_without_markers_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = write_temp_file(dir.path(), "input.txt", "no blocks in here\nat all\n");
    let output_path = dir.path().join("output.gff3");

    let err = run(&config(input_path, output_path)).unwrap_err();
    assert!(matches!(err, Bprom2GffError::MalformedInput));
}

/// A strand character outside `+`/`-` is fatal and names the block.
#[test]
fn invalid_strand_names_the_block() {
    let dir = tempfile::tempdir().unwrap();
    let bprom = indoc! {"
        >Gm01_a Location=[300:400](+)
         Number of predicted promoters -      0
        >Gm01_b Location=[100:200](*)
         Number of predicted promoters -      1
          Promoter Pos:     45 LDF-  4.01
         -10 box at pos.    30 ctgttataat Score    53
         -35 box at pos.    20 gtgact Score     35
    "};
    let input_path = write_temp_file(dir.path(), "input.txt", bprom);
    let output_path = dir.path().join("output.gff3");

    let err = run(&config(input_path, output_path)).unwrap_err();
    match err {
        Bprom2GffError::InvalidStrand { found, block_index } => {
            assert_eq!(found, "*");
            assert_eq!(block_index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Without --skip-invalid the first missing anchor aborts the run.
#[test]
fn missing_box_aborts_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let bprom = indoc! {"
        >Gm01_a Location=[100:200](+)
         Number of predicted promoters -      1
          Promoter Pos:     45 LDF-  4.01
         -10 box at pos.    30 ctgttataat Score    53
    "};
    let input_path = write_temp_file(dir.path(), "input.txt", bprom);
    let output_path = dir.path().join("output.gff3");

    let err = run(&config(input_path, output_path)).unwrap_err();
    assert!(matches!(
        err,
        Bprom2GffError::Extraction { field: "-35 box", block_index: 0 }
    ));
}

/// With --skip-invalid the bad block is dropped and counted while the
/// rest of the run completes.
#[test]
fn skip_invalid_isolates_bad_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let bprom = indoc! {"
        >Gm01_a Location=[100:200](+)
         Number of predicted promoters -      1
          Promoter Pos:     45 LDF-  4.01
         -10 box at pos.    30 ctgttataat Score    53
        >Gm02_b Location=[100:200](+)
         Number of predicted promoters -      1
          Promoter Pos:     45 LDF-  1.33
         -10 box at pos.    30 tataat Score    20
         -35 box at pos.    20 ttgaca Score    21
    "};
    let input_path = write_temp_file(dir.path(), "input.txt", bprom);
    let output_path = dir.path().join("output.gff3");

    let mut cfg = config(input_path, output_path.clone());
    cfg.skip_invalid = true;

    let stats = run(&cfg).unwrap();
    assert_eq!(stats.records, 1);
    assert_eq!(stats.failed, 1);

    let output = std::fs::read_to_string(&output_path).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Gm02\tbprom\tpromoter\t"));
}
