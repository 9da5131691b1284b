use phylogrowth::parser::{ParserConfig, ParsingErrorType, TreeParser, preprocess};
use phylogrowth::{PhyloError, parse_tree_file, parse_tree_str};
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/tree.txt";

// --- TESTS FILE PARSING ---
#[test]
fn test_fixture_structure() {
    let tree = parse_tree_file(Path::new(FIXTURE)).unwrap();

    assert_eq!(tree.snp(), "R1");
    assert_eq!(tree.tmrca(), 4800.0);
    assert_eq!(tree.num_clades(), 6);
    assert_eq!(tree.num_samples(), 9);

    // Root: P312, U106 and one sample
    let subclades: Vec<&str> = tree.subclades().iter().map(|c| c.snp()).collect();
    assert_eq!(subclades, vec!["P312", "U106"]);
    assert_eq!(tree.samples()[0].id(), "YF012");

    // DF27* is dropped, its children belong to P312
    let p312 = &tree.subclades()[0];
    let subclades: Vec<&str> = p312.subclades().iter().map(|c| c.snp()).collect();
    assert_eq!(subclades, vec!["U152", "CTS4528"]);
    let samples: Vec<&str> = p312.samples().iter().map(|s| s.id()).collect();
    assert_eq!(samples, vec!["YF006", "YF010"]);

    // Comment removed from clade text
    assert_eq!(p312.text(), "P312 TMRCA 4500");
}

#[test]
fn test_fixture_skips_new_samples() {
    let tree = parse_tree_file(FIXTURE).unwrap();
    assert!(
        tree.pre_order_iter()
            .flat_map(|c| c.samples())
            .all(|s| s.id() != "YF007")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let result = parse_tree_file("tests/fixtures/does_not_exist.txt");
    assert!(matches!(result, Err(PhyloError::Io(_))));
}

#[test]
fn test_parse_reader() {
    let input = "A1 TMRCA 100\n  id:S1\n  id:S2\n";
    let tree = TreeParser::default().parse_reader(input.as_bytes()).unwrap();
    assert_eq!(tree.num_samples(), 2);
    assert_eq!(tree.tmrcas(), vec![100.0]);
}

// --- TESTS STRING PARSING ---
#[test]
fn test_tmrca_formats() {
    let tree = parse_tree_str("A1 TMRCA 4500\n B1 TMRCA:3200.5\n B2 TMRCA\n B3\n").unwrap();
    let tmrcas: Vec<f64> = tree.pre_order_iter().map(|c| c.tmrca()).collect();
    assert_eq!(tmrcas, vec![4500.0, 3200.5, 0.0, 0.0]);
}

#[test]
fn test_identifier_extraction() {
    let tree = parse_tree_str("CTS4528 descr\n  *** 123 -\n  *** no letters 123\n  R1b1a2\n").unwrap();
    let snps: Vec<&str> = tree.pre_order_iter().map(|c| c.snp()).collect();
    assert_eq!(snps, vec!["CTS4528", "", "no", "R1"]);
}

#[test]
fn test_sample_id_after_marker() {
    let tree = parse_tree_str("A1\n  FTDNA id:YF0123 (Ireland)\n").unwrap();
    assert_eq!(tree.samples()[0].id(), "YF0123");
    assert_eq!(tree.samples()[0].text(), "FTDNA id:YF0123 (Ireland)");
}

#[test]
fn test_invalid_tmrca_has_line_number() {
    let err = parse_tree_str("// header\nA1 TMRCA 4500\n  B1 TMRCA 12x\n").unwrap_err();

    assert_eq!(err.kind(), &ParsingErrorType::InvalidTmrca("12x".to_string()));
    assert_eq!(err.line_number(), Some(3));
    assert!(err.to_string().starts_with("line: 3, could not convert TMRCA value to float: 12x"));
}

#[test]
fn test_no_valid_lines() {
    for input in ["", "// only a comment\n\n   \n", "A1 new\n"] {
        let err = parse_tree_str(input).unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::NoValidLines);
        assert_eq!(err.line_number(), None);
    }
}

#[test]
fn test_lines_after_root_block_ignored() {
    let tree = parse_tree_str("A1\n  id:S1\nB1\n  id:S2\n").unwrap();
    assert_eq!(tree.snp(), "A1");
    assert_eq!(tree.num_samples(), 1);
}

#[test]
fn test_mixed_indentation_counts_characters() {
    // Tab and two spaces are different depths
    let tree = parse_tree_str("A1\n\tB1\n\t\tid:S1\n  C1\n").unwrap();
    let b1 = &tree.subclades()[0];
    assert_eq!(b1.samples().len(), 1);
    assert_eq!(b1.subclades()[0].snp(), "C1");
}

#[test]
fn test_deep_tree_within_max_depth() {
    let depth = 500;
    let input: String = (0..depth).map(|i| format!("{}Z{i}\n", " ".repeat(i))).collect();

    let tree = parse_tree_str(&input).unwrap();
    assert_eq!(tree.num_clades(), depth);
    assert_eq!(tree.pre_order_iter().last().map(|c| c.snp()), Some("Z499"));
}

// --- TESTS CONFIGURATION ---
#[test]
fn test_custom_markers() {
    let config = ParserConfig::default()
        .with_comment_marker("#")
        .with_sample_marker("kit=")
        .with_tmrca_marker("age", 4)
        .with_new_marker("pending")
        .with_star_marker('+');
    let input = "\
A1 age 900 # root
  B1+
    kit=K1
    kit=K2 pending
    C1 age 300
  kit=K3
";

    let tree = TreeParser::new(config).parse_str(input).unwrap();
    assert_eq!(tree.tmrca(), 900.0);
    let samples: Vec<&str> = tree.samples().iter().map(|s| s.id()).collect();
    assert_eq!(samples, vec!["K1", "K3"]);
    assert_eq!(tree.subclades()[0].tmrca(), 300.0);
}

#[test]
fn test_preprocess_records() {
    let records = preprocess(["A1", "\tB1*", "\t\tC1", "\tD1"], &ParserConfig::default()).unwrap();

    let flattened: Vec<(usize, usize, &str)> = records
        .iter()
        .map(|r| (r.line_number, r.indent, r.text.as_str()))
        .collect();
    assert_eq!(flattened, vec![(1, 0, "A1"), (3, 1, "C1"), (4, 1, "D1")]);
}
