use phylogrowth::histogram::{Histogram, HistogramError, PlotConfig};
use phylogrowth::{parse_tree_file, parse_tree_str};
use std::fs;
use tempfile::{NamedTempFile, TempDir};

// --- TESTS BUCKETS ---
#[test]
fn test_basic_buckets() {
    let hist = Histogram::new(&[95.0, 105.0, 210.0], 100).unwrap();
    assert_eq!(hist.bins(), &[(100, 2), (200, 1)]);
    assert_eq!(hist.step(), 100);
}

#[test]
fn test_interior_buckets_are_zero() {
    let hist = Histogram::new(&[1000.0, 1490.0], 100).unwrap();
    assert_eq!(
        hist.bins(),
        &[(1000, 1), (1100, 0), (1200, 0), (1300, 0), (1400, 0), (1500, 1)]
    );
}

#[test]
fn test_unsorted_input() {
    let hist = Histogram::new(&[300.0, 100.0, 300.0, 200.0], 100).unwrap();
    assert_eq!(hist.bins(), &[(100, 1), (200, 1), (300, 2)]);
}

#[test]
fn test_empty_input() {
    assert!(matches!(Histogram::new(&[], 100), Err(HistogramError::EmptyInput)));
}

#[test]
fn test_fixture_histogram() {
    let tree = parse_tree_file("tests/fixtures/tree.txt").unwrap();
    let hist = Histogram::new(&tree.tmrcas(), 100).unwrap();

    assert_eq!(
        hist.bins(),
        &[(4200, 2), (4300, 0), (4400, 2), (4500, 3), (4600, 0), (4700, 0), (4800, 2)]
    );
    let total: usize = hist.bins().iter().map(|(_, count)| count).sum();
    assert_eq!(total, tree.tmrcas().len());
}

#[test]
fn test_huge_tmrca_is_out_of_range() {
    let tree = parse_tree_str("A1 TMRCA 1e300\n  id:S1\n  id:S2\n").unwrap();
    let err = Histogram::new(&tree.tmrcas(), 100).unwrap_err();

    assert!(matches!(err, HistogramError::ValueOutOfRange(v) if v == 1e300));
}

#[test]
fn test_sparse_values_too_many_buckets() {
    let tree = parse_tree_str("A1 TMRCA 900000000\n  B1 TMRCA 1\n    id:S1\n    id:S2\n  id:S3\n")
        .unwrap();
    assert!(matches!(
        Histogram::new(&tree.tmrcas(), 1),
        Err(HistogramError::RangeTooWide { min: 1, max: 900_000_000 })
    ));
    // A wider step keeps the range small enough
    assert_eq!(Histogram::new(&tree.tmrcas(), 100_000_000).unwrap().bins().len(), 10);
}

// --- TESTS EXPORT ---
#[test]
fn test_text_formats() {
    let hist = Histogram::new(&[95.0, 105.0, 210.0], 100).unwrap();

    assert_eq!(hist.to_csv(), "100,2\r\n200,1\r\n");
    assert_eq!(hist.to_txt(), "100\t2\r\n200\t1\r\n");
    assert_eq!(hist.to_string(), "100, 2\r\n200, 1\r\n");
}

#[test]
fn test_write_csv_and_txt() {
    let hist = Histogram::new(&[95.0, 105.0, 210.0], 100).unwrap();
    let csv = NamedTempFile::new().unwrap();
    let txt = NamedTempFile::new().unwrap();

    hist.write_csv(csv.path()).unwrap();
    hist.write_txt(txt.path()).unwrap();

    assert_eq!(fs::read_to_string(csv.path()).unwrap(), hist.to_csv());
    assert_eq!(fs::read_to_string(txt.path()).unwrap(), hist.to_txt());
}

#[test]
fn test_write_to_missing_directory() {
    let hist = Histogram::new(&[100.0], 100).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    assert!(matches!(hist.write_csv(&path), Err(HistogramError::Io(_))));
}

// --- TESTS PNG EXPORT ---
#[test]
fn test_png_missing_gnuplot() {
    let hist = Histogram::new(&[100.0, 200.0], 100).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("growth.png");
    let config = PlotConfig::default().with_executable("phylogrowth-no-such-gnuplot");

    let err = hist.write_png(&path, "U152", &config).unwrap_err();
    assert!(matches!(err, HistogramError::Gnuplot(_)));
    assert!(err.to_string().starts_with("could not run Gnuplot"));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_png_failing_gnuplot() {
    let hist = Histogram::new(&[100.0, 200.0], 100).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("growth.png");
    let config = PlotConfig::default().with_executable("false");

    let err = hist.write_png(&path, "", &config).unwrap_err();
    assert!(matches!(err, HistogramError::Gnuplot(_)));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_png_writes_plotter_output() {
    let hist = Histogram::new(&[100.0, 200.0], 100).unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("growth.png");
    // `true` ignores the script and prints nothing
    let config = PlotConfig::default().with_executable("true");

    hist.write_png(&path, "U152", &config).unwrap();
    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_plot_config_default() {
    assert_eq!(PlotConfig::default().executable, "gnuplot");
}
