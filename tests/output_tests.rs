use pretty_assertions::assert_eq;
use startup_showdown::aggregator::aggregate;
use startup_showdown::output::csv::{parse_samples, samples_to_string, stats_to_string};
use startup_showdown::output::{read_samples, write_samples, write_stats};
use startup_showdown::parser::Sample;
use startup_showdown::utils::error::OutputError;
use tempfile::NamedTempFile;

#[test]
fn test_latency_rounding_in_interchange() {
    let samples = vec![Sample::new("native", "c", 1.23456789, "./native/c/1.trace.txt").unwrap()];
    let text = samples_to_string(&samples);

    assert_eq!(
        text,
        "mode,sut,latency,path\nnative,c,1.2346,./native/c/1.trace.txt\n"
    );
}

#[test]
fn test_samples_survive_write_and_read() {
    let samples = vec![
        Sample::new("native", "c", 0.0012, "./native/c/1.trace.txt").unwrap(),
        Sample::new("docker", "py,thon", 0.3, "./docker/py,thon/\"q\".trace.txt").unwrap(),
        Sample::new("wasm", "rust", 2.0, "./wasm/rust/7.trace.txt").unwrap(),
    ];
    let temp_file = NamedTempFile::new().unwrap();

    write_samples(&samples, temp_file.path()).unwrap();
    let loaded = read_samples(temp_file.path()).unwrap();

    assert_eq!(loaded, samples);
}

#[test]
fn test_read_samples_accepts_crlf_and_extra_precision() {
    let text = "mode,sut,latency,path\r\nnative,c,0.123456,a.trace.txt\r\n";
    let samples = parse_samples(text).unwrap();

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].latency(), 0.1235);
    assert_eq!(samples[0].source(), "a.trace.txt");
}

#[test]
fn test_read_samples_missing_field() {
    let result = parse_samples("mode,sut,latency,path\nnative,c,0.1\n");
    assert!(matches!(
        result,
        Err(OutputError::MalformedRecord { line: 2, .. })
    ));
}

#[test]
fn test_read_samples_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_samples(dir.path().join("missing.csv"));
    assert!(matches!(result, Err(OutputError::IoError(_))));
}

#[test]
fn test_stats_report_format() {
    let samples = vec![
        Sample::new("A", "X", 1.0, "a").unwrap(),
        Sample::new("A", "X", 3.0, "b").unwrap(),
        Sample::new("A", "Y", 0.5, "c").unwrap(),
        Sample::new("B", "X", 0.25, "d").unwrap(),
    ];
    let summary = aggregate(&samples).unwrap();

    assert_eq!(
        stats_to_string(summary.iter_stats()),
        "mode,sut,mean,median,min,max\nA,Y,0.5,0.5,0.5,0.5\nA,X,2,2,1,3\nB,X,0.25,0.25,0.25,0.25\n"
    );
}

#[test]
fn test_write_stats_to_file() {
    let samples = vec![Sample::new("A", "X", 1.5, "a").unwrap()];
    let summary = aggregate(&samples).unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/stats.csv");

    write_stats(summary.iter_stats(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "mode,sut,mean,median,min,max\nA,X,1.5,1.5,1.5,1.5\n");
}

#[test]
fn test_write_samples_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = write_samples(&[], temp_dir.path());
    assert!(matches!(result, Err(OutputError::InvalidPath(_))));
}
