//! Basic processing integration tests

use super::{read_lines, test_cutoff, write_log};
use crate::config::ConverterConfig;
use crate::processor::Converter;
use crate::processor::writer::header_row;
use tempfile::TempDir;

fn converter(input: &std::path::Path, output: &std::path::Path) -> Converter {
    Converter::new(input.to_path_buf(), output.to_path_buf())
        .unwrap()
        .with_config(ConverterConfig::default().with_cutoff(test_cutoff()))
}

#[test]
fn test_two_files_aggregate_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    let output = temp_dir.path().join("out.csv");

    write_log(
        &input.join("a.txt"),
        &[
            "H,station log v2",
            "S,0012,9,5,0,15,6,2023,1,2,21.5",
            "S,0012,9,10,0,15,6,2023,1,2,21.7",
            "S,0012,9,15,0,15,6,2023,1,2,21.9",
        ],
    );
    write_log(
        &input.join("b.txt"),
        &["H,station log v2", "E,end of data", "# nothing here"],
    );

    let stats = converter(&input, &output).run().unwrap();

    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.total_rows, 3);
    assert_eq!(stats.output_path, output);

    let lines = read_lines(&output);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], header_row().join(","));
    assert!(lines[1].starts_with("12,2023-06-15T09:05:00,21.5,"));
    assert!(lines[2].starts_with("12,2023-06-15T09:10:00,21.7,"));
    assert!(lines[3].starts_with("12,2023-06-15T09:15:00,21.9,"));
}

#[test]
fn test_rows_follow_file_then_line_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    let output = temp_dir.path().join("out.csv");

    write_log(
        &input.join("north").join("2023.txt"),
        &["S,1,0,0,0,2,1,2023,1,2,1", "S,1,0,0,0,1,1,2023,1,2,2"],
    );
    write_log(&input.join("east.txt"), &["S,2,0,0,0,1,1,2023,1,2,3"]);

    converter(&input, &output).run().unwrap();

    let rows: Vec<Vec<String>> = read_lines(&output)
        .iter()
        .skip(1)
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    let stations: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    let temperatures: Vec<&str> = rows.iter().map(|row| row[2].as_str()).collect();
    // east.txt sorts before north/
    assert_eq!(stations, vec!["2", "1", "1"]);
    assert_eq!(temperatures, vec!["3", "1", "2"]);
}

#[test]
fn test_only_txt_files_are_read() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    let output = temp_dir.path().join("out.csv");

    write_log(&input.join("keep.txt"), &["S,5,0,0,0,1,3,2023,10,7,0.4"]);
    write_log(&input.join("skip.log"), &["S,6,0,0,0,1,3,2023,10,7,0.8"]);
    write_log(&input.join("skip.csv"), &["S,7,0,0,0,1,3,2023,10,7,1.2"]);

    let stats = converter(&input, &output).run().unwrap();

    assert_eq!(stats.files_processed, 1);
    let lines = read_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "5,2023-03-01T00:00:00,,,,,,0.4,,,,,");
}

#[test]
fn test_old_records_filtered_without_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    let output = temp_dir.path().join("out.csv");

    write_log(
        &input.join("station.txt"),
        &[
            "S,12,23,59,59,31,12,2022,1,2,5.0",
            "S,12,0,0,0,1,1,2023,1,2,6.0",
        ],
    );

    let stats = converter(&input, &output).run().unwrap();

    assert_eq!(stats.records_filtered, 1);
    assert_eq!(stats.lines_skipped, 0);
    assert_eq!(stats.total_rows, 1);
    let lines = read_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("12,2023-01-01T00:00:00,6.0,"));
}

#[test]
fn test_unfiltered_mode_keeps_everything() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    let output = temp_dir.path().join("out.csv");

    write_log(
        &input.join("station.txt"),
        &["S,12,0,0,0,1,1,1999,1,2,*", "S,12,0,0,0,1,1,2023,1,2,6.0"],
    );

    let stats = Converter::new(input, output.clone())
        .unwrap()
        .with_config(ConverterConfig::default().without_filter())
        .run()
        .unwrap();

    assert_eq!(stats.total_rows, 2);
    let lines = read_lines(&output);
    assert!(lines[1].starts_with("12,1999-01-01T00:00:00,*,"));
}

#[test]
fn test_missing_marker_and_absent_measurement_both_empty() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    let output = temp_dir.path().join("out.csv");

    write_log(
        &input.join("station.txt"),
        &["S,12,0,0,0,1,1,2023,1,2,*,2,2,64", "S,12,0,0,0,1,1,2023,2,2,64"],
    );

    converter(&input, &output).run().unwrap();

    let lines = read_lines(&output);
    assert_eq!(lines[1], lines[2]);
    assert!(lines[1].starts_with("12,2023-01-01T00:00:00,,64,"));
}

#[test]
fn test_empty_input_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("logs");
    std::fs::create_dir_all(&input).unwrap();
    let output = temp_dir.path().join("out.csv");

    let stats = converter(&input, &output).run().unwrap();

    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.total_rows, 0);
    // The file is still created, just without a header
    assert!(output.exists());
    assert!(read_lines(&output).is_empty());
}
