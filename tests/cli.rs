use mgrender::mgfile::{MgFile, BORDER_OFFSET, FILE_SIZE};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{self, Command, Output};

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("mgrender-cli-{}-{}", process::id(), name))
}

fn valid_data() -> Vec<u8> {
    let mut data = Vec::new();
    MgFile::empty().save(&mut data).unwrap();
    data
}

/// Run the converter on `data` with the default log level.
fn run(name: &str, data: &[u8]) -> (Output, PathBuf) {
    let input = temp_path(&format!("{}.mg", name));
    let output = temp_path(&format!("{}.ppm", name));
    fs::write(&input, data).unwrap();
    let result = Command::new(env!("CARGO_BIN_EXE_mgrender"))
        .arg(&input)
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    fs::remove_file(&input).unwrap();
    (result, output)
}

fn assert_single_diagnostic(name: &str, data: &[u8], code: i32) {
    let (result, output) = run(name, data);
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert_eq!(result.status.code(), Some(code), "{}: {}", name, stderr);
    assert_eq!(stderr.lines().count(), 1, "{}: {}", name, stderr);
    assert!(stderr.starts_with("mgrender: Error: "), "{}: {}", name, stderr);
    assert!(stderr.contains(&format!("{}.mg", name)), "{}: {}", name, stderr);
    assert!(!output.exists());
}

#[test]
fn test_valid_file_is_converted_quietly() {
    let (result, output) = run("valid", &valid_data());
    assert_eq!(result.status.code(), Some(0));
    assert!(result.stderr.is_empty());
    let ppm = fs::read(&output).unwrap();
    assert!(ppm.starts_with(b"P6\n160 192\n255\n"));
    fs::remove_file(&output).unwrap();
}

#[test]
fn test_rejected_files_print_one_line() {
    let mut truncated = valid_data();
    truncated.pop();
    assert_single_diagnostic("truncated", &truncated, 4);

    let mut over_length = valid_data();
    over_length.push(0);
    assert_single_diagnostic("over-length", &over_length, 5);

    let mut header = valid_data();
    header[0] ^= 0xFF;
    assert_single_diagnostic("header", &header, 6);

    let mut footer = valid_data();
    footer[FILE_SIZE - 1] ^= 0xFF;
    assert_single_diagnostic("footer", &footer, 7);

    let mut volume = valid_data();
    volume[BORDER_OFFSET] = 0x01;
    assert_single_diagnostic("volume", &volume, 8);
}

#[test]
fn test_missing_input_prints_one_line() {
    let input = temp_path("missing.mg");
    let output = temp_path("missing.ppm");
    let result = Command::new(env!("CARGO_BIN_EXE_mgrender"))
        .arg(&input)
        .arg(&output)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert_eq!(result.status.code(), Some(3));
    assert_eq!(stderr.lines().count(), 1, "{}", stderr);
    assert!(!output.exists());
}
