use clap::Parser;
use ruidakit::cli::{self, Cli};
use ruidakit::{decode_container, Opcode};
use std::path::Path;
use tempfile::TempDir;

fn write_template(dir: &Path) -> std::path::PathBuf {
    let mut bytes = vec![0x5Au8; 512];
    bytes.extend_from_slice(&[0x33; 100]);
    bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
    let path = dir.join("square.rd");
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_convert_then_inspect() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());
    let input = dir.path().join("triangle.svg");
    std::fs::write(
        &input,
        r#"<svg width="20mm" height="20mm"><path d="M0,20 L10,0 L20,20 z"/></svg>"#,
    )
    .unwrap();

    let cli = Cli::parse_from([
        "ruidakit",
        "convert",
        input.to_str().unwrap(),
        "--template",
        template.to_str().unwrap(),
        "--work-area",
        "100x100",
    ]);
    cli::run(cli).unwrap();

    let output = dir.path().join("triangle.rd");
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes.len(), 512 + 40 + 6);

    let decoded = decode_container(&bytes).unwrap();
    assert_eq!(decoded.commands[0].opcode, Opcode::MoveAbsolute);
    assert_eq!((decoded.commands[0].x, decoded.commands[0].y), (0, 0));
    assert_eq!((decoded.commands[1].x, decoded.commands[1].y), (50_000, 100_000));
    assert_eq!(decoded.trailer, vec![1, 2, 3, 4, 5, 6]);

    let cli = Cli::parse_from(["ruidakit", "inspect", output.to_str().unwrap()]);
    cli::run(cli).unwrap();
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let template = write_template(dir.path());
    let input = dir.path().join("empty.svg");
    std::fs::write(&input, r#"<svg width="20mm" height="20mm"></svg>"#).unwrap();

    let cli = Cli::parse_from([
        "ruidakit",
        "convert",
        input.to_str().unwrap(),
        "-t",
        template.to_str().unwrap(),
    ]);
    let err = cli::run(cli).unwrap_err();
    assert!(format!("{:#}", err).contains("No path data found"));
    assert!(!dir.path().join("empty.rd").exists());
}

#[test]
fn test_missing_template_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("line.svg");
    std::fs::write(&input, r#"<svg viewBox="0 0 1 1"><path d="M0 0 L1 1"/></svg>"#).unwrap();

    let missing = dir.path().join("missing.rd");
    let cli = Cli::parse_from([
        "ruidakit",
        "convert",
        input.to_str().unwrap(),
        "--template",
        missing.to_str().unwrap(),
    ]);
    let err = cli::run(cli).unwrap_err();
    assert!(format!("{:#}", err).contains("Template container unavailable"));
}
