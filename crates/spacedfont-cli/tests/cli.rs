use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_make-spaced-font");

#[test]
fn test_missing_arguments_exit_64() {
    let output = Command::new(BIN).output().unwrap();
    assert_eq!(output.status.code(), Some(64));

    let output = Command::new(BIN).arg("font.ttf").output().unwrap();
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn test_help_exits_cleanly() {
    let output = Command::new(BIN).arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("--letter-spacing"));
    assert!(help.contains("--base-font-size"));
}

#[test]
fn test_failure_exit_64() {
    let output = Command::new(BIN)
        .args(["--letter-spacing=0.1em", "SOME_FILE_THAT_DOES_NOT_EXIST"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(64));
}

/// A stand-in `ttx` which dumps a fixed font and "compiles" by copying.
#[cfg(unix)]
const FAKE_TTX: &str = r#"#!/bin/sh
# usage: ttx -q -f -o OUTPUT INPUT
out="$4"
in="$5"
case "$in" in
  *.ttx) cp "$in" "$out" ;;
  *) cat > "$out" <<'TTX'
<ttFont>
  <head><unitsPerEm value="1000"/></head>
  <hmtx><mtx name="A" width="500" lsb="50"/></hmtx>
</ttFont>
TTX
  ;;
esac
"#;

#[cfg(unix)]
#[test]
fn test_output_reported_once() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let ttx = dir.path().join("ttx");
    fs::write(&ttx, FAKE_TTX).unwrap();
    fs::set_permissions(&ttx, fs::Permissions::from_mode(0o755)).unwrap();
    let font = dir.path().join("font.ttf");
    fs::write(&font, b"\x00\x01\x00\x00").unwrap();

    let output = Command::new(BIN)
        .arg("-v")
        .arg("--letter-spacing=0.1em")
        .arg("--ttx")
        .arg(&ttx)
        .arg(&font)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let reports = stdout.matches("Font written to").count() + stderr.matches("Font written to").count();
    assert_eq!(reports, 1);

    let written = fs::read_to_string(dir.path().join("font.space-0.1em.ttf")).unwrap();
    assert!(written.contains(r#"<mtx name="A" width="600" lsb="100"/>"#));
}
