use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_perf-plot");

/// Run the binary headless inside `dir`.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .expect("binary runs")
}

#[test]
fn unpaired_arguments_print_usage_and_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("file1"), "1 2\n3 4\n").unwrap();

    let out = run_in(dir.path(), &["title1", "file1", "title2"]);

    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Usage : perf-plot"), "{stdout}");
    assert!(!dir.path().join("performance_plot.png").exists());
}

#[test]
fn no_arguments_print_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &[]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn short_row_fails_before_plotting() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("good"), "# ok\n1 10 100\n1 2 3\n").unwrap();
    std::fs::write(dir.path().join("bad"), "# short\n1 10 100\n1 2\n").unwrap();

    let out = run_in(dir.path(), &["good", "good", "bad", "bad"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("expected 3 values but found 2"), "{stderr}");
    assert!(!dir.path().join("performance_plot.png").exists());
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["ghost", "does_not_exist.txt"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does_not_exist.txt"), "{stderr}");
}

#[test]
fn help_spelling_is_a_title_not_a_flag() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--help", "missing_perf"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("loading '--help' from missing_perf"), "{stderr}");
}

// On macOS and Windows a display is always assumed, so the run would open a window.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
#[test]
fn headless_run_writes_and_overwrites_png() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a"), "# agent=a\n1 10 100\n1 2 3\n3 4 5\n").unwrap();
    std::fs::write(dir.path().join("b"), "# agent=b\n1 10 100\n0.5 1 1.5\n").unwrap();
    let png = dir.path().join("performance_plot.png");

    let out = run_in(dir.path(), &["A", "a", "B", "b"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim_end(),
        "Plot saved to performance_plot.png"
    );
    let first = image::open(&png).unwrap();
    assert!(first.width() > 0 && first.height() > 0);
    let first_bytes = std::fs::read(&png).unwrap();

    std::fs::write(&png, b"stale").unwrap();
    let out = run_in(dir.path(), &["A", "a", "B", "b"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Plot saved to performance_plot.png"));
    image::open(&png).unwrap();
    assert_eq!(std::fs::read(&png).unwrap(), first_bytes);
}
