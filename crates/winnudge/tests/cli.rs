use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Runs winnudge with its config directory pointed at `dir`.
fn winnudge(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_winnudge"))
        .args(args)
        .env("WINNUDGE_CONFIG_DIR", dir.path())
        .output()
        .expect("failed to execute winnudge")
}

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_winnudge"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute winnudge");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("foreground window"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_winnudge"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute winnudge");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("winnudge"));
}

#[test]
fn step_defaults_to_forty() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let output = winnudge(&dir, &["step"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Move step: 40 px"));
}

#[test]
fn step_set_persists_value() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let set = winnudge(&dir, &["step", "set", "75"]);
    let show = winnudge(&dir, &["step", "show"]);

    // Assert
    assert!(set.status.success());
    assert!(String::from_utf8_lossy(&show.stdout).contains("Move step: 75 px"));
    let saved = std::fs::read_to_string(dir.path().join("move_pixels.txt")).unwrap();
    assert_eq!(saved, "75");
}

#[test]
fn step_set_rejects_non_numbers() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let output = winnudge(&dir, &["step", "set", "lots"]);

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input for pixels"));
    assert!(!dir.path().join("move_pixels.txt").exists());
}

#[test]
fn theme_set_updates_settings_file() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let output = winnudge(&dir, &["theme", "set", "--background", "#112233"]);

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Background: #112233"));
    assert!(stdout.contains("Font: #00FF00"));
    let json = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
    assert!(json.contains("\"background_color\": \"#112233\""));
}

#[test]
fn theme_set_light_applies_preset_colors() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let output = winnudge(&dir, &["theme", "set", "--name", "light"]);

    // Assert
    assert!(output.status.success());
    let json = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
    assert!(json.contains("\"theme\": \"light\""));
    assert!(json.contains("\"background_color\": \"#FFFFFF\""));
    assert!(json.contains("\"font_color\": \"#000000\""));
}

#[test]
fn theme_set_rejects_bad_color() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let output = winnudge(&dir, &["theme", "set", "--font", "blue"]);

    // Assert
    assert!(!output.status.success());
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn init_creates_config_files_once() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let first = winnudge(&dir, &["init"]);
    let second = winnudge(&dir, &["init"]);

    // Assert
    assert!(first.status.success());
    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("keybindings.toml").exists());
    assert!(String::from_utf8_lossy(&second.stdout).contains("Already exists"));
}

#[test]
fn do_rejects_unknown_action() {
    // Arrange
    let dir = TempDir::new().unwrap();

    // Act
    let output = winnudge(&dir, &["do", "spin-around"]);

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spin-around"));
}

#[test]
fn panel_reads_commands_from_stdin() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_winnudge"))
        .arg("panel")
        .env("WINNUDGE_CONFIG_DIR", dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to execute winnudge");

    // Act
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"step +5\nconfirm\nstatus\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Move pixels updated to 45"));
    assert!(stdout.contains("Listener: stopped"));
    let saved = std::fs::read_to_string(dir.path().join("move_pixels.txt")).unwrap();
    assert_eq!(saved, "45");
}
