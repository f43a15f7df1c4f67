use std::path::Path;

use winnudge_core::config;

use super::fail;

/// Creates the default configuration files in the config directory.
///
/// Generates `config.toml` and `keybindings.toml` with comments explaining
/// every option. Existing files are not overwritten.
pub fn execute() {
    let dir = config::config_dir().unwrap_or_else(|e| fail(e));

    if let Err(e) = std::fs::create_dir_all(&dir) {
        fail(format!("could not create {}: {e}", dir.display()));
    }

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    );
    write_if_missing(
        &dir.join("keybindings.toml"),
        &config::template::generate_keybindings(),
    );

    println!("\nEdit these files to change the overlay, logging and hotkeys.");
    println!("Restart the listener for changes to take effect.");
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
