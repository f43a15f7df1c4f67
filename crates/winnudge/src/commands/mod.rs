pub mod do_action;
pub mod init;
pub mod listen;
pub mod panel;
pub mod step;
pub mod theme;

/// Prints `Error: {message}` and exits with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Loads `config.toml` and installs the global subscriber.
pub fn init_logging() -> winnudge_core::config::Config {
    let config = winnudge_core::config::load();
    winnudge_core::log::init(&config.logging);
    config
}
