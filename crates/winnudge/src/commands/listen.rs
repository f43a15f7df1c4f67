use super::init_logging;

/// Runs the hotkey listener until Ctrl+C or until the panel stops it.
///
/// Status lines go to stdout, one per line, so the control panel can show
/// the latest one.
pub fn execute() {
    let config = init_logging();
    run(config);
}

#[cfg(windows)]
fn run(config: winnudge_core::config::Config) {
    use winnudge_core::config;
    use winnudge_core::step::StepStore;
    use winnudge_windows::listener::Listener;

    use super::fail;

    let bindings = config::load_keybindings();
    let steps = StepStore::open_default().unwrap_or_else(|e| fail(e));

    let listener = match Listener::start(config, &bindings, steps) {
        Ok(listener) => listener,
        Err(e) => fail(e),
    };

    println!("Hotkey listener started.");
    println!("Use the arrow keys to move the window and Shift + arrow keys to resize it.");
    println!("Ctrl + Up/Down changes opacity, Ctrl + Right/Left pins or unpins it on top.");
    println!("Ctrl + Shift + M sends it to the next monitor.");

    listener.run();
    println!("Hotkey listener stopped.");
}

#[cfg(not(windows))]
fn run(_config: winnudge_core::config::Config) {
    super::fail("the hotkey listener is only supported on Windows.");
}
