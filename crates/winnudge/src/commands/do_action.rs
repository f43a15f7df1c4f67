use winnudge_core::Action;

use super::{fail, init_logging};

/// Applies a single action to the foreground window and exits.
pub fn execute(name: &str) {
    let config = init_logging();
    let action: Action = name.parse().unwrap_or_else(|e| fail(e));
    run(action, config);
}

#[cfg(windows)]
fn run(action: Action, config: winnudge_core::config::Config) {
    use winnudge_core::step::StepStore;
    use winnudge_windows::listener;

    let steps = StepStore::open_default().unwrap_or_else(|e| fail(e));
    match listener::run_once(action, &config, &steps) {
        Ok(Some(report)) => println!("{report}"),
        Ok(None) => {}
        Err(e) => fail(e),
    }
}

#[cfg(not(windows))]
fn run(action: Action, _config: winnudge_core::config::Config) {
    fail(format!("cannot apply {action}: window control is only supported on Windows."));
}
