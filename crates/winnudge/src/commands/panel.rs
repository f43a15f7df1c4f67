use std::io;

use winnudge_core::settings::SettingsStore;
use winnudge_core::status::StatusSlot;
use winnudge_core::step::StepStore;

use super::{fail, init_logging};
use crate::panel::{self, Panel};
use crate::supervisor::ListenerProcess;

/// Runs the control panel on stdin/stdout until `quit` or end of input.
pub fn execute() {
    init_logging();

    let steps = StepStore::open_default().unwrap_or_else(|e| fail(e));
    let settings = SettingsStore::open_default().unwrap_or_else(|e| fail(e));
    let status = StatusSlot::default();
    let listener = ListenerProcess::current_exe(status.clone())
        .unwrap_or_else(|e| fail(format!("could not locate winnudge executable: {e}")));

    let mut panel = Panel::new(steps, settings, listener, status);
    if let Err(e) = panel::run(&mut panel, io::stdin().lock(), io::stdout()) {
        fail(e);
    }
}
