use winnudge_core::step::{self, StepStore};

use super::fail;

fn store() -> StepStore {
    StepStore::open_default().unwrap_or_else(|e| fail(e))
}

pub fn show() {
    println!("Move step: {} px", store().load());
}

/// Saves a new move step. Negative values are stored as 0.
pub fn set(value: &str) {
    let Some(parsed) = step::parse_step(value) else {
        fail("Invalid input for pixels. Please enter a valid number.");
    };

    let value = parsed.max(0);
    let store = store();
    if let Err(e) = store.save(value) {
        fail(format!("could not write {}: {e}", store.path().display()));
    }
    println!("Move pixels updated to {value}");
}
