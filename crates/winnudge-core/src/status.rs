use std::io::BufRead;
use std::sync::{Arc, Mutex};

/// Single-slot holder for the latest status line.
///
/// Writers overwrite, readers see only the newest value. Cloning shares
/// the same slot.
#[derive(Debug, Clone, Default)]
pub struct StatusSlot {
    inner: Arc<Mutex<String>>,
}

impl StatusSlot {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial.into())),
        }
    }

    pub fn set(&self, line: impl Into<String>) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = line.into();
        }
    }

    pub fn get(&self) -> String {
        self.inner.lock().map_or(String::new(), |s| s.clone())
    }
}

/// Publishes every non-blank line of `reader` into `slot` until EOF.
///
/// Blocks; run it on a thread dedicated to one pipe. Read errors end the
/// loop the same way EOF does.
pub fn pump_lines<R: BufRead>(reader: R, slot: &StatusSlot) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        let line = line.trim();
        if !line.is_empty() {
            slot.set(line);
        }
    }
}
