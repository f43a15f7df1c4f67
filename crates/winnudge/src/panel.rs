//! Text control panel.
//!
//! A line-oriented replacement for a settings window: edit the move step,
//! start and stop the listener, and adjust the theme. Each input line is
//! one command; [`Panel::handle`] returns what to print.

use std::io::{self, BufRead, Write};

use winnudge_core::settings::{DisplaySettings, PRESETS, SettingsStore};
use winnudge_core::status::StatusSlot;
use winnudge_core::step::{self, StepStore};

use crate::supervisor::ListenerProcess;

const INVALID_STEP: &str = "Invalid input for pixels. Please enter a valid number.";

const HELP: &str = "\
Commands:
  step              Show the pending and saved move step
  step N            Set the pending move step
  step +N | -N      Nudge the pending move step (never below 0)
  confirm           Save the pending move step
  start             Save the step and (re)start the hotkey listener
  stop              Stop the hotkey listener
  status            Show whether the listener runs and its last output
  theme             Show the display settings
  theme dark|light  Switch to a preset theme
  theme background #RRGGBB
  theme font #RRGGBB
  theme name NAME
  help              Show this list
  quit              Stop the listener and leave

Hotkeys (while the listener runs):
  Arrow keys            Move the window by the move step
  Shift + Arrow keys    Grow the window on that side
  Ctrl + Up / Down      Increase / decrease opacity
  Ctrl + Right          Pin the window on top
  Ctrl + Left           Unpin the window
  Ctrl + Shift + M      Move the window to the next monitor";

/// What the panel loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Quit(text) => text,
        }
    }
}

pub struct Panel {
    steps: StepStore,
    settings_store: SettingsStore,
    settings: DisplaySettings,
    pending_step: i32,
    listener: ListenerProcess,
    status: StatusSlot,
}

impl Panel {
    /// Creates a panel; the pending step starts from the saved one.
    pub fn new(
        steps: StepStore,
        settings_store: SettingsStore,
        listener: ListenerProcess,
        status: StatusSlot,
    ) -> Self {
        let pending_step = steps.load();
        let settings = settings_store.load();
        status.set("Type 'start' to launch the hotkey listener");
        Self {
            steps,
            settings_store,
            settings,
            pending_step,
            listener,
            status,
        }
    }

    pub fn pending_step(&self) -> i32 {
        self.pending_step
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Runs one command line.
    pub fn handle(&mut self, line: &str) -> Reply {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Reply::Continue(String::new());
        };
        let args: Vec<&str> = words.collect();

        match command.to_ascii_lowercase().as_str() {
            "step" => Reply::Continue(self.step(&args)),
            "confirm" => Reply::Continue(self.confirm()),
            "start" | "restart" => Reply::Continue(self.start()),
            "stop" => Reply::Continue(self.stop()),
            "status" => Reply::Continue(self.status()),
            "theme" => Reply::Continue(self.theme(&args)),
            "help" | "?" => Reply::Continue(HELP.to_string()),
            "quit" | "exit" => {
                self.listener.stop();
                Reply::Quit("Bye.".to_string())
            }
            other => Reply::Continue(format!("Unknown command '{other}'. Type 'help'.")),
        }
    }

    fn step(&mut self, args: &[&str]) -> String {
        let Some(value) = args.first() else {
            return format!(
                "Move step: {} (saved: {})",
                self.pending_step(),
                self.steps.load()
            );
        };

        // A leading sign nudges, a bare number replaces.
        let signed = value.starts_with('+') || value.starts_with('-');
        match step::parse_step(value) {
            Some(delta) if signed => self.pending_step = step::nudge(self.pending_step, delta),
            Some(n) => self.pending_step = n,
            None => return INVALID_STEP.to_string(),
        }
        format!("Move step: {}", self.pending_step)
    }

    fn save_step(&self) -> Result<(), String> {
        self.steps
            .save(self.pending_step)
            .map_err(|e| format!("Error: could not save move step: {e}"))
    }

    fn confirm(&mut self) -> String {
        if let Err(e) = self.save_step() {
            return e;
        }
        let message = format!("Move pixels updated to {}", self.pending_step);
        self.status.set(message.clone());
        message
    }

    fn start(&mut self) -> String {
        if let Err(e) = self.save_step() {
            return e;
        }
        self.status.set("");
        match self.listener.start() {
            Ok(pid) => format!("Listener started (PID {pid})."),
            Err(e) => {
                tracing::warn!("could not start listener: {e}");
                let message = format!("Error: could not start listener: {e}");
                self.status.set(message.clone());
                message
            }
        }
    }

    fn stop(&mut self) -> String {
        self.listener.stop();
        self.status.set("Listener stopped");
        "Listener stopped".to_string()
    }

    fn status(&mut self) -> String {
        let state = if self.listener.is_running() {
            match self.listener.pid() {
                Some(pid) => format!("running (PID {pid})"),
                None => "running".to_string(),
            }
        } else {
            "stopped".to_string()
        };
        format!("Listener: {state}\nStatus: {}", self.status.get())
    }

    fn theme(&mut self, args: &[&str]) -> String {
        match args {
            [] => describe_settings(self.settings()),
            [preset] => {
                let mut edited = self.settings.clone();
                if !edited.apply_preset(preset) {
                    return format!("Unknown theme '{preset}'. Presets: {}.", preset_names());
                }
                self.save_settings(edited)
            }
            [field, value] => {
                let mut edited = self.settings.clone();
                let applied = match field.to_ascii_lowercase().as_str() {
                    "background" | "bg" => edited.set_background(value),
                    "font" | "fg" => edited.set_font(value),
                    "name" => {
                        edited.set_theme(value);
                        Ok(())
                    }
                    other => return format!("Unknown theme field '{other}'."),
                };
                if let Err(e) = applied {
                    return format!("Error: {e}");
                }
                self.save_settings(edited)
            }
            _ => "Usage: theme [dark|light] or theme background|font|name VALUE".to_string(),
        }
    }

    fn save_settings(&mut self, edited: DisplaySettings) -> String {
        if let Err(e) = self.settings_store.save(&edited) {
            return format!("Error: could not save settings: {e}");
        }
        self.settings = edited;
        describe_settings(&self.settings)
    }
}

fn preset_names() -> String {
    PRESETS
        .iter()
        .map(|(name, _, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats display settings for printing.
pub fn describe_settings(settings: &DisplaySettings) -> String {
    format!(
        "Theme: {}\nBackground: {}\nFont: {}",
        settings.theme, settings.background_color, settings.font_color
    )
}

/// Reads commands from `input` until `quit` or end of input.
///
/// End of input stops the listener the same way `quit` does.
pub fn run<R: BufRead, W: Write>(panel: &mut Panel, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "winnudge control panel. Type 'help' for commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let reply = panel.handle(&line?);
        if !reply.text().is_empty() {
            writeln!(output, "{}", reply.text())?;
        }
        if let Reply::Quit(_) = reply {
            return Ok(());
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    panel.listener.stop();
    writeln!(output)?;
    Ok(())
}
